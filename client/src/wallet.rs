use {
  crate::console::Console,
  clap::ValueEnum,
  crowdfund_devnode::LocalNode,
  crowdfund_primitives::{AccountId, CampaignId, Envelope, Receipt},
  crowdfund_sdk::{
    ContractError,
    ContributionContract,
    ProviderError,
    WalletProvider,
  },
  std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
  },
  tokio::io::{AsyncBufRead, BufReader, Stdin},
  tracing::{debug, info},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WalletKind {
  /// Development accounts unlocked after confirming on the terminal
  Terminal,

  /// No wallet installed, contributions are not possible
  None,
}

fn approved(answer: Option<&str>) -> bool {
  matches!(
    answer.map(str::to_ascii_lowercase).as_deref(),
    Some("y" | "yes")
  )
}

/// Holds the accounts of the local development chain and only hands
/// them out once the user allowed it on the terminal.
///
/// Access stays granted for the lifetime of the wallet.
pub struct TerminalWallet<R = BufReader<Stdin>> {
  node: Arc<LocalNode>,
  console: Arc<Console<R>>,
  granted: AtomicBool,
}

impl<R: AsyncBufRead + Unpin + Send> TerminalWallet<R> {
  pub fn new(
    node: Arc<LocalNode>,
    console: Arc<Console<R>>,
    auto_approve: bool,
  ) -> Self {
    Self {
      node,
      console,
      granted: AtomicBool::new(auto_approve),
    }
  }
}

impl<R: AsyncBufRead + Unpin + Send> WalletProvider for TerminalWallet<R> {
  async fn request_accounts(&self) -> Result<Vec<AccountId>, ProviderError> {
    if !self.granted.load(Ordering::SeqCst) {
      let answer = self
        .console
        .prompt("Allow crowdfund to access your accounts? [y/N] ")
        .await
        .map_err(|e| ProviderError::Request(e.to_string()))?;

      if !approved(answer.as_deref()) {
        return Err(ProviderError::Rejected);
      }

      info!("account access granted");
      self.granted.store(true, Ordering::SeqCst);
    }

    self.accounts().await
  }

  async fn accounts(&self) -> Result<Vec<AccountId>, ProviderError> {
    match self.granted.load(Ordering::SeqCst) {
      true => self.node.accounts().await,
      false => Ok(vec![]),
    }
  }
}

/// Asks on the terminal before any contribution leaves the wallet,
/// declining cancels the transaction.
pub struct ConfirmingContract<C, R = BufReader<Stdin>> {
  inner: C,
  console: Arc<Console<R>>,
  confirm: bool,
}

impl<C, R> ConfirmingContract<C, R> {
  pub fn new(inner: C, console: Arc<Console<R>>, auto_approve: bool) -> Self {
    Self {
      inner,
      console,
      confirm: !auto_approve,
    }
  }

  pub fn inner(&self) -> &C {
    &self.inner
  }
}

impl<C, R> ContributionContract for ConfirmingContract<C, R>
where
  C: ContributionContract + Sync,
  R: AsyncBufRead + Unpin + Send,
{
  fn address(&self) -> &AccountId {
    self.inner.address()
  }

  async fn contribute(
    &self,
    campaign: CampaignId,
    envelope: Envelope,
  ) -> Result<Receipt, ContractError> {
    if self.confirm {
      let question = format!(
        "Send {} from {} to campaign {campaign}? [y/N] ",
        envelope.value, envelope.from
      );
      let answer = self
        .console
        .prompt(&question)
        .await
        .map_err(|e| ContractError::Transport(e.to_string()))?;

      if !approved(answer.as_deref()) {
        debug!("contribution to campaign {campaign} declined");
        return Err(ContractError::Rejected);
      }
    }

    self.inner.contribute(campaign, envelope).await
  }
}
