use {
  crate::{
    CampaignBoard,
    Clock,
    ContributionContract,
    Error,
    ProviderError,
    SystemClock,
    WalletProvider,
  },
  crowdfund_primitives::{
    mock_campaigns,
    AccountId,
    Campaign,
    CampaignId,
    Envelope,
    Receipt,
    Wei,
  },
  tracing::{error, info},
};

/// Connection state of a wallet session.
///
/// A session starts disconnected and becomes connected after the first
/// successful [`WalletSession::connect`]. There is no way back, a wallet
/// disconnecting on its side is not observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
  #[default]
  Disconnected,
  Connected(AccountId),
}

/// Owns the connected account and the campaign list, and runs the
/// connect and contribute workflows against a wallet and a contract.
///
/// Every failing operation logs its error before returning it, and
/// leaves the session exactly as it was before the call.
pub struct WalletSession<W, C, K = SystemClock> {
  provider: Option<W>,
  contract: C,
  clock: K,
  state: SessionState,
  board: CampaignBoard,
}

impl<W, C> WalletSession<W, C, SystemClock>
where
  W: WalletProvider,
  C: ContributionContract,
{
  /// Creates a session over the standard campaign list, with deadlines
  /// counted from the current time.
  pub fn new(provider: Option<W>, contract: C) -> Self {
    Self::with_clock(provider, contract, SystemClock)
  }
}

impl<W, C, K> WalletSession<W, C, K>
where
  W: WalletProvider,
  C: ContributionContract,
  K: Clock,
{
  pub fn with_clock(provider: Option<W>, contract: C, clock: K) -> Self {
    let campaigns = mock_campaigns(clock.now());
    Self::with_campaigns(provider, contract, clock, campaigns)
  }

  pub fn with_campaigns(
    provider: Option<W>,
    contract: C,
    clock: K,
    campaigns: Vec<Campaign>,
  ) -> Self {
    Self {
      provider,
      contract,
      clock,
      state: SessionState::Disconnected,
      board: CampaignBoard::new(campaigns),
    }
  }

  pub fn state(&self) -> &SessionState {
    &self.state
  }

  pub fn account(&self) -> Option<&AccountId> {
    match &self.state {
      SessionState::Connected(account) => Some(account),
      SessionState::Disconnected => None,
    }
  }

  pub fn is_connected(&self) -> bool {
    self.account().is_some()
  }

  pub fn has_provider(&self) -> bool {
    self.provider.is_some()
  }

  /// Campaigns to display, empty until the first refresh.
  pub fn campaigns(&self) -> &[Campaign] {
    self.board.displayed()
  }

  pub fn board(&self) -> &CampaignBoard {
    &self.board
  }

  pub fn contract(&self) -> &C {
    &self.contract
  }

  pub fn provider(&self) -> Option<&W> {
    self.provider.as_ref()
  }

  /// Asks the wallet for account access and makes its first
  /// authorized account the session account, then refreshes campaigns.
  pub async fn connect(&mut self) -> Result<AccountId, Error> {
    match self.authorize().await {
      Ok(account) => {
        info!("Connected: {account}");
        self.state = SessionState::Connected(account.clone());
        self.refresh();
        Ok(account)
      }
      Err(e) => {
        error!("Error requesting accounts: {e}");
        Err(e)
      }
    }
  }

  async fn authorize(&self) -> Result<AccountId, Error> {
    let provider = self.provider.as_ref().ok_or(Error::WalletUnavailable)?;

    provider
      .request_accounts()
      .await
      .map_err(Error::AuthorizationFailed)?;

    provider
      .accounts()
      .await
      .map_err(Error::AuthorizationFailed)?
      .into_iter()
      .next()
      .ok_or(Error::AuthorizationFailed(ProviderError::NoAccounts))
  }

  /// Recomputes the time left for every campaign.
  pub fn refresh(&mut self) {
    self.board.refresh(self.clock.now());
  }

  /// Contributes `amount` ether from the session account to a campaign.
  ///
  /// The amount is converted to wei before it is sent. On success the
  /// campaign list is refreshed and the receipt returned.
  pub async fn contribute(
    &mut self,
    campaign: CampaignId,
    amount: &str,
  ) -> Result<Receipt, Error> {
    match self.submit(campaign, amount).await {
      Ok(receipt) => {
        info!(
          "Contributed {} to campaign {campaign} in tx {} (block {})",
          receipt.value, receipt.hash, receipt.block
        );
        self.refresh();
        Ok(receipt)
      }
      Err(e) => {
        error!("Error contributing to campaign {campaign}: {e}");
        Err(e)
      }
    }
  }

  async fn submit(
    &self,
    campaign: CampaignId,
    amount: &str,
  ) -> Result<Receipt, Error> {
    let value = Wei::parse_ether(amount)?;

    if self.board.get(campaign).is_none() {
      return Err(Error::UnknownCampaign(campaign));
    }

    let from = self.account().cloned().ok_or(Error::NotConnected)?;

    info!(
      "Sending {value} to campaign {campaign} at {} from {from}",
      self.contract.address()
    );

    self
      .contract
      .contribute(campaign, Envelope { from, value })
      .await
      .map_err(Error::ContributionFailed)
  }
}
