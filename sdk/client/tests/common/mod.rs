use {
  crowdfund_primitives::{
    AccountId,
    Call,
    CampaignId,
    Envelope,
    Receipt,
    Transaction,
  },
  crowdfund_sdk::{
    ContractError,
    ContributionContract,
    ProviderError,
    WalletProvider,
  },
  std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
  },
};

/// What a [`MockWallet`] answers to an authorization request.
#[derive(Debug, Clone)]
pub enum Authorization {
  Grant(Vec<AccountId>),
  Reject,
  Fail(String),
}

pub struct MockWallet {
  authorization: Mutex<Authorization>,
  requests: AtomicUsize,
}

impl MockWallet {
  pub fn new(authorization: Authorization) -> Self {
    Self {
      authorization: Mutex::new(authorization),
      requests: AtomicUsize::new(0),
    }
  }

  pub fn granting(accounts: &[&str]) -> anyhow::Result<Self> {
    Ok(Self::new(Authorization::Grant(
      accounts
        .iter()
        .map(|a| a.parse())
        .collect::<Result<_, _>>()?,
    )))
  }

  pub fn set(&self, authorization: Authorization) {
    *self.authorization.lock().unwrap() = authorization;
  }

  pub fn requests(&self) -> usize {
    self.requests.load(Ordering::SeqCst)
  }

  fn answer(&self) -> Result<Vec<AccountId>, ProviderError> {
    match &*self.authorization.lock().unwrap() {
      Authorization::Grant(accounts) => Ok(accounts.clone()),
      Authorization::Reject => Err(ProviderError::Rejected),
      Authorization::Fail(reason) => Err(ProviderError::Request(reason.clone())),
    }
  }
}

impl WalletProvider for MockWallet {
  async fn request_accounts(&self) -> Result<Vec<AccountId>, ProviderError> {
    self.requests.fetch_add(1, Ordering::SeqCst);
    self.answer()
  }

  async fn accounts(&self) -> Result<Vec<AccountId>, ProviderError> {
    self.answer()
  }
}

/// Records every contribution it receives and either accepts
/// them or fails them all with a configured error.
pub struct MockContract {
  address: AccountId,
  failure: Mutex<Option<ContractError>>,
  submitted: Mutex<Vec<(CampaignId, Envelope)>>,
}

impl MockContract {
  pub fn accepting() -> Self {
    Self {
      address: "0x00000000000000000000000000000000000000cf"
        .parse()
        .unwrap(),
      failure: Mutex::new(None),
      submitted: Mutex::new(vec![]),
    }
  }

  pub fn failing(error: ContractError) -> Self {
    let contract = Self::accepting();
    *contract.failure.lock().unwrap() = Some(error);
    contract
  }

  pub fn submitted(&self) -> Vec<(CampaignId, Envelope)> {
    self.submitted.lock().unwrap().clone()
  }
}

impl ContributionContract for MockContract {
  fn address(&self) -> &AccountId {
    &self.address
  }

  async fn contribute(
    &self,
    campaign: CampaignId,
    envelope: Envelope,
  ) -> Result<Receipt, ContractError> {
    let mut submitted = self.submitted.lock().unwrap();
    submitted.push((campaign, envelope.clone()));

    if let Some(error) = self.failure.lock().unwrap().clone() {
      return Err(error);
    }

    let tx = Transaction::new(
      self.address.clone(),
      envelope.clone(),
      Call::Contribute { campaign },
      submitted.len() as u64,
    );

    Ok(Receipt {
      hash: *tx.hash(),
      block: submitted.len() as u64,
      from: envelope.from,
      campaign,
      value: envelope.value,
    })
  }
}
