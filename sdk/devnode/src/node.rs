use {
  crate::{
    block::{Block, Status},
    contract::{Crowdfunding, LocalContract},
    Config,
  },
  crowdfund_primitives::{
    AccountId,
    Call,
    Campaign,
    CampaignId,
    Envelope,
    Receipt,
    Transaction,
    Wei,
  },
  crowdfund_sdk::{
    Clock,
    ContractError,
    ProviderError,
    SystemClock,
    WalletProvider,
  },
  dashmap::{mapref::entry::Entry, DashMap},
  multihash::{Code, MultihashDigest},
  std::{
    sync::{
      atomic::{AtomicU64, Ordering},
      Arc,
    },
    time::{SystemTime, UNIX_EPOCH},
  },
  thiserror::Error,
  tokio::sync::{Mutex, RwLock},
  tracing::{debug, info, warn},
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("A contract is already deployed at {0}")]
  AlreadyDeployed(AccountId),
}

const ACCOUNT_SEED: &[u8] = b"crowdfund-devnode";
const INSUFFICIENT_FUNDS: &str = "insufficient funds";
const NO_CONTRACT: &str = "no contract at address";
const UNKNOWN_SENDER: &str = "sender account not recognized";

/// An in-process development chain.
///
/// Accounts are derived deterministically from their index, so every
/// node started with the same configuration has the same accounts.
/// Transactions are executed one at a time, each in its own block.
pub struct LocalNode {
  config: Config,
  clock: Arc<dyn Clock + Send + Sync>,
  accounts: Vec<AccountId>,
  balances: DashMap<AccountId, Wei>,
  nonces: DashMap<AccountId, u64>,
  contracts: DashMap<AccountId, Crowdfunding>,
  height: AtomicU64,
  blocks: RwLock<Vec<Block>>,
  mining: Mutex<()>,
}

/// Address of the pre-funded account at `index`.
pub(crate) fn dev_account(index: usize) -> AccountId {
  let mut seed = ACCOUNT_SEED.to_vec();
  seed.extend_from_slice(&(index as u64).to_le_bytes());
  let digest = Code::Sha3_256.digest(&seed);

  let mut address = [0u8; 20];
  address.copy_from_slice(&digest.digest()[..20]);
  AccountId::from_bytes(address)
}

fn unix_seconds(time: SystemTime) -> u64 {
  time
    .duration_since(UNIX_EPOCH)
    .map(|d| d.as_secs())
    .unwrap_or_default()
}

impl LocalNode {
  pub fn new(config: Config) -> Self {
    Self::with_clock(config, Arc::new(SystemClock))
  }

  pub fn with_clock(
    config: Config,
    clock: Arc<dyn Clock + Send + Sync>,
  ) -> Self {
    let accounts: Vec<_> = (0..config.accounts).map(dev_account).collect();
    let balances = accounts
      .iter()
      .map(|account| (account.clone(), config.initial_balance))
      .collect();

    info!(
      "local node {} started with {} accounts funded with {} each",
      config.network_id, config.accounts, config.initial_balance
    );

    Self {
      config,
      clock,
      accounts,
      balances,
      nonces: DashMap::new(),
      contracts: DashMap::new(),
      height: AtomicU64::new(0),
      blocks: RwLock::new(vec![]),
      mining: Mutex::new(()),
    }
  }

  pub fn network_id(&self) -> &str {
    &self.config.network_id
  }

  /// Pre-funded accounts, in derivation order.
  pub fn dev_accounts(&self) -> &[AccountId] {
    &self.accounts
  }

  /// Installs a crowdfunding contract for `campaigns` at `address`.
  pub fn deploy(
    self: &Arc<Self>,
    address: AccountId,
    campaigns: &[Campaign],
  ) -> Result<LocalContract, Error> {
    match self.contracts.entry(address.clone()) {
      Entry::Occupied(_) => Err(Error::AlreadyDeployed(address)),
      Entry::Vacant(slot) => {
        slot.insert(Crowdfunding::new(campaigns));
        info!(
          "crowdfunding contract deployed at {address} with {} campaigns",
          campaigns.len()
        );
        Ok(LocalContract::new(self.clone(), address))
      }
    }
  }

  /// Handle to a contract deployed earlier.
  pub fn contract(self: &Arc<Self>, address: &AccountId) -> Option<LocalContract> {
    self
      .contracts
      .contains_key(address)
      .then(|| LocalContract::new(self.clone(), address.clone()))
  }

  pub fn balance(&self, account: &AccountId) -> Wei {
    self
      .balances
      .get(account)
      .map(|b| *b.value())
      .unwrap_or_default()
  }

  pub fn nonce(&self, account: &AccountId) -> u64 {
    self.nonces.get(account).map(|n| *n.value()).unwrap_or(0)
  }

  pub fn raised(&self, contract: &AccountId, campaign: CampaignId) -> Wei {
    self
      .contracts
      .get(contract)
      .map(|c| c.raised(campaign))
      .unwrap_or_default()
  }

  pub fn contributed(
    &self,
    contract: &AccountId,
    campaign: CampaignId,
    account: &AccountId,
  ) -> Wei {
    self
      .contracts
      .get(contract)
      .map(|c| c.contributed(campaign, account))
      .unwrap_or_default()
  }

  pub fn block_number(&self) -> u64 {
    self.height.load(Ordering::SeqCst)
  }

  pub async fn blocks(&self) -> Vec<Block> {
    self.blocks.read().await.clone()
  }

  /// Mines a block with a single contract call.
  ///
  /// Reverted calls are mined too and consume the sender nonce,
  /// but leave balances and contract state untouched.
  pub(crate) async fn send(
    &self,
    to: &AccountId,
    call: Call,
    envelope: Envelope,
  ) -> Result<Receipt, ContractError> {
    if !self.accounts.contains(&envelope.from) {
      warn!("rejected transaction from {}: {UNKNOWN_SENDER}", envelope.from);
      return Err(ContractError::Transport(UNKNOWN_SENDER.to_owned()));
    }

    let _mining = self.mining.lock().await;
    if !self.config.block_time.is_zero() {
      tokio::time::sleep(self.config.block_time).await;
    }

    let from = envelope.from.clone();
    let value = envelope.value;
    let nonce = self.nonce(&from);
    let tx = Transaction::new(to.clone(), envelope, call, nonce);
    let hash = *tx.hash();
    let now = unix_seconds(self.clock.now());

    let status = match self.execute(&tx, now) {
      Ok(()) => Status::Success,
      Err(reason) => Status::Reverted(reason.to_owned()),
    };

    self.nonces.insert(from.clone(), nonce + 1);
    let number = self.height.fetch_add(1, Ordering::SeqCst) + 1;
    self.blocks.write().await.push(Block {
      number,
      timestamp: now,
      transaction: tx,
      status: status.clone(),
    });

    let Call::Contribute { campaign } = call;
    match status {
      Status::Success => {
        info!("block {number}: tx {hash} contributed {value} to {campaign}");
        Ok(Receipt {
          hash,
          block: number,
          from,
          campaign,
          value,
        })
      }
      Status::Reverted(reason) => {
        warn!("block {number}: tx {hash} reverted: {reason}");
        Err(ContractError::Reverted(reason))
      }
    }
  }

  fn execute(&self, tx: &Transaction, now: u64) -> Result<(), &'static str> {
    let Envelope { from, value } = &tx.envelope;
    let mut contract = self.contracts.get_mut(&tx.to).ok_or(NO_CONTRACT)?;

    let remaining = self
      .balance(from)
      .checked_sub(*value)
      .ok_or(INSUFFICIENT_FUNDS)?;

    match tx.call {
      Call::Contribute { campaign } => {
        contract.contribute(campaign, from, *value, now)?;
      }
    }

    debug!("{from} balance {} -> {remaining}", self.balance(from));
    self.balances.insert(from.clone(), remaining);
    Ok(())
  }
}

impl WalletProvider for LocalNode {
  // a local development chain has no authorization flow,
  // every account is available right away.
  async fn request_accounts(&self) -> Result<Vec<AccountId>, ProviderError> {
    debug!("granting access to {} local accounts", self.accounts.len());
    Ok(self.accounts.clone())
  }

  async fn accounts(&self) -> Result<Vec<AccountId>, ProviderError> {
    Ok(self.accounts.clone())
  }
}
