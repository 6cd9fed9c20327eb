use {
  crate::wallet::WalletKind,
  clap::Parser,
  crowdfund_devnode::Config,
  crowdfund_primitives::Wei,
  crowdfund_sdk::{ArtifactError, ContractArtifact},
  humantime::Duration,
  std::path::PathBuf,
};

const BUNDLED_ARTIFACT: &str = include_str!("../artifacts/Crowdfunding.json");

/// Crowdfund Terminal Client
///
/// Connects a wallet to the crowdfunding contract of a local development
/// chain and lets you contribute ether to the open campaigns.
#[derive(Debug, Parser)]
pub struct SystemSettings {
  /// Network identifier the contract deployment is looked up under
  #[clap(short, long, default_value = "5777", value_name = "IDENTIFIER")]
  network_id: String,

  /// Path to a compiled contract artifact, the bundled
  /// Crowdfunding artifact is used when omitted
  #[clap(long, short, value_name = "PATH")]
  artifact: Option<PathBuf>,

  /// Wallet that holds the contributing accounts
  #[clap(long, short, value_enum, default_value_t = WalletKind::Terminal)]
  wallet: WalletKind,

  /// Grant account access and confirm transactions without asking
  #[clap(long, short = 'y')]
  auto_approve: bool,

  /// Number of pre-funded development accounts
  #[clap(long, default_value = "10", value_name = "COUNT")]
  dev_accounts: usize,

  /// Starting balance of every development account, in ether
  #[clap(long,
    default_value = "100",
    value_name = "ETHER",
    value_parser = Wei::parse_ether)]
  initial_balance: Wei,

  /// Time it takes the local chain to mine a transaction
  #[clap(long, short = 't', value_name = "DURATION", default_value = "0s")]
  block_time: Duration,

  /// Log filter directives, takes precedence over RUST_LOG
  #[clap(long, value_name = "FILTER")]
  log: Option<String>,
}

impl SystemSettings {
  pub fn network_id(&self) -> &str {
    &self.network_id
  }

  pub fn wallet(&self) -> WalletKind {
    self.wallet
  }

  pub fn auto_approve(&self) -> bool {
    self.auto_approve
  }

  pub fn log(&self) -> Option<&str> {
    self.log.as_deref()
  }

  pub fn artifact(&self) -> Result<ContractArtifact, ArtifactError> {
    match &self.artifact {
      Some(path) => ContractArtifact::load(path),
      None => ContractArtifact::from_json(BUNDLED_ARTIFACT),
    }
  }

  pub fn devnode(&self) -> Config {
    Config {
      network_id: self.network_id.clone(),
      accounts: self.dev_accounts,
      initial_balance: self.initial_balance,
      block_time: self.block_time.into(),
    }
  }
}
