use {crowdfund_primitives::Wei, std::time::Duration};

/// Local devnode configuration.
#[derive(Debug, Clone)]
pub struct Config {
  /// Network identifier the node reports, contract artifacts
  /// are resolved against this value.
  pub network_id: String,

  /// Number of pre-funded accounts.
  pub accounts: usize,

  /// Balance every pre-funded account starts with.
  pub initial_balance: Wei,

  /// Simulated time it takes to mine a block.
  pub block_time: Duration,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      network_id: "5777".into(),
      accounts: 10,
      initial_balance: Wei::from_ether(100),
      block_time: Duration::ZERO,
    }
  }
}
