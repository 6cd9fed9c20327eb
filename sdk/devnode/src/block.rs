use crowdfund_primitives::Transaction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
  Success,
  Reverted(String),
}

/// A mined block. The devnode mines one block per transaction.
#[derive(Debug, Clone)]
pub struct Block {
  pub number: u64,

  /// Unix timestamp in seconds.
  pub timestamp: u64,
  pub transaction: Transaction,
  pub status: Status,
}
