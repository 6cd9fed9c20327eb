use {
  crowdfund_primitives::{AccountId, CampaignId, Envelope, Receipt},
  std::future::Future,
  thiserror::Error,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContractError {
  #[error("user cancelled the transaction")]
  Rejected,

  #[error("transaction reverted: {0}")]
  Reverted(String),

  #[error("transport error: {0}")]
  Transport(String),
}

/// The deployed crowdfunding contract.
///
/// Only the payable `contribute(campaignId)` entry point is used.
pub trait ContributionContract {
  /// Address the contract is deployed at.
  fn address(&self) -> &AccountId;

  /// Sends `envelope.value` to `campaign` on behalf of `envelope.from`
  /// and resolves once the transaction is included in a block.
  fn contribute(
    &self,
    campaign: CampaignId,
    envelope: Envelope,
  ) -> impl Future<Output = Result<Receipt, ContractError>> + Send;
}
