use {
  crate::{ContractError, ProviderError},
  crowdfund_primitives::{AmountError, CampaignId},
  thiserror::Error,
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("no wallet provider is available")]
  WalletUnavailable,

  #[error("account authorization failed: {0}")]
  AuthorizationFailed(#[source] ProviderError),

  #[error("wallet is not connected")]
  NotConnected,

  #[error("unknown campaign {0}")]
  UnknownCampaign(CampaignId),

  #[error("invalid contribution amount: {0}")]
  InvalidAmount(#[from] AmountError),

  #[error("contribution failed: {0}")]
  ContributionFailed(#[source] ContractError),
}
