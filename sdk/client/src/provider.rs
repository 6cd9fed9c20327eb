use {
  crowdfund_primitives::AccountId,
  std::{future::Future, sync::Arc},
  thiserror::Error,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
  /// The user declined the request in the wallet (EIP-1193 code 4001).
  #[error("user rejected the request")]
  Rejected,

  #[error("wallet returned no authorized accounts")]
  NoAccounts,

  #[error("wallet request failed: {0}")]
  Request(String),
}

/// A wallet that holds user accounts and can authorize this
/// application to act on their behalf.
pub trait WalletProvider {
  /// Asks the wallet to grant this application access to its accounts.
  ///
  /// Interactive wallets ask their user for consent here, so this call
  /// may take arbitrarily long and fail with [`ProviderError::Rejected`].
  fn request_accounts(
    &self,
  ) -> impl Future<Output = Result<Vec<AccountId>, ProviderError>> + Send;

  /// Lists accounts this application is currently authorized to use.
  fn accounts(
    &self,
  ) -> impl Future<Output = Result<Vec<AccountId>, ProviderError>> + Send;
}

impl<T: WalletProvider> WalletProvider for Arc<T> {
  fn request_accounts(
    &self,
  ) -> impl Future<Output = Result<Vec<AccountId>, ProviderError>> + Send {
    self.as_ref().request_accounts()
  }

  fn accounts(
    &self,
  ) -> impl Future<Output = Result<Vec<AccountId>, ProviderError>> + Send {
    self.as_ref().accounts()
  }
}
