//! Wallet session controller for the crowdfund client.
//!
//! A [`WalletSession`] connects to a [`WalletProvider`] to obtain the
//! account that signs contributions, keeps the fixed list of campaigns
//! up to date and forwards contributions to a [`ContributionContract`].

mod artifact;
mod board;
mod clock;
mod contract;
mod error;
mod provider;
mod session;

pub use {
  artifact::{
    AbiEntry,
    AbiParam,
    ContractArtifact,
    Deployment,
    Error as ArtifactError,
  },
  board::{ends_at_label, remaining_label, CampaignBoard},
  clock::{Clock, ManualClock, SystemClock},
  contract::{ContractError, ContributionContract},
  error::Error,
  provider::{ProviderError, WalletProvider},
  session::{SessionState, WalletSession},
};
