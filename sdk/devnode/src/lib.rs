//! Single node local ledger for development and tests.
//!
//! Plays the part of a local development chain: a fixed set of funded
//! accounts that need no authorization, and a crowdfunding contract
//! that accepts contributions until each campaign deadline. Every
//! submitted transaction is mined immediately into its own block.

mod block;
mod config;
mod contract;
mod node;

pub use {
  block::{Block, Status},
  config::Config,
  contract::{Crowdfunding, LocalContract},
  node::{Error, LocalNode},
};
