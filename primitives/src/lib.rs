mod address;
mod amount;
mod campaign;
mod encoding;
mod transaction;

pub use {
  address::{AccountId, Error as AddressError},
  amount::{Error as AmountError, Wei, ETHER_DECIMALS},
  campaign::{mock_campaigns, Campaign, CampaignId},
  encoding::ToHexString,
  transaction::{Call, Envelope, Receipt, Transaction, TxHash},
};
