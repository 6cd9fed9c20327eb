use {
  crate::{AccountId, CampaignId, ToHexString, Wei},
  multihash::{Code, MultihashDigest},
  once_cell::sync::OnceCell,
  serde::{Deserialize, Serialize},
  std::fmt::{Debug, Display},
};

/// Who pays for a contract call and how much currency it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
  pub from: AccountId,
  pub value: Wei,
}

/// Contract entry points callable by this application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Call {
  /// `contribute(uint256 campaignId)`, payable.
  Contribute { campaign: CampaignId },
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash([u8; 32]);

impl Display for TxHash {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0.to_hex())
  }
}

impl Debug for TxHash {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "tx({})", self.0.to_hex())
  }
}

/// A signed-off contract call addressed to a deployed contract.
///
/// The nonce is the number of transactions the sender submitted before
/// this one, it makes otherwise identical contributions hash differently.
#[derive(Clone, Serialize, Deserialize)]
pub struct Transaction {
  pub to: AccountId,
  pub envelope: Envelope,
  pub call: Call,
  pub nonce: u64,

  #[serde(skip)]
  hash_cache: OnceCell<TxHash>,
}

impl Transaction {
  pub fn new(to: AccountId, envelope: Envelope, call: Call, nonce: u64) -> Self {
    Self {
      to,
      envelope,
      call,
      nonce,
      hash_cache: OnceCell::new(),
    }
  }

  /// Sha3-256 over every field of the transaction.
  pub fn hash(&self) -> &TxHash {
    self.hash_cache.get_or_init(|| {
      let mut preimage = Vec::with_capacity(128);
      for part in [self.envelope.from.as_str(), self.to.as_str()] {
        preimage.extend_from_slice(&(part.len() as u64).to_le_bytes());
        preimage.extend_from_slice(part.as_bytes());
      }
      preimage.extend_from_slice(&self.envelope.value.value().to_le_bytes());
      match self.call {
        Call::Contribute { campaign } => {
          preimage.push(0);
          preimage.extend_from_slice(&campaign.to_le_bytes());
        }
      }
      preimage.extend_from_slice(&self.nonce.to_le_bytes());

      let digest = Code::Sha3_256.digest(&preimage);
      let mut bytes = [0u8; 32];
      bytes.copy_from_slice(digest.digest());
      TxHash(bytes)
    })
  }
}

impl Debug for Transaction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transaction")
      .field("to", &self.to)
      .field("envelope", &self.envelope)
      .field("call", &self.call)
      .field("nonce", &self.nonce)
      .field("hash", self.hash())
      .finish()
  }
}

/// Returned by a contract once a contribution is included in a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
  pub hash: TxHash,
  pub block: u64,
  pub from: AccountId,
  pub campaign: CampaignId,
  pub value: Wei,
}
