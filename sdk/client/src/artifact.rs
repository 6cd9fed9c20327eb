use {
  crowdfund_primitives::AccountId,
  serde::Deserialize,
  std::{collections::HashMap, path::Path},
  thiserror::Error,
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Malformed contract artifact: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Contract is not deployed on network {0}")]
  UnknownNetwork(String),

  #[error("Contract ABI has no payable {0}(uint256) function")]
  MissingEntryPoint(String),
}

/// Build output describing a compiled contract and where it is deployed.
///
/// This is the JSON layout emitted by Truffle:
///
/// ```json
/// {
///   "contractName": "Crowdfunding",
///   "abi": [ { "type": "function", "name": "contribute", ... } ],
///   "networks": { "5777": { "address": "0x..." } }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
  pub contract_name: String,
  pub abi: Vec<AbiEntry>,

  /// Deployments keyed by network identifier.
  #[serde(default)]
  pub networks: HashMap<String, Deployment>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
  #[serde(rename = "type")]
  pub kind: String,

  #[serde(default)]
  pub name: Option<String>,

  #[serde(default)]
  pub inputs: Vec<AbiParam>,

  #[serde(default)]
  pub state_mutability: Option<String>,

  /// Pre-0.5 solidity compilers emit this instead of `stateMutability`.
  #[serde(default)]
  pub payable: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbiParam {
  #[serde(default)]
  pub name: String,

  #[serde(rename = "type")]
  pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
  pub address: AccountId,

  #[serde(default)]
  pub transaction_hash: Option<String>,
}

impl AbiEntry {
  fn is_payable(&self) -> bool {
    self.state_mutability.as_deref() == Some("payable")
      || self.payable == Some(true)
  }
}

impl ContractArtifact {
  pub fn from_json(json: &str) -> Result<Self, Error> {
    Ok(serde_json::from_str(json)?)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
    Self::from_json(&std::fs::read_to_string(path)?)
  }

  /// Looks up where the contract is deployed on a given network.
  pub fn deployment(&self, network_id: &str) -> Result<&Deployment, Error> {
    self
      .networks
      .get(network_id)
      .ok_or_else(|| Error::UnknownNetwork(network_id.to_owned()))
  }

  /// Verifies that the ABI has a payable function `name` taking a
  /// single `uint256`, which is how `contribute` is called.
  pub fn ensure_entry_point(&self, name: &str) -> Result<(), Error> {
    self
      .abi
      .iter()
      .find(|entry| {
        entry.kind == "function"
          && entry.name.as_deref() == Some(name)
          && entry.is_payable()
          && entry.inputs.len() == 1
          && entry.inputs[0].kind == "uint256"
      })
      .map(|_| ())
      .ok_or_else(|| Error::MissingEntryPoint(name.to_owned()))
  }
}
