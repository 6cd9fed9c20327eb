use {
  crate::ToHexString,
  serde::{Deserialize, Serialize},
  std::{
    fmt::{Debug, Display},
    ops::Deref,
    str::FromStr,
  },
  thiserror::Error,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("account identifier must start with 0x")]
  MissingPrefix,

  #[error("account identifier has no digits after 0x")]
  Empty,

  #[error("invalid hex digit {0:?} in account identifier")]
  InvalidDigit(char),
}

/// Identifies an account authorized by a wallet provider.
///
/// Providers report accounts as `0x` prefixed hex strings. Some of them
/// use the mixed-case checksum convention, so the identifier is kept
/// exactly as reported instead of being normalized. Two identifiers are
/// the same account only if their text matches.
///
/// Accounts generated locally (see [`AccountId::from_bytes`]) are always
/// 20 bytes rendered as 40 lowercase hex digits.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
  pub fn new(value: impl Into<String>) -> Result<Self, Error> {
    let value = value.into();
    let digits = value
      .strip_prefix("0x")
      .or_else(|| value.strip_prefix("0X"))
      .ok_or(Error::MissingPrefix)?;

    if digits.is_empty() {
      return Err(Error::Empty);
    }

    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
      return Err(Error::InvalidDigit(c));
    }

    Ok(Self(value))
  }

  pub fn from_bytes(bytes: [u8; 20]) -> Self {
    Self(bytes.to_hex())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Deref for AccountId {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl AsRef<str> for AccountId {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl Display for AccountId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Debug for AccountId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "account({})", self.0)
  }
}

impl From<AccountId> for String {
  fn from(account: AccountId) -> Self {
    account.0
  }
}

impl TryFrom<String> for AccountId {
  type Error = Error;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl TryFrom<&str> for AccountId {
  type Error = Error;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl FromStr for AccountId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::new(s)
  }
}
