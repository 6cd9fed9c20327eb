use {
  serde::{Deserialize, Serialize},
  std::{
    fmt::{Debug, Display},
    num::ParseIntError,
  },
  thiserror::Error,
};

/// Number of decimal places between one ether and its smallest unit.
pub const ETHER_DECIMALS: u32 = 18;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("amount is empty")]
  Empty,

  #[error("amount must be a positive number")]
  NotPositive,

  #[error("invalid amount {0:?}")]
  Invalid(String),

  #[error("too many decimal places, at most 18 are allowed")]
  TooPrecise,

  #[error("amount too large")]
  Overflow,
}

/// An amount of currency in its smallest indivisible unit.
///
/// One ether is 10^18 wei. Amounts entered by users are in whole
/// ether with an optional fractional part, see [`Wei::parse_ether`].
#[derive(
  Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
  Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Wei(u128);

impl Wei {
  pub const ZERO: Wei = Wei(0);
  pub const PER_ETHER: u128 = 10u128.pow(ETHER_DECIMALS);

  pub const fn new(value: u128) -> Self {
    Self(value)
  }

  pub const fn value(&self) -> u128 {
    self.0
  }

  pub fn from_ether(whole: u64) -> Self {
    Self(whole as u128 * Self::PER_ETHER)
  }

  /// Converts a decimal amount of ether into wei.
  ///
  /// Accepts `"2"`, `"2.5"`, `".5"` and `"2."` forms. Negative, zero and
  /// non-numeric input is rejected, as is anything finer than one wei.
  pub fn parse_ether(input: &str) -> Result<Self, Error> {
    let input = input.trim();
    if input.is_empty() {
      return Err(Error::Empty);
    }

    if input.starts_with('-') {
      return Err(Error::NotPositive);
    }

    let (whole, fraction) = match input.split_once('.') {
      Some((whole, fraction)) => (whole, fraction),
      None => (input, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
      return Err(Error::Invalid(input.to_owned()));
    }

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) {
      return Err(Error::Invalid(input.to_owned()));
    }

    if fraction.len() > ETHER_DECIMALS as usize {
      return Err(Error::TooPrecise);
    }

    let whole = match whole {
      "" => 0,
      digits => digits.parse::<u128>().map_err(|_| Error::Overflow)?,
    };

    let fraction = match fraction {
      "" => 0,
      digits => {
        let padded =
          format!("{digits:0<width$}", width = ETHER_DECIMALS as usize);
        padded
          .parse::<u128>()
          .map_err(|_| Error::Invalid(input.to_owned()))?
      }
    };

    let value = whole
      .checked_mul(Self::PER_ETHER)
      .and_then(|w| w.checked_add(fraction))
      .ok_or(Error::Overflow)?;

    if value == 0 {
      return Err(Error::NotPositive);
    }

    Ok(Self(value))
  }

  /// Renders the amount in ether without trailing zeros.
  pub fn to_ether_string(&self) -> String {
    let whole = self.0 / Self::PER_ETHER;
    let fraction = self.0 % Self::PER_ETHER;
    if fraction == 0 {
      return whole.to_string();
    }

    let fraction =
      format!("{fraction:0>width$}", width = ETHER_DECIMALS as usize);
    format!("{whole}.{}", fraction.trim_end_matches('0'))
  }

  pub fn checked_add(self, other: Wei) -> Option<Wei> {
    self.0.checked_add(other.0).map(Wei)
  }

  pub fn checked_sub(self, other: Wei) -> Option<Wei> {
    self.0.checked_sub(other.0).map(Wei)
  }
}

impl Display for Wei {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} ETH", self.to_ether_string())
  }
}

impl Debug for Wei {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "wei({})", self.0)
  }
}

impl From<u128> for Wei {
  fn from(value: u128) -> Self {
    Self(value)
  }
}

// serialized as a decimal string of wei, the way JSON-RPC
// clients usually pass quantities that overflow a double.
impl From<Wei> for String {
  fn from(value: Wei) -> Self {
    value.0.to_string()
  }
}

impl TryFrom<String> for Wei {
  type Error = ParseIntError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse().map(Wei)
  }
}

#[cfg(test)]
mod tests {
  use super::{Error, Wei};

  #[test]
  fn parses_whole_and_fractional_ether() -> anyhow::Result<()> {
    assert_eq!(Wei::parse_ether("2.5")?.value(), 2_500_000_000_000_000_000);
    assert_eq!(Wei::parse_ether("1")?, Wei::from_ether(1));
    assert_eq!(Wei::parse_ether(" .5 ")?.value(), 500_000_000_000_000_000);
    assert_eq!(Wei::parse_ether("3.")?, Wei::from_ether(3));
    assert_eq!(Wei::parse_ether("0.000000000000000001")?.value(), 1);
    Ok(())
  }

  #[test]
  fn rejects_invalid_amounts() {
    assert_eq!(Wei::parse_ether(""), Err(Error::Empty));
    assert_eq!(Wei::parse_ether("   "), Err(Error::Empty));
    assert_eq!(Wei::parse_ether("-1"), Err(Error::NotPositive));
    assert_eq!(Wei::parse_ether("0"), Err(Error::NotPositive));
    assert_eq!(Wei::parse_ether("0.000"), Err(Error::NotPositive));
    assert_eq!(Wei::parse_ether("."), Err(Error::Invalid(".".into())));
    assert_eq!(Wei::parse_ether("1e3"), Err(Error::Invalid("1e3".into())));
    assert_eq!(
      Wei::parse_ether("1.2.3"),
      Err(Error::Invalid("1.2.3".into()))
    );
    assert_eq!(
      Wei::parse_ether("0.0000000000000000001"),
      Err(Error::TooPrecise)
    );
    assert_eq!(
      Wei::parse_ether("999999999999999999999999999999"),
      Err(Error::Overflow)
    );
  }

  #[test]
  fn renders_ether_without_trailing_zeros() -> anyhow::Result<()> {
    assert_eq!(Wei::parse_ether("2.50")?.to_ether_string(), "2.5");
    assert_eq!(Wei::from_ether(100).to_string(), "100 ETH");
    assert_eq!(Wei::new(1).to_ether_string(), "0.000000000000000001");
    Ok(())
  }
}
