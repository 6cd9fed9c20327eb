use {
  crowdfund_primitives::CampaignId,
  std::str::FromStr,
  thiserror::Error,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("empty command")]
  Empty,

  #[error("unknown command '{0}', type 'help' for a list of commands")]
  Unknown(String),

  #[error("usage: contribute <campaign> [ether]")]
  Usage,

  #[error("'{0}' is not a campaign number")]
  InvalidCampaign(String),

  #[error("unexpected argument '{0}'")]
  UnexpectedArgument(String),
}

/// A line typed at the client prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Connect,
  Refresh,
  List,
  Contribute {
    campaign: CampaignId,
    amount: Option<String>,
  },
  Balance,
  Help,
  Quit,
}

impl FromStr for Command {
  type Err = Error;

  fn from_str(line: &str) -> Result<Self, Self::Err> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
      return Err(Error::Empty);
    };

    let command = match name.to_ascii_lowercase().as_str() {
      "connect" => Command::Connect,
      "refresh" => Command::Refresh,
      "list" | "ls" => Command::List,
      "balance" => Command::Balance,
      "help" | "?" => Command::Help,
      "quit" | "exit" => Command::Quit,
      "contribute" => {
        let campaign = words.next().ok_or(Error::Usage)?;
        let campaign = campaign
          .parse()
          .map_err(|_| Error::InvalidCampaign(campaign.to_owned()))?;
        Command::Contribute {
          campaign,
          amount: words.next().map(str::to_owned),
        }
      }
      _ => return Err(Error::Unknown(name.to_owned())),
    };

    match words.next() {
      Some(extra) => Err(Error::UnexpectedArgument(extra.to_owned())),
      None => Ok(command),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{Command, Error};

  #[test]
  fn parses_commands() {
    assert_eq!("connect".parse::<Command>(), Ok(Command::Connect));
    assert_eq!("  REFRESH ".parse::<Command>(), Ok(Command::Refresh));
    assert_eq!("ls".parse::<Command>(), Ok(Command::List));
    assert_eq!("balance".parse::<Command>(), Ok(Command::Balance));
    assert_eq!("?".parse::<Command>(), Ok(Command::Help));
    assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
  }

  #[test]
  fn contribute_amount_is_optional() {
    assert_eq!(
      "contribute 1 2.5".parse::<Command>(),
      Ok(Command::Contribute {
        campaign: 1,
        amount: Some("2.5".into())
      })
    );
    assert_eq!(
      "contribute 2".parse::<Command>(),
      Ok(Command::Contribute {
        campaign: 2,
        amount: None
      })
    );
  }

  #[test]
  fn malformed_lines_are_rejected() {
    assert_eq!("".parse::<Command>(), Err(Error::Empty));
    assert_eq!("   ".parse::<Command>(), Err(Error::Empty));
    assert_eq!(
      "donate 1".parse::<Command>(),
      Err(Error::Unknown("donate".into()))
    );
    assert_eq!("contribute".parse::<Command>(), Err(Error::Usage));
    assert_eq!(
      "contribute first 1".parse::<Command>(),
      Err(Error::InvalidCampaign("first".into()))
    );
    assert_eq!(
      "contribute -1 1".parse::<Command>(),
      Err(Error::InvalidCampaign("-1".into()))
    );
    assert_eq!(
      "contribute 1 2 3".parse::<Command>(),
      Err(Error::UnexpectedArgument("3".into()))
    );
    assert_eq!(
      "quit now".parse::<Command>(),
      Err(Error::UnexpectedArgument("now".into()))
    );
  }
}
