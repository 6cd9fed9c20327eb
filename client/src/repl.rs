use {
  crate::{
    command::Command,
    console::Console,
    render::{render, HELP},
    wallet::ConfirmingContract,
  },
  crowdfund_devnode::LocalContract,
  crowdfund_sdk::{Clock, Error, WalletProvider, WalletSession},
  tokio::io::AsyncBufRead,
  tracing::{error, info},
};

/// A session contributing through the local chain, with every
/// transaction confirmed on the console read by `R`.
pub type Session<W, R, K> =
  WalletSession<W, ConfirmingContract<LocalContract, R>, K>;

pub fn show<W, R, K>(session: &Session<W, R, K>)
where
  W: WalletProvider,
  R: AsyncBufRead + Unpin + Send,
  K: Clock,
{
  println!("{}", render(session.account(), session.campaigns()));
}

fn show_balances<W, R, K>(session: &Session<W, R, K>)
where
  W: WalletProvider,
  R: AsyncBufRead + Unpin + Send,
  K: Clock,
{
  let contract = session.contract().inner();
  if let Some(account) = session.account() {
    println!("Balance of {account}: {}", contract.node().balance(account));
  }

  for campaign in session.board().all() {
    let yours = session
      .account()
      .map(|account| contract.contributed(campaign.id, account))
      .unwrap_or_default();
    println!(
      "[{}] {}: raised {}, yours {}",
      campaign.id,
      campaign.name,
      contract.raised(campaign.id),
      yours
    );
  }
}

/// Runs one command, returns false once the client should exit.
pub async fn execute<W, R, K>(
  command: Command,
  session: &mut Session<W, R, K>,
  console: &Console<R>,
) -> anyhow::Result<bool>
where
  W: WalletProvider,
  R: AsyncBufRead + Unpin + Send,
  K: Clock,
{
  match command {
    Command::Connect => {
      // failures are logged and leave the session as it was
      session.connect().await.ok();
      show(session);
    }
    Command::Refresh => {
      session.refresh();
      show(session);
    }
    Command::List => show(session),
    Command::Balance => show_balances(session),
    Command::Help => println!("{HELP}"),
    Command::Quit => return Ok(false),
    Command::Contribute { campaign, amount } => {
      if session.board().get(campaign).is_none() {
        let e = Error::UnknownCampaign(campaign);
        error!("Error contributing to campaign {campaign}: {e}");
        show(session);
        return Ok(true);
      }

      let amount = match amount {
        Some(amount) => amount,
        None => match console.prompt("Enter amount in ETH: ").await? {
          Some(amount) => amount,
          None => return Ok(false),
        },
      };

      if amount.is_empty() {
        info!("contribution to campaign {campaign} cancelled");
      } else {
        session.contribute(campaign, &amount).await.ok();
      }
      show(session);
    }
  }
  Ok(true)
}

#[cfg(test)]
mod tests {
  use {
    super::{execute, Session},
    crate::{command::Command, console::Console, wallet::ConfirmingContract},
    crowdfund_devnode::{Config, LocalNode},
    crowdfund_primitives::{mock_campaigns, CampaignId, Wei},
    crowdfund_sdk::{SystemClock, WalletSession},
    std::{sync::Arc, time::SystemTime},
    tokio::io::BufReader,
  };

  type Input = BufReader<&'static [u8]>;

  struct Client {
    node: Arc<LocalNode>,
    console: Arc<Console<Input>>,
    session: Session<Arc<LocalNode>, Input, SystemClock>,
  }

  async fn client(input: &'static str) -> anyhow::Result<Client> {
    let node = Arc::new(LocalNode::new(Config::default()));
    let campaigns = mock_campaigns(SystemTime::now());
    let deployed = node.deploy("0x5b18".parse()?, &campaigns)?;
    let console =
      Arc::new(Console::from_reader(BufReader::new(input.as_bytes())));

    let mut session = WalletSession::with_campaigns(
      Some(node.clone()),
      ConfirmingContract::new(deployed, console.clone(), true),
      SystemClock,
      campaigns,
    );
    session.connect().await?;

    Ok(Client {
      node,
      console,
      session,
    })
  }

  fn contribute(campaign: CampaignId) -> Command {
    Command::Contribute {
      campaign,
      amount: None,
    }
  }

  #[tokio::test]
  async fn omitted_amount_is_asked_for() -> anyhow::Result<()> {
    let Client {
      node,
      console,
      mut session,
    } = client("2.5\n\n").await?;

    // answered with an amount
    assert!(execute(contribute(1), &mut session, &*console).await?);
    assert_eq!(node.block_number(), 1);
    assert_eq!(
      session.contract().inner().raised(1),
      Wei::parse_ether("2.5")?
    );

    // empty answer cancels
    assert!(execute(contribute(1), &mut session, &*console).await?);
    assert_eq!(node.block_number(), 1);

    // closed input ends the client
    assert!(!execute(contribute(1), &mut session, &*console).await?);
    assert_eq!(node.block_number(), 1);
    Ok(())
  }

  #[tokio::test]
  async fn unknown_campaign_is_rejected_before_asking() -> anyhow::Result<()> {
    let Client {
      node,
      console,
      mut session,
    } = client("2.5\n").await?;

    assert!(execute(contribute(9), &mut session, &*console).await?);
    assert_eq!(node.block_number(), 0);

    // the pending answer was not consumed
    assert_eq!(console.prompt("").await?.as_deref(), Some("2.5"));
    Ok(())
  }

  #[tokio::test]
  async fn amount_given_inline_is_not_asked_for() -> anyhow::Result<()> {
    let Client {
      node,
      console,
      mut session,
    } = client("").await?;

    let command = Command::Contribute {
      campaign: 0,
      amount: Some("1".into()),
    };
    assert!(execute(command, &mut session, &*console).await?);
    assert_eq!(node.block_number(), 1);
    assert_eq!(session.contract().inner().raised(0), Wei::from_ether(1));

    assert!(!execute(Command::Quit, &mut session, &*console).await?);
    Ok(())
  }
}
