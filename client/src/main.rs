use {
  crate::{
    command::Command,
    console::Console,
    render::HELP,
    repl::{execute, show},
    settings::SystemSettings,
    wallet::{ConfirmingContract, TerminalWallet, WalletKind},
  },
  clap::Parser,
  crowdfund_devnode::LocalNode,
  crowdfund_primitives::mock_campaigns,
  crowdfund_sdk::{SystemClock, WalletSession},
  std::{sync::Arc, time::SystemTime},
  tracing::{info, subscriber::set_global_default},
  tracing_subscriber::{EnvFilter, FmtSubscriber},
};

mod command;
mod console;
mod render;
mod repl;
mod settings;
mod wallet;

fn init_logging(settings: &SystemSettings) -> anyhow::Result<()> {
  let filter = match settings.log() {
    Some(directives) => EnvFilter::try_new(directives)?,
    None => EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("info")),
  };

  set_global_default(
    FmtSubscriber::builder()
      .with_env_filter(filter)
      .with_writer(std::io::stderr)
      .finish(),
  )?;
  Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let settings = SystemSettings::parse();
  init_logging(&settings)?;
  info!("Client options: {settings:?}");

  // the contract address comes from the artifact deployment
  // record of the configured network.
  let artifact = settings.artifact()?;
  artifact.ensure_entry_point("contribute")?;
  let deployment = artifact.deployment(settings.network_id())?;
  info!(
    "{} is deployed at {} on network {}",
    artifact.contract_name,
    deployment.address,
    settings.network_id()
  );

  let node = Arc::new(LocalNode::new(settings.devnode()));
  let campaigns = mock_campaigns(SystemTime::now());
  let contract = node.deploy(deployment.address.clone(), &campaigns)?;

  let console = Arc::new(Console::stdin());
  let provider = match settings.wallet() {
    WalletKind::Terminal => Some(TerminalWallet::new(
      node.clone(),
      console.clone(),
      settings.auto_approve(),
    )),
    WalletKind::None => None,
  };

  let mut session = WalletSession::with_campaigns(
    provider,
    ConfirmingContract::new(contract, console.clone(), settings.auto_approve()),
    SystemClock,
    campaigns,
  );

  session.connect().await.ok();
  show(&session);
  println!("{HELP}");

  while let Some(line) = console.prompt("> ").await? {
    let command = match line.parse::<Command>() {
      Ok(command) => command,
      Err(command::Error::Empty) => continue,
      Err(e) => {
        println!("{e}");
        continue;
      }
    };

    if !execute(command, &mut session, &*console).await? {
      break;
    }
  }

  info!("bye");
  Ok(())
}
