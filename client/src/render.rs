use {
  crowdfund_primitives::{AccountId, Campaign},
  crowdfund_sdk::ends_at_label,
};

/// Text view of a session: the connection banner followed by
/// one card per campaign.
pub fn render(account: Option<&AccountId>, campaigns: &[Campaign]) -> String {
  let mut lines = vec![match account {
    Some(account) => format!("Connected: {account}"),
    None => "Please connect your wallet".to_owned(),
  }];

  if campaigns.is_empty() {
    lines.push("No active campaigns available.".to_owned());
  }

  for campaign in campaigns {
    lines.push(String::new());
    lines.push(format!("[{}] {}", campaign.id, campaign.name));
    lines.push(format!("    {}", campaign.description));
    lines.push(format!(
      "    Ends: {} ({})",
      ends_at_label(campaign),
      campaign.remaining.as_deref().unwrap_or("unknown")
    ));
  }

  lines.push(String::new());
  lines.join("\n")
}

pub const HELP: &str = "\
Commands:
  connect                        request access to wallet accounts
  refresh                        recompute time left for every campaign
  list                           show campaigns
  contribute <campaign> [ether]  send ether to a campaign
  balance                        show account balance and funds raised
  help                           show this message
  quit                           leave";

#[cfg(test)]
mod tests {
  use {
    super::render,
    crowdfund_primitives::{mock_campaigns, AccountId},
    std::time::{Duration, UNIX_EPOCH},
  };

  #[test]
  fn disconnected_without_campaigns() {
    assert_eq!(
      render(None, &[]),
      "Please connect your wallet\nNo active campaigns available.\n"
    );
  }

  #[test]
  fn connected_with_campaign_cards() -> anyhow::Result<()> {
    let account = AccountId::new("0xABC")?;
    let mut campaigns = mock_campaigns(UNIX_EPOCH);
    campaigns[0].remaining = Some("5days".into());
    campaigns.truncate(1);

    let text = render(Some(&account), &campaigns);

    assert_eq!(
      text,
      "Connected: 0xABC\n\
       \n\
       [0] Water for All\n    \
       Clean water access for rural communities.\n    \
       Ends: 1970-01-06T00:00:00Z (5days)\n"
    );
    Ok(())
  }

  #[test]
  fn ended_campaigns_still_render() -> anyhow::Result<()> {
    let mut campaigns = mock_campaigns(UNIX_EPOCH + Duration::from_secs(60));
    for campaign in campaigns.iter_mut() {
      campaign.remaining = Some("ended".into());
    }

    let text = render(None, &campaigns);
    assert_eq!(text.matches("(ended)").count(), 3);
    assert!(text.contains("[2] Tree Planting"));
    Ok(())
  }
}
