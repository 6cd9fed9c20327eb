use {
  crowdfund_primitives::{Campaign, CampaignId},
  std::time::SystemTime,
};

/// Human readable time left until a campaign closes,
/// for example `"4days 23h 59m 59s"`, or `"ended"`.
pub fn remaining_label(campaign: &Campaign, now: SystemTime) -> String {
  match campaign.time_left(now) {
    Some(left) => humantime::format_duration(left).to_string(),
    None => "ended".to_owned(),
  }
}

/// Absolute campaign deadline in RFC 3339 with seconds precision.
pub fn ends_at_label(campaign: &Campaign) -> String {
  humantime::format_rfc3339_seconds(campaign.deadline_time()).to_string()
}

/// The fixed collection of campaigns offered to contributors.
///
/// Campaigns are never added or removed. A refresh only recomputes
/// their `remaining` display value. Nothing is displayed until the
/// first refresh.
#[derive(Debug, Clone)]
pub struct CampaignBoard {
  campaigns: Vec<Campaign>,
  refreshes: usize,
}

impl CampaignBoard {
  pub fn new(campaigns: Vec<Campaign>) -> Self {
    Self {
      campaigns,
      refreshes: 0,
    }
  }

  pub fn refresh(&mut self, now: SystemTime) {
    for campaign in self.campaigns.iter_mut() {
      campaign.remaining = Some(remaining_label(campaign, now));
    }
    self.refreshes += 1;
  }

  /// Campaigns as the user should see them, empty before the first refresh.
  pub fn displayed(&self) -> &[Campaign] {
    match self.refreshes {
      0 => &[],
      _ => &self.campaigns,
    }
  }

  pub fn all(&self) -> &[Campaign] {
    &self.campaigns
  }

  pub fn get(&self, id: CampaignId) -> Option<&Campaign> {
    self.campaigns.iter().find(|c| c.id == id)
  }

  /// How many times the board was refreshed since it was created.
  pub fn refreshes(&self) -> usize {
    self.refreshes
  }
}

#[cfg(test)]
mod tests {
  use {
    super::{ends_at_label, remaining_label, CampaignBoard},
    crowdfund_primitives::mock_campaigns,
    std::time::{Duration, UNIX_EPOCH},
  };

  #[test]
  fn nothing_displayed_before_first_refresh() {
    let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let mut board = CampaignBoard::new(mock_campaigns(now));

    assert!(board.displayed().is_empty());
    assert_eq!(board.all().len(), 3);

    board.refresh(now);
    assert_eq!(board.displayed().len(), 3);
    assert_eq!(board.refreshes(), 1);
  }

  #[test]
  fn refresh_only_touches_remaining_time() {
    let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let seeded = mock_campaigns(now);
    let mut board = CampaignBoard::new(seeded.clone());

    board.refresh(now + Duration::from_secs(90));
    for (before, after) in seeded.iter().zip(board.all()) {
      assert_eq!(before.id, after.id);
      assert_eq!(before.name, after.name);
      assert_eq!(before.description, after.description);
      assert_eq!(before.deadline, after.deadline);
      assert!(after.remaining.is_some());
    }

    assert_eq!(
      board.get(0).and_then(|c| c.remaining.clone()).as_deref(),
      Some("4days 23h 58m 30s")
    );
  }

  #[test]
  fn refresh_is_idempotent_without_elapsed_time() {
    let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let mut board = CampaignBoard::new(mock_campaigns(now));

    board.refresh(now);
    let first = board.all().to_vec();
    board.refresh(now);
    assert_eq!(first, board.all());
  }

  #[test]
  fn labels() {
    let now = UNIX_EPOCH;
    let campaigns = mock_campaigns(now);

    assert_eq!(remaining_label(&campaigns[0], now), "5days");
    assert_eq!(
      remaining_label(&campaigns[0], now + Duration::from_secs(6 * 86400)),
      "ended"
    );
    assert_eq!(ends_at_label(&campaigns[1]), "1970-01-08T00:00:00Z");
  }
}
