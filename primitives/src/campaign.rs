use {
  serde::{Deserialize, Serialize},
  std::time::{Duration, SystemTime, UNIX_EPOCH},
};

pub type CampaignId = u32;

const DAY: u64 = 60 * 60 * 24;

/// A fundraising campaign as shown to contributors.
///
/// Everything except `remaining` is fixed when the campaign is seeded.
/// `remaining` is a display value derived from `deadline` and the
/// current time, it stays `None` until the campaign list is refreshed
/// for the first time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
  pub id: CampaignId,
  pub name: String,
  pub description: String,

  /// Unix timestamp in seconds after which contributions are rejected.
  pub deadline: u64,

  pub remaining: Option<String>,
}

impl Campaign {
  pub fn new(
    id: CampaignId,
    name: impl Into<String>,
    description: impl Into<String>,
    deadline: u64,
  ) -> Self {
    Self {
      id,
      name: name.into(),
      description: description.into(),
      deadline,
      remaining: None,
    }
  }

  pub fn deadline_time(&self) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(self.deadline)
  }

  /// Time left until the deadline rounded up to whole seconds,
  /// `None` once the deadline is reached.
  ///
  /// A campaign with any fraction of a second left is still open,
  /// matching contracts that compare against the floored unix time.
  pub fn time_left(&self, now: SystemTime) -> Option<Duration> {
    let left = self.deadline_time().duration_since(now).ok()?;
    if left.is_zero() {
      return None;
    }

    let secs = left.as_secs() + u64::from(left.subsec_nanos() > 0);
    Some(Duration::from_secs(secs))
  }
}

fn unix_seconds(time: SystemTime) -> u64 {
  time
    .duration_since(UNIX_EPOCH)
    .map(|d| d.as_secs())
    .unwrap_or_default()
}

/// The fixed set of campaigns offered by the application, with
/// deadlines 5, 7 and 10 days after `now`.
pub fn mock_campaigns(now: SystemTime) -> Vec<Campaign> {
  let now = unix_seconds(now);
  vec![
    Campaign::new(
      0,
      "Water for All",
      "Clean water access for rural communities.",
      now + 5 * DAY,
    ),
    Campaign::new(
      1,
      "Education Support",
      "Help underprivileged children with education.",
      now + 7 * DAY,
    ),
    Campaign::new(
      2,
      "Tree Planting",
      "Contribute to combat climate change.",
      now + 10 * DAY,
    ),
  ]
}
