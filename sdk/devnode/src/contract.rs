use {
  crate::LocalNode,
  crowdfund_primitives::{
    AccountId,
    Call,
    Campaign,
    CampaignId,
    Envelope,
    Receipt,
    Wei,
  },
  crowdfund_sdk::{ContractError, ContributionContract},
  std::{collections::HashMap, sync::Arc},
};

pub(crate) const NO_SUCH_CAMPAIGN: &str = "campaign does not exist";
pub(crate) const ZERO_VALUE: &str = "contribution must be positive";
pub(crate) const CAMPAIGN_ENDED: &str = "campaign has ended";
pub(crate) const OVERFLOW: &str = "amount overflow";

/// State of a deployed crowdfunding contract.
///
/// Tracks the deadline of every campaign, the total raised by each one
/// and how much every contributor gave to it.
#[derive(Debug, Clone, Default)]
pub struct Crowdfunding {
  deadlines: HashMap<CampaignId, u64>,
  raised: HashMap<CampaignId, Wei>,
  contributions: HashMap<(CampaignId, AccountId), Wei>,
}

impl Crowdfunding {
  pub fn new(campaigns: &[Campaign]) -> Self {
    Self {
      deadlines: campaigns.iter().map(|c| (c.id, c.deadline)).collect(),
      ..Default::default()
    }
  }

  pub fn raised(&self, campaign: CampaignId) -> Wei {
    self.raised.get(&campaign).copied().unwrap_or_default()
  }

  pub fn contributed(&self, campaign: CampaignId, account: &AccountId) -> Wei {
    self
      .contributions
      .get(&(campaign, account.clone()))
      .copied()
      .unwrap_or_default()
  }

  /// Validates and records a contribution made at unix time `now`.
  ///
  /// Either all bookkeeping is updated or none of it.
  pub(crate) fn contribute(
    &mut self,
    campaign: CampaignId,
    from: &AccountId,
    value: Wei,
    now: u64,
  ) -> Result<(), &'static str> {
    let deadline = *self.deadlines.get(&campaign).ok_or(NO_SUCH_CAMPAIGN)?;

    if value == Wei::ZERO {
      return Err(ZERO_VALUE);
    }

    if now >= deadline {
      return Err(CAMPAIGN_ENDED);
    }

    let raised = self.raised(campaign).checked_add(value).ok_or(OVERFLOW)?;
    let contributed = self
      .contributed(campaign, from)
      .checked_add(value)
      .ok_or(OVERFLOW)?;

    self.raised.insert(campaign, raised);
    self.contributions.insert((campaign, from.clone()), contributed);
    Ok(())
  }
}

/// Handle to a crowdfunding contract deployed on a [`LocalNode`].
#[derive(Clone)]
pub struct LocalContract {
  node: Arc<LocalNode>,
  address: AccountId,
}

impl LocalContract {
  pub(crate) fn new(node: Arc<LocalNode>, address: AccountId) -> Self {
    Self { node, address }
  }

  pub fn node(&self) -> &Arc<LocalNode> {
    &self.node
  }

  pub fn raised(&self, campaign: CampaignId) -> Wei {
    self.node.raised(&self.address, campaign)
  }

  pub fn contributed(&self, campaign: CampaignId, account: &AccountId) -> Wei {
    self.node.contributed(&self.address, campaign, account)
  }
}

impl ContributionContract for LocalContract {
  fn address(&self) -> &AccountId {
    &self.address
  }

  async fn contribute(
    &self,
    campaign: CampaignId,
    envelope: Envelope,
  ) -> Result<Receipt, ContractError> {
    self
      .node
      .send(&self.address, Call::Contribute { campaign }, envelope)
      .await
  }
}
