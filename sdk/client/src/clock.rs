use std::{
  sync::{Arc, Mutex},
  time::{Duration, SystemTime},
};

/// Source of the current wall-clock time.
pub trait Clock {
  fn now(&self) -> SystemTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> SystemTime {
    SystemTime::now()
  }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and
/// advance the time seen by a session or a ledger holding another.
#[derive(Debug, Clone)]
pub struct ManualClock {
  now: Arc<Mutex<SystemTime>>,
}

impl ManualClock {
  pub fn new(now: SystemTime) -> Self {
    Self {
      now: Arc::new(Mutex::new(now)),
    }
  }

  pub fn advance(&self, by: Duration) {
    let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
    *now += by;
  }

  pub fn set(&self, to: SystemTime) {
    *self.now.lock().unwrap_or_else(|e| e.into_inner()) = to;
  }
}

impl Clock for ManualClock {
  fn now(&self) -> SystemTime {
    *self.now.lock().unwrap_or_else(|e| e.into_inner())
  }
}

impl<C: Clock> Clock for Arc<C> {
  fn now(&self) -> SystemTime {
    self.as_ref().now()
  }
}
