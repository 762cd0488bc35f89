//! Clock abstraction for expiry checks

use chrono::{DateTime, Utc};

/// Time source used by the OTP store
///
/// Injected so tests can simulate the passage of time instead of sleeping.
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
