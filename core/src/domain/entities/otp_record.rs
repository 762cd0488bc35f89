//! OTP record entity for email-based verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

/// Maximum number of verification attempts allowed
pub const MAX_ATTEMPTS: u32 = 3;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// One outstanding verification challenge for an email address.
///
/// Records are keyed by email in the store; the entity itself only carries
/// the code, the attempt counter, and its timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// The 6-digit verification code
    pub code: String,

    /// Number of failed verification attempts made
    pub attempts: u32,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a new record for a freshly generated code
    ///
    /// # Arguments
    ///
    /// * `code` - The generated 6-digit code
    /// * `now` - The current time as reported by the caller's clock
    /// * `expiration_minutes` - Number of minutes until the code expires
    pub fn new(code: String, now: DateTime<Utc>, expiration_minutes: i64) -> Self {
        Self {
            code,
            attempts: 0,
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
        }
    }

    /// Checks whether the code has expired as of `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Compares a submitted code against the stored one
    ///
    /// Exact string equality, evaluated in constant time so the comparison
    /// leaks nothing about where the codes diverge. No trimming or coercion.
    pub fn matches(&self, submitted: &str) -> bool {
        if self.code.len() != submitted.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// Number of verification attempts left before the record is evicted
    pub fn remaining_attempts(&self, max_attempts: u32) -> u32 {
        max_attempts.saturating_sub(self.attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(now: DateTime<Utc>) -> OtpRecord {
        OtpRecord::new("482913".to_string(), now, DEFAULT_EXPIRATION_MINUTES)
    }

    #[test]
    fn test_new_record() {
        let now = Utc::now();
        let record = record_at(now);

        assert_eq!(record.code.len(), CODE_LENGTH);
        assert_eq!(record.attempts, 0);
        assert_eq!(record.created_at, now);
        assert_eq!(record.expires_at, now + Duration::minutes(5));
        assert!(!record.is_expired(now));
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let record = record_at(now);

        // Not expired at the exact deadline, expired one tick past it
        assert!(!record.is_expired(record.expires_at));
        assert!(record.is_expired(record.expires_at + Duration::seconds(1)));
    }

    #[test]
    fn test_matches_exact_equality() {
        let record = record_at(Utc::now());

        assert!(record.matches("482913"));
        assert!(!record.matches("482914"));
        assert!(!record.matches("48291"));
        assert!(!record.matches("4829130"));
        // No trimming on either side
        assert!(!record.matches(" 482913"));
        assert!(!record.matches("482913 "));
    }

    #[test]
    fn test_remaining_attempts() {
        let mut record = record_at(Utc::now());

        assert_eq!(record.remaining_attempts(MAX_ATTEMPTS), 3);
        record.attempts = 2;
        assert_eq!(record.remaining_attempts(MAX_ATTEMPTS), 1);
        record.attempts = 5;
        assert_eq!(record.remaining_attempts(MAX_ATTEMPTS), 0);
    }

    #[test]
    fn test_serialization() {
        let record = record_at(Utc::now());

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: OtpRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
