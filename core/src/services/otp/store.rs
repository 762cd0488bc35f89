//! In-memory OTP store
//!
//! Process-wide, volatile storage for outstanding verification challenges,
//! keyed by email address. State never survives a restart; a user whose
//! code is lost simply requests a new one.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::domain::entities::otp_record::OtpRecord;

use super::clock::Clock;
use super::config::OtpConfig;
use super::types::VerifyOutcome;

/// In-memory store for outstanding OTP challenges
///
/// A single mutex guards the whole map. Every read-modify-write sequence
/// (attempt counting, expiry eviction, consume-on-success) happens under one
/// lock acquisition, so concurrent `verify` calls for the same email can
/// never operate on a stale attempt count. Throughput is not a concern at
/// OTP request rates.
pub struct OtpStore {
    records: Mutex<HashMap<String, OtpRecord>>,
    clock: Arc<dyn Clock>,
    config: OtpConfig,
}

impl OtpStore {
    /// Create a new store with the given time source and configuration
    pub fn new(clock: Arc<dyn Clock>, config: OtpConfig) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            clock,
            config,
        }
    }

    /// Store a freshly generated code for an email address
    ///
    /// Any existing record for the address is overwritten: at most one
    /// challenge is outstanding per email, and a re-issue resets both the
    /// attempt counter and the expiry deadline.
    pub fn put(&self, email: &str, code: String) {
        let record = OtpRecord::new(code, self.clock.now(), self.config.code_expiration_minutes);
        self.lock().insert(email.to_string(), record);
    }

    /// Check a submitted code against the stored record
    ///
    /// Performs the full state transition in one critical section:
    /// - absent record: [`VerifyOutcome::NotFound`]
    /// - expired record: evicted, [`VerifyOutcome::Expired`]
    /// - record already at the attempt cap: evicted,
    ///   [`VerifyOutcome::AttemptsExhausted`]
    /// - match: record consumed, [`VerifyOutcome::Verified`]
    /// - mismatch: attempt counted, record evicted if the cap is reached
    pub fn verify(&self, email: &str, submitted: &str) -> VerifyOutcome {
        let now = self.clock.now();
        let mut records = self.lock();

        let outcome = match records.get_mut(email) {
            None => return VerifyOutcome::NotFound,
            Some(record) if record.is_expired(now) => VerifyOutcome::Expired,
            Some(record) if record.attempts >= self.config.max_attempts => {
                VerifyOutcome::AttemptsExhausted
            }
            Some(record) if record.matches(submitted) => VerifyOutcome::Verified,
            Some(record) => {
                record.attempts += 1;
                VerifyOutcome::Mismatch {
                    remaining_attempts: record.remaining_attempts(self.config.max_attempts),
                }
            }
        };

        // Everything except a mismatch with attempts to spare evicts the record
        let keep = matches!(
            outcome,
            VerifyOutcome::Mismatch { remaining_attempts } if remaining_attempts > 0
        );
        if !keep {
            records.remove(email);
        }

        outcome
    }

    /// Evict any record for the email address; idempotent
    pub fn remove(&self, email: &str) {
        self.lock().remove(email);
    }

    /// Whether an unexpired record currently exists for the email address
    pub fn contains(&self, email: &str) -> bool {
        let now = self.clock.now();
        self.lock()
            .get(email)
            .map(|record| !record.is_expired(now))
            .unwrap_or(false)
    }

    /// Remaining verification attempts for an outstanding record
    ///
    /// `None` when no record exists (absent, consumed, or evicted).
    pub fn remaining_attempts(&self, email: &str) -> Option<u32> {
        self.lock()
            .get(email)
            .map(|record| record.remaining_attempts(self.config.max_attempts))
    }

    /// Expiry deadline of the outstanding record, if any
    pub fn expires_at(&self, email: &str) -> Option<DateTime<Utc>> {
        self.lock().get(email).map(|record| record.expires_at)
    }

    /// Drop every expired record, returning how many were reclaimed
    ///
    /// Expiry is otherwise detected lazily on `verify`; this exists so a
    /// periodic sweep can reclaim memory for abandoned challenges. It takes
    /// the same lock as `verify`, so it cannot race an in-flight check.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut records = self.lock();
        let before = records.len();
        records.retain(|_, record| !record.is_expired(now));
        before - records.len()
    }

    /// Number of outstanding records (expired-but-unswept ones included)
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no records at all
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A poisoned lock means a panic elsewhere mid-operation; every mutation
    // here is a single map update, so the map itself is still coherent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, OtpRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
