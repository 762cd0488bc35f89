//! Main OTP service implementation

use std::sync::Arc;

use rand::rngs::OsRng;
use rand::RngCore;
use tracing;

use jb_shared::utils::email::mask_email;

use crate::domain::entities::otp_record::CODE_LENGTH;
use crate::errors::{DomainError, DomainResult};

use super::store::OtpStore;
use super::traits::NotifierTrait;
use super::types::VerifyOutcome;

// Codes are drawn from [100_000, 999_999]: always six digits, never a
// leading zero, so no padding is involved anywhere.
const CODE_MIN: u32 = 100_000;
const CODE_SPAN: u32 = 900_000;

/// OTP manager: issues, verifies, and clears one-time codes
///
/// Holds the volatile store and the delivery channel. The store is injected
/// so tests (and embedders) can construct isolated instances with their own
/// clock rather than sharing module-level state.
pub struct OtpService<N: NotifierTrait> {
    /// Notifier used to deliver codes
    notifier: Arc<N>,
    /// Store holding outstanding challenges
    store: Arc<OtpStore>,
}

impl<N: NotifierTrait> OtpService<N> {
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `notifier` - Delivery channel implementation
    /// * `store` - Challenge store (carries its own clock and configuration)
    pub fn new(notifier: Arc<N>, store: Arc<OtpStore>) -> Self {
        Self { notifier, store }
    }

    /// Issue a verification code for an email address
    ///
    /// Overwrites any outstanding challenge for the address, then hands the
    /// code to the notifier. Delivery failure is logged and swallowed: the
    /// stored code stays verifiable, so a caller can still surface it
    /// through a side channel when the delivery path is down. The only error
    /// this operation can return is an unavailable secure random source.
    ///
    /// The caller's email is taken as received; format validation and
    /// normalization belong to the request handler.
    pub async fn issue(&self, email: &str) -> DomainResult<String> {
        let code = Self::generate_code()?;
        self.store.put(email, code.clone());

        tracing::info!(
            email = %mask_email(email),
            event = "otp_issued",
            "Issued verification code"
        );

        // The store lock has been released by now; a slow or failing
        // transport cannot stall OTP operations for other addresses.
        match self.notifier.deliver(email, &code).await {
            Ok(message_id) => {
                tracing::debug!(
                    email = %mask_email(email),
                    message_id = %message_id,
                    "Verification code dispatched"
                );
            }
            Err(e) => {
                tracing::warn!(
                    email = %mask_email(email),
                    error = %e,
                    event = "otp_delivery_failed",
                    "Delivery failed; issued code remains verifiable"
                );
            }
        }

        Ok(code)
    }

    /// Verify a submitted code for an email address
    ///
    /// Never fails: every misuse (unknown email, wrong code, expired code,
    /// exhausted attempts) comes back as `false`. A successful verification
    /// consumes the record, so the same code cannot be accepted twice.
    pub async fn verify(&self, email: &str, submitted: &str) -> bool {
        let outcome = self.store.verify(email, submitted);

        match outcome {
            VerifyOutcome::Verified => {
                tracing::info!(
                    email = %mask_email(email),
                    event = "otp_verified_success",
                    "Verification code accepted"
                );
            }
            VerifyOutcome::Mismatch { remaining_attempts } => {
                tracing::warn!(
                    email = %mask_email(email),
                    event = "otp_verification_failed",
                    remaining_attempts,
                    "Verification code rejected"
                );
            }
            VerifyOutcome::Expired => {
                tracing::warn!(
                    email = %mask_email(email),
                    event = "otp_expired",
                    "Verification code expired"
                );
            }
            VerifyOutcome::AttemptsExhausted => {
                tracing::warn!(
                    email = %mask_email(email),
                    event = "otp_attempts_exhausted",
                    "Verification attempts exhausted"
                );
            }
            VerifyOutcome::NotFound => {
                tracing::debug!(
                    email = %mask_email(email),
                    event = "otp_not_found",
                    "No outstanding verification code"
                );
            }
        }

        outcome.is_verified()
    }

    /// Evict any outstanding challenge for an email address
    ///
    /// Used by cancellation flows. Clearing an absent record is a no-op.
    pub async fn clear(&self, email: &str) {
        tracing::info!(
            email = %mask_email(email),
            event = "clear_verification",
            "Clearing verification state"
        );
        self.store.remove(email);
    }

    /// Drop expired records, returning how many were reclaimed
    pub fn purge_expired(&self) -> usize {
        let purged = self.store.purge_expired();
        if purged > 0 {
            tracing::debug!(purged, "Reclaimed expired verification codes");
        }
        purged
    }

    /// Access the underlying store
    pub fn store(&self) -> &OtpStore {
        &self.store
    }

    /// Generate a cryptographically secure random 6-digit code
    ///
    /// Uses the OS CSPRNG with rejection sampling, so every value in
    /// [100000, 999999] is equally likely. Failure of the random source is
    /// the one infrastructure error this module can raise.
    pub fn generate_code() -> DomainResult<String> {
        let mut rng = OsRng;
        // Draws at or above the largest multiple of CODE_SPAN are redrawn;
        // a plain modulo would skew the low end of the range.
        let limit = u32::MAX - (u32::MAX % CODE_SPAN);
        loop {
            let mut bytes = [0u8; 4];
            rng.try_fill_bytes(&mut bytes)
                .map_err(|e| DomainError::Internal {
                    message: format!("secure random source unavailable: {}", e),
                })?;
            let draw = u32::from_le_bytes(bytes);
            if draw < limit {
                let code = (CODE_MIN + draw % CODE_SPAN).to_string();
                debug_assert_eq!(code.len(), CODE_LENGTH);
                return Ok(code);
            }
        }
    }
}
