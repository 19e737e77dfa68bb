//! In-memory lockout state machine for login attempts.
//!
//! Per email, the state moves `Clear → Accumulating(count) → Locked(until)
//! → Clear`. State is process-local and not persisted; a restart clears all
//! lockouts. Expired locks are purged lazily when the lockout status is
//! queried — there is no background timer.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::warn;

/// Failed-attempt state for a single email.
#[derive(Debug, Clone)]
struct AttemptRecord {
    /// Consecutive failures since the last clear or lock.
    count: u32,
    /// When the most recent failure happened.
    last_attempt: DateTime<Utc>,
    /// Lock expiry, if the account is locked.
    locked_until: Option<DateTime<Utc>>,
}

/// Tracks failed login attempts per email and enforces temporary lockouts.
///
/// All operations take the map lock for their full read-modify-write
/// sequence, so concurrent requests for the same email cannot lose
/// an increment. Suitable for single-node deployments only.
#[derive(Debug)]
pub struct LockoutTracker {
    /// Email → attempt record.
    attempts: Mutex<HashMap<String, AttemptRecord>>,
    /// Failures that trigger a lock.
    max_attempts: u32,
    /// How long a triggered lock lasts.
    lockout_duration: Duration,
}

impl LockoutTracker {
    /// Creates a new tracker.
    pub fn new(max_attempts: u32, lockout_duration: Duration) -> Self {
        Self {
            attempts: Mutex::new(HashMap::new()),
            max_attempts,
            lockout_duration,
        }
    }

    /// Returns the remaining lock time for the email, if it is locked.
    ///
    /// A lock that has already expired is purged here, so a subsequent
    /// failure streak starts from a clean record.
    pub async fn remaining_lockout(&self, email: &str) -> Option<Duration> {
        let mut attempts = self.attempts.lock().await;

        let record = attempts.get(email)?;
        let locked_until = record.locked_until?;

        let now = Utc::now();
        if locked_until > now {
            Some(locked_until - now)
        } else {
            attempts.remove(email);
            None
        }
    }

    /// Returns whether the email is currently locked out.
    pub async fn is_locked(&self, email: &str) -> bool {
        self.remaining_lockout(email).await.is_some()
    }

    /// Records a failed login attempt for the email.
    ///
    /// On reaching the configured threshold the account is locked and the
    /// counter resets to zero, so the streak after a lock starts fresh.
    pub async fn record_failure(&self, email: &str) {
        let mut attempts = self.attempts.lock().await;
        let now = Utc::now();

        let record = attempts.entry(email.to_string()).or_insert(AttemptRecord {
            count: 0,
            last_attempt: now,
            locked_until: None,
        });

        record.count += 1;
        record.last_attempt = now;

        if record.count >= self.max_attempts {
            record.locked_until = Some(now + self.lockout_duration);
            record.count = 0;
            warn!(
                email = %email,
                locked_minutes = self.lockout_duration.num_minutes(),
                "Account locked after repeated failed logins"
            );
        }
    }

    /// Deletes the email's record entirely (called on successful login).
    pub async fn clear(&self, email: &str) {
        self.attempts.lock().await.remove(email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lock_after_threshold() {
        let tracker = LockoutTracker::new(5, Duration::minutes(15));

        for _ in 0..4 {
            tracker.record_failure("a@x.com").await;
        }
        assert!(!tracker.is_locked("a@x.com").await);

        tracker.record_failure("a@x.com").await;
        assert!(tracker.is_locked("a@x.com").await);

        let remaining = tracker.remaining_lockout("a@x.com").await.unwrap();
        assert!(remaining <= Duration::minutes(15));
        assert!(remaining > Duration::minutes(14));
    }

    #[tokio::test]
    async fn test_identities_are_independent() {
        let tracker = LockoutTracker::new(5, Duration::minutes(15));

        for _ in 0..5 {
            tracker.record_failure("a@x.com").await;
        }
        assert!(tracker.is_locked("a@x.com").await);
        assert!(!tracker.is_locked("b@x.com").await);
    }

    #[tokio::test]
    async fn test_expired_lock_is_purged_lazily() {
        let tracker = LockoutTracker::new(5, Duration::milliseconds(30));

        for _ in 0..5 {
            tracker.record_failure("a@x.com").await;
        }
        assert!(tracker.is_locked("a@x.com").await);

        tokio::time::sleep(std::time::Duration::from_millis(60)).await;
        assert!(!tracker.is_locked("a@x.com").await);

        // The purge reset the record: four fresh failures must not re-lock.
        for _ in 0..4 {
            tracker.record_failure("a@x.com").await;
        }
        assert!(!tracker.is_locked("a@x.com").await);
        tracker.record_failure("a@x.com").await;
        assert!(tracker.is_locked("a@x.com").await);
    }

    #[tokio::test]
    async fn test_clear_removes_record() {
        let tracker = LockoutTracker::new(5, Duration::minutes(15));

        for _ in 0..4 {
            tracker.record_failure("a@x.com").await;
        }
        tracker.clear("a@x.com").await;

        // Cleared record means the streak starts over.
        for _ in 0..4 {
            tracker.record_failure("a@x.com").await;
        }
        assert!(!tracker.is_locked("a@x.com").await);
    }

    #[tokio::test]
    async fn test_concurrent_failures_are_not_lost() {
        use std::sync::Arc;

        let tracker = Arc::new(LockoutTracker::new(10, Duration::minutes(15)));
        let mut handles = Vec::new();

        for _ in 0..10 {
            let tracker = Arc::clone(&tracker);
            handles.push(tokio::spawn(async move {
                tracker.record_failure("a@x.com").await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // Ten concurrent failures reach the threshold of ten exactly.
        assert!(tracker.is_locked("a@x.com").await);
    }
}
