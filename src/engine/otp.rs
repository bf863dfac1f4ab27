//! In-memory OTP registry with time-based expiry

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Lifetime of an issued code, in seconds
pub const OTP_TTL_SECS: i64 = 10 * 60;

/// A code issued to one recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    pub recipient: String,
    pub code: String,
    pub issued_at: DateTime<Utc>,
    pub verified: bool,
}

impl OtpRecord {
    /// Whether the record is older than `ttl` at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.issued_at > ttl
    }
}

/// Stores at most one live code per recipient.
///
/// Expired records are swept on every issuance rather than by a
/// background task; lookups ignore expired records that have not been
/// swept yet.
pub struct OtpRegistry {
    records: RwLock<HashMap<String, OtpRecord>>,
    ttl: Duration,
}

impl OtpRegistry {
    pub fn new() -> Self {
        Self::with_ttl(Duration::seconds(OTP_TTL_SECS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a code for `recipient`, replacing any previous one
    pub fn issue(&self, recipient: &str, code: &str) -> OtpRecord {
        self.issue_at(recipient, code, Utc::now())
    }

    /// Issue a code as of `now`
    pub fn issue_at(&self, recipient: &str, code: &str, now: DateTime<Utc>) -> OtpRecord {
        let record = OtpRecord {
            recipient: recipient.to_string(),
            code: code.to_string(),
            issued_at: now,
            verified: false,
        };

        // Insert and sweep under one write lock
        let mut records = self.records.write();
        records.insert(record.recipient.clone(), record.clone());
        let swept = sweep_expired(&mut records, now, self.ttl);
        if swept > 0 {
            debug!(swept, remaining = records.len(), "Swept expired OTPs");
        }

        record
    }

    /// Remove expired records, returning how many were dropped
    pub fn sweep(&self) -> usize {
        self.sweep_at(Utc::now())
    }

    /// Remove records expired as of `now`
    pub fn sweep_at(&self, now: DateTime<Utc>) -> usize {
        sweep_expired(&mut self.records.write(), now, self.ttl)
    }

    /// Live record for `recipient`
    pub fn get(&self, recipient: &str) -> Option<OtpRecord> {
        self.get_at(recipient, Utc::now())
    }

    /// Live record for `recipient` as of `now`
    pub fn get_at(&self, recipient: &str, now: DateTime<Utc>) -> Option<OtpRecord> {
        self.records
            .read()
            .get(recipient)
            .filter(|r| !r.is_expired_at(now, self.ttl))
            .cloned()
    }

    /// Mark the live code for `recipient` verified if `code` matches.
    ///
    /// No endpoint verifies codes yet.
    pub fn mark_verified(&self, recipient: &str, code: &str) -> bool {
        let now = Utc::now();
        let mut records = self.records.write();
        match records.get_mut(recipient) {
            Some(record) if record.code == code && !record.is_expired_at(now, self.ttl) => {
                record.verified = true;
                true
            }
            _ => false,
        }
    }

    /// Number of stored records, including expired ones not yet swept
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for OtpRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn sweep_expired(
    records: &mut HashMap<String, OtpRecord>,
    now: DateTime<Utc>,
    ttl: Duration,
) -> usize {
    let before = records.len();
    records.retain(|_, record| !record.is_expired_at(now, ttl));
    before - records.len()
}
