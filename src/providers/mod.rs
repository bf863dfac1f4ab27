//! Response synthesizers for the simulated providers
//!
//! Each submodule builds the fake response for one third-party API.
//! Synthesizers are plain functions of the request, a random source and
//! the current time, so they can be exercised without a server.

pub mod petpooja;
pub mod pidge;
pub mod two_factor;

use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;

use crate::types::CatchAllResponse;

/// Alphabet of generated delivery id suffixes
const ID_SUFFIX_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of generated delivery id suffixes
pub const ID_SUFFIX_LEN: usize = 8;

/// ISO-8601 timestamp with millisecond precision and a `Z` suffix
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Milliseconds since the Unix epoch
pub fn epoch_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

/// `<epoch millis><8 uppercase alphanumerics>`
pub fn delivery_id<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_SUFFIX_ALPHABET[rng.gen_range(0..ID_SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("{}{}", epoch_millis(now), suffix)
}

/// Catch-all body shared by the OTP and POS services
pub fn mock_echo(path: &str, method: &str) -> CatchAllResponse {
    CatchAllResponse {
        success: true,
        mock: Some(true),
        message: None,
        path: path.to_string(),
        method: method.to_string(),
    }
}
