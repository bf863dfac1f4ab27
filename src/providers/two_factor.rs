//! 2Factor SMS/OTP gateway
//!
//! Real URL format: `https://2factor.in/API/V1/{key}/SMS/{mobile}/{otp}`

use rand::Rng;
use tracing::info;

use crate::engine::OtpRegistry;
use crate::types::{SendOtpParams, SendOtpResponse};

/// Digits of the recipient left unmasked in logs
const VISIBLE_DIGITS: usize = 4;

/// Send an OTP: record it, log it, and echo it back so load-test
/// harnesses can assert on the code.
pub fn send_otp<R: Rng>(
    registry: &OtpRegistry,
    params: &SendOtpParams,
    rng: &mut R,
) -> SendOtpResponse {
    registry.issue(&params.mobile, &params.otp);

    info!(
        recipient = %mask_recipient(&params.mobile),
        otp = %params.otp,
        "OTP sent"
    );

    SendOtpResponse {
        status: "Success".to_string(),
        details: session_token(rng),
        otp: params.otp.clone(),
    }
}

/// Opaque 32 hex character session token
pub fn session_token<R: Rng>(rng: &mut R) -> String {
    format!("{:032x}", rng.gen::<u128>())
}

/// Replace all but the last four characters with `*`
pub fn mask_recipient(mobile: &str) -> String {
    let len = mobile.chars().count();
    let hidden = len.saturating_sub(VISIBLE_DIGITS);
    mobile
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { '*' } else { c })
        .collect()
}
