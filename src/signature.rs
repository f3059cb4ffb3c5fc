//! Partner request signing.
//!
//! The signature covers a canonical concatenation of request fields:
//! compact timestamp, partner key, partner reference, decimal total and the
//! partner password exactly as supplied (still Base64). The digest pipeline
//! is SHA-256 -> lowercase hex -> Base64 over the hex string's UTF-8 bytes.
//! The double encoding is the partner-facing contract; encoding the raw
//! digest bytes instead produces an incompatible signature.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::timestamp;

/// Computes the signature for one request's canonical fields.
/// `partnerpassword` is the Base64 string as supplied on the wire.
pub fn expected_signature(
    instant: DateTime<Utc>,
    partnerkey: &str,
    partnerrefno: &str,
    totalamount: i64,
    partnerpassword: &str,
) -> String {
    let payload = format!(
        "{}{}{}{}{}",
        timestamp::format_compact(instant),
        partnerkey,
        partnerrefno,
        totalamount,
        partnerpassword
    );

    sign_payload(&payload)
}

/// SHA-256 the payload, hex-encode the digest lowercase, then Base64 the
/// hex string itself (standard alphabet, padded).
fn sign_payload(payload: &str) -> String {
    let digest = Sha256::digest(payload.as_bytes());
    let hex_digest = hex::encode(digest);
    BASE64.encode(hex_digest.as_bytes())
}

/// Exact, case-sensitive comparison against the supplied signature.
pub fn verify(
    instant: DateTime<Utc>,
    partnerkey: &str,
    partnerrefno: &str,
    totalamount: i64,
    partnerpassword: &str,
    supplied: &str,
) -> bool {
    expected_signature(instant, partnerkey, partnerrefno, totalamount, partnerpassword) == supplied
}
