//! Request validation pipeline.
//!
//! Checks run in a fixed order and stop at the first failure: request
//! presence, required fields, amount sanity, partner authentication,
//! timestamp freshness, signature, line-item reconciliation. Exactly one
//! outcome is produced per call and the pipeline touches nothing but its
//! inputs, the clock and the read-only registry.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};

use crate::discount;
use crate::error::ValidationError;
use crate::registry::PartnerRegistry;
use crate::schemas::TransactionRequest;
use crate::{signature, timestamp};

/// Successful validation result, in minor currency units except for
/// `totaldiscount`, which is expressed in the hundreds-scaled units the
/// discount engine works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Approval {
    pub totalamount: i64,
    pub totaldiscount: i64,
    pub finalamount: i64,
}

/// Validates transaction submissions against an injected partner registry.
/// Stateless per call; one instance is shared across all requests.
#[derive(Debug, Clone)]
pub struct RequestValidator {
    registry: PartnerRegistry,
}

impl RequestValidator {
    pub fn new(registry: PartnerRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PartnerRegistry {
        &self.registry
    }

    /// Runs the full pipeline against the current wall clock.
    pub fn validate(
        &self,
        request: Option<&TransactionRequest>,
    ) -> Result<Approval, ValidationError> {
        self.validate_at(request, Utc::now())
    }

    /// Same pipeline with the clock taken as a parameter, so freshness
    /// boundaries are checkable without waiting on real time.
    pub fn validate_at(
        &self,
        request: Option<&TransactionRequest>,
        now: DateTime<Utc>,
    ) -> Result<Approval, ValidationError> {
        let request = request.ok_or(ValidationError::MalformedRequest)?;

        // Field order here is the reporting order of the contract.
        let partnerkey = require_str("partnerkey", &request.partnerkey)?;
        let partnerrefno = require_str("partnerrefno", &request.partnerrefno)?;
        let partnerpassword = require_str("partnerpassword", &request.partnerpassword)?;
        let raw_timestamp = require_str("timestamp", &request.timestamp)?;
        let totalamount = request
            .totalamount
            .ok_or(ValidationError::MissingField("totalamount"))?;
        let sig = require_str("sig", &request.sig)?;

        if totalamount < 0 {
            return Err(ValidationError::InvalidAmount);
        }

        self.authenticate(partnerkey, partnerpassword)?;

        let instant =
            timestamp::parse_wire_timestamp(raw_timestamp).ok_or(ValidationError::Expired)?;
        if !timestamp::is_fresh(instant, now) {
            return Err(ValidationError::Expired);
        }

        if !signature::verify(
            instant,
            partnerkey,
            partnerrefno,
            totalamount,
            partnerpassword,
            sig,
        ) {
            return Err(ValidationError::InvalidSignature);
        }

        // Absent or empty items imply a declared total of zero. A sum that
        // overflows i64 can never reconcile, so it is a mismatch too.
        let item_total = request
            .items
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .try_fold(0i64, |acc, item| {
                item.line_total().and_then(|total| acc.checked_add(total))
            })
            .ok_or(ValidationError::AmountMismatch)?;
        if totalamount != item_total {
            return Err(ValidationError::AmountMismatch);
        }

        let totaldiscount = discount::discount_for(totalamount);

        Ok(Approval {
            totalamount,
            totaldiscount,
            finalamount: totalamount - totaldiscount,
        })
    }

    /// Unknown partner, undecodable password and secret mismatch are all the
    /// same `AccessDenied` — the caller learns nothing about which it was.
    fn authenticate(&self, partnerkey: &str, partnerpassword: &str) -> Result<(), ValidationError> {
        let secret = self
            .registry
            .secret(partnerkey)
            .ok_or(ValidationError::AccessDenied)?;

        let decoded = BASE64
            .decode(partnerpassword)
            .map_err(|_| ValidationError::AccessDenied)?;
        let decoded = String::from_utf8(decoded).map_err(|_| ValidationError::AccessDenied)?;

        if decoded != secret {
            return Err(ValidationError::AccessDenied);
        }

        Ok(())
    }
}

fn require_str<'a>(
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, ValidationError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField(field)),
    }
}
