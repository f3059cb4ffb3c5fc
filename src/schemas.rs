use serde::{Deserialize, Serialize};

use crate::validation::Approval;

/// Inbound transaction submission as it arrives on the wire.
///
/// Every field is optional at the serde level: presence checking is a
/// validation concern with a fixed reporting order, so deserialization must
/// never reject a request for a missing field. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub partnerkey: Option<String>,
    pub partnerrefno: Option<String>,
    pub partnerpassword: Option<String>,
    pub timestamp: Option<String>,
    pub totalamount: Option<i64>,
    pub items: Option<Vec<LineItem>>,
    pub sig: Option<String>,
}

/// One order line. Amounts are minor currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub qty: i64,
    pub unitprice: i64,
}

impl LineItem {
    /// `None` on i64 overflow; a declared total can never reconcile
    /// against an overflowing line, so callers treat it as a mismatch.
    pub fn line_total(&self) -> Option<i64> {
        self.qty.checked_mul(self.unitprice)
    }
}

/// Success body for `POST /api/submittrxmessage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub result: u8,
    pub totalamount: i64,
    pub totaldiscount: i64,
    pub finalamount: i64,
}

impl From<Approval> for SubmitReceipt {
    fn from(approval: Approval) -> Self {
        Self {
            result: 1,
            totalamount: approval.totalamount,
            totaldiscount: approval.totaldiscount,
            finalamount: approval.finalamount,
        }
    }
}
