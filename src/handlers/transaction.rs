use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::error::ValidationError;
use crate::schemas::{SubmitReceipt, TransactionRequest};
use crate::AppState;

/// `POST /api/submittrxmessage`
///
/// The extractor result is taken as a `Result` so a body the framework
/// cannot deserialize never surfaces a framework-shaped error: garbage and
/// a literal `null` are both an absent request, which the pipeline reports
/// as `MalformedRequest` on the contract's wire shape.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<Option<TransactionRequest>>, JsonRejection>,
) -> Result<Json<SubmitReceipt>, ValidationError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(_) => None,
    };

    let approval = state.validator.validate(request.as_ref())?;

    Ok(Json(SubmitReceipt::from(approval)))
}
