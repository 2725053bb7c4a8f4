use axum::{Json, body::Bytes, extract::State};
use portfolio_contact::{ContactResponse, SubmissionRequest, SubmissionResult};

use crate::{error::AppError, routes::AppState};

/// POST /api/contact
///
/// The body is decoded as JSON whatever `Content-Type` the client sent.
pub async fn action(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<ContactResponse>, AppError> {
    let input = serde_json::from_slice::<SubmissionRequest>(&body)?;

    match app_state.command.submit_form(input).await {
        SubmissionResult::Accepted => Ok(Json(ContactResponse::sent())),
        SubmissionResult::Rejected(err) => Err(err.into()),
    }
}
