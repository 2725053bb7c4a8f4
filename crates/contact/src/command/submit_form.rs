use time::OffsetDateTime;
use validator::Validate;

use crate::{ContactError, SubmissionRequest, SubmissionResult, render_email};

/// Submission after missing and `null` fields have been collapsed to empty
/// strings, ready for validation.
#[derive(Validate, Clone, Debug, PartialEq, Eq)]
pub struct SubmitFormInput {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub email: String,
    pub project_type: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl From<SubmissionRequest> for SubmitFormInput {
    fn from(request: SubmissionRequest) -> Self {
        Self {
            first_name: request.first_name.unwrap_or_default(),
            last_name: request.last_name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            project_type: request.project_type.unwrap_or_default(),
            message: request.message.unwrap_or_default(),
        }
    }
}

impl super::Command {
    /// Validate, format and relay one contact message.
    ///
    /// Never fails: every error is logged here and folded into
    /// [`SubmissionResult::Rejected`].
    #[tracing::instrument(skip_all, fields(project_type = request.project_type.as_deref().unwrap_or_default()))]
    pub async fn submit_form(&self, request: SubmissionRequest) -> SubmissionResult {
        let result = self.try_submit_form(request.into()).await;

        match &result {
            Ok(()) => tracing::info!("Contact form submission sent"),
            Err(ContactError::Validation(errors)) => {
                tracing::warn!(error = %errors, "Contact form rejected, required field missing");
            }
            Err(err) => {
                tracing::error!(error = ?err, "Error sending contact email");
            }
        }

        result.into()
    }

    async fn try_submit_form(&self, input: SubmitFormInput) -> Result<(), ContactError> {
        input.validate()?;

        let email = render_email(&self.operator, &input, OffsetDateTime::now_utc())?;

        self.sender
            .send(&email)
            .await
            .map_err(ContactError::Dispatch)?;

        Ok(())
    }
}
