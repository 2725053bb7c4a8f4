use std::str::FromStr;

use portfolio_contact::{ContactDraft, ProjectType, SubmissionRequest};

use crate::{ApiError, ApiResponse, ContactApi, Field, FormError};

pub const SUCCESS_BANNER: &str = "Message sent successfully! I'll get back to you soon.";
pub const ERROR_BANNER: &str = "Failed to send message. Please try again or email me directly.";

/// Visible state of the contact form.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Contact form state machine.
///
/// ```text
/// Idle | Success | Error --submit--> Submitting
/// Submitting --2xx--> Success (draft reset)
/// Submitting --non-2xx / transport error--> Error (draft kept)
/// ```
#[derive(Default, Clone, Debug)]
pub struct ContactForm {
    draft: ContactDraft,
    status: UiStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn status(&self) -> UiStatus {
        self.status
    }

    /// Replace the value of exactly one field.
    pub fn change(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();

        match field {
            Field::FirstName => self.draft.first_name = value,
            Field::LastName => self.draft.last_name = value,
            Field::Email => self.draft.email = value,
            Field::Message => self.draft.message = value,
            Field::ProjectType => {
                self.draft.project_type = ProjectType::from_str(&value)
                    .map_err(|_| FormError::UnknownProjectType(value))?;
            }
        }

        Ok(())
    }

    /// Same as [`change`](Self::change), keyed by the input's `name` attribute.
    pub fn change_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = Field::from_str(name).map_err(|_| FormError::UnknownField(name.to_owned()))?;

        self.change(field, value)
    }

    /// The submit control is disabled while a request is outstanding.
    pub fn can_submit(&self) -> bool {
        self.status != UiStatus::Submitting
    }

    /// Start a submission.
    ///
    /// Returns `None` and leaves the state untouched when the submit control
    /// is disabled or a required field is empty.
    pub fn begin_submit(&mut self) -> Option<SubmissionRequest> {
        if !self.can_submit() || !self.draft.has_required_fields() {
            return None;
        }

        self.status = UiStatus::Submitting;

        Some(SubmissionRequest::from(&self.draft))
    }

    /// Reconcile the outstanding submission with its outcome.
    ///
    /// Outcomes arriving while no submission is outstanding are ignored.
    pub fn finish(&mut self, outcome: Result<ApiResponse, ApiError>) -> UiStatus {
        if self.status != UiStatus::Submitting {
            tracing::debug!(status = ?self.status, "Ignoring outcome without pending submission");
            return self.status;
        }

        self.status = match outcome {
            Ok(response) if response.is_success() => {
                self.draft = ContactDraft::default();
                UiStatus::Success
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.status,
                    error = response.body.error.as_deref().unwrap_or_default(),
                    "Contact form submission rejected"
                );
                UiStatus::Error
            }
            Err(err) => {
                tracing::error!(error = %err, "Error submitting form");
                UiStatus::Error
            }
        };

        self.status
    }

    /// Run one complete submission against `api`.
    pub async fn submit(&mut self, api: &impl ContactApi) -> UiStatus {
        let Some(request) = self.begin_submit() else {
            return self.status;
        };

        let outcome = api.post_contact(&request).await;

        self.finish(outcome)
    }

    pub fn banner(&self) -> Option<&'static str> {
        match self.status {
            UiStatus::Success => Some(SUCCESS_BANNER),
            UiStatus::Error => Some(ERROR_BANNER),
            UiStatus::Idle | UiStatus::Submitting => None,
        }
    }
}
