use thiserror::Error;

pub const VALIDATION_FAILED: &str = "All fields are required";
pub const DISPATCH_FAILED: &str = "Failed to send email. Please try again.";

/// Failure of one contact submission.
///
/// The `Display` text is the only thing ever shown to the submitter;
/// underlying causes stay reachable through `source()` for logging.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{}", VALIDATION_FAILED)]
    Validation(#[from] validator::ValidationErrors),

    #[error("{}", DISPATCH_FAILED)]
    Render(#[from] askama::Error),

    #[error("{}", DISPATCH_FAILED)]
    Timestamp(#[from] time::error::Format),

    #[error("{}", DISPATCH_FAILED)]
    Dispatch(#[source] anyhow::Error),
}

impl ContactError {
    /// Whether the submitter can fix the problem by editing the form.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ContactError::Validation(_))
    }
}

/// Outcome of [`Command::submit_form`](crate::Command::submit_form).
#[derive(Debug)]
pub enum SubmissionResult {
    Accepted,
    Rejected(ContactError),
}

impl SubmissionResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted)
    }

    /// Client-facing rejection reason, `None` when accepted.
    pub fn reason(&self) -> Option<String> {
        match self {
            SubmissionResult::Accepted => None,
            SubmissionResult::Rejected(err) => Some(err.to_string()),
        }
    }
}

impl From<Result<(), ContactError>> for SubmissionResult {
    fn from(value: Result<(), ContactError>) -> Self {
        match value {
            Ok(()) => SubmissionResult::Accepted,
            Err(err) => SubmissionResult::Rejected(err),
        }
    }
}
