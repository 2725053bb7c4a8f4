use serde::{Deserialize, Serialize};

use crate::ProjectType;

/// In-memory values of the contact form before they are submitted.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub project_type: ProjectType,
    pub message: String,
}

impl ContactDraft {
    /// Fields the browser refuses to submit while empty.
    pub fn has_required_fields(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.email.is_empty()
            && !self.message.is_empty()
    }
}

/// JSON payload posted to `/api/contact`.
///
/// Every field is optional on the wire so that missing and `null` values
/// reach validation instead of failing deserialization. `project_type` is
/// free text; the server interpolates whatever the client sent.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<&ContactDraft> for SubmissionRequest {
    fn from(draft: &ContactDraft) -> Self {
        Self {
            first_name: Some(draft.first_name.to_owned()),
            last_name: Some(draft.last_name.to_owned()),
            email: Some(draft.email.to_owned()),
            project_type: Some(draft.project_type.to_string()),
            message: Some(draft.message.to_owned()),
        }
    }
}

pub const SENT_MESSAGE: &str = "Email sent successfully!";

/// JSON body returned by `/api/contact`: `message` on success, `error`
/// otherwise.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self {
            message: Some(SENT_MESSAGE.to_owned()),
            error: None,
        }
    }

    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            message: None,
            error: Some(reason.into()),
        }
    }
}
