use strum::{AsRefStr, Display, EnumString, VariantArray};
use thiserror::Error;

/// Input of the contact form, named as in the markup's `name` attribute.
#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    ProjectType,
    Message,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),

    #[error("unknown project type `{0}`")]
    UnknownProjectType(String),
}
