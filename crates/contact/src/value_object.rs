use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Kind of engagement a visitor is asking about.
///
/// The wire value is the human readable label shown in the select input.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum ProjectType {
    #[default]
    #[serde(rename = "Web Development")]
    #[strum(serialize = "Web Development")]
    WebDevelopment,
    #[serde(rename = "UI/UX Design")]
    #[strum(serialize = "UI/UX Design")]
    UiUxDesign,
    #[serde(rename = "Full-Stack Solution")]
    #[strum(serialize = "Full-Stack Solution")]
    FullStackSolution,
    #[serde(rename = "Data Science")]
    #[strum(serialize = "Data Science")]
    DataScience,
    Consultation,
    Other,
}
