//! Site Record: the structured content of one practice's website.
//!
//! Built from the model's parsed JSON by `from_value`. Every field carries a
//! serde default so that a reply missing fields still converts; the two
//! required fields are enforced by `validate`, which the renderer calls on entry.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("required field '{0}' is missing or empty")]
    MissingField(&'static str),

    /// Valid JSON whose shape is not a site record (wrong field types, not an object).
    #[error("site record has the wrong shape: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub website_niche: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub doctor_details: DoctorDetails,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_links: Vec<String>,
    /// First element is the hero and about-section image.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    /// Up to three are used; missing slots fall back to stock images.
    #[serde(default, deserialize_with = "null_as_default")]
    pub testimonial_images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specialization: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
}

impl SiteRecord {
    /// Converts parsed JSON into a record. Anything but an object, or a field of
    /// the wrong type, is `Malformed`; absent and `null` fields take defaults.
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        if !value.is_object() {
            return Err(RecordError::Malformed(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| RecordError::Malformed(e.to_string()))
    }

    /// Rejects records without a niche or a doctor name. Whitespace-only counts as empty.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.website_niche.trim().is_empty() {
            return Err(RecordError::MissingField("websiteNiche"));
        }
        if self.doctor_details.name.trim().is_empty() {
            return Err(RecordError::MissingField("doctorDetails.name"));
        }
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Models often emit `null` for fields they have nothing for.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
