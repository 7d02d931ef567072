use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Separator placed between title and company in a [`JobIdentifier`].
const IDENTIFIER_SEPARATOR: char = '-';

/// One listing as returned by the remote search service.
///
/// The service makes no promises about which fields are present, so every
/// field decodes leniently: missing or `null` values become empty, and a
/// number or boolean where text is expected is kept as its textual form.
/// Only `title` and `company` take part in identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct JobRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub company_image: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub location: Option<String>,
    #[serde(rename = "isRemote", default, deserialize_with = "lenient_flag")]
    pub is_remote: bool,
    #[serde(rename = "type", default, deserialize_with = "lenient_optional_text")]
    pub job_type: Option<String>,
    #[serde(rename = "postedAt", default, deserialize_with = "lenient_optional_text")]
    pub posted_at: Option<String>,
}

impl JobRecord {
    /// Convenience constructor used by callers that only care about identity.
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            ..Self::default()
        }
    }

    pub fn identifier(&self) -> JobIdentifier {
        JobIdentifier::new(&self.title, &self.company)
    }
}

/// Structural identity of a job: `"{title}-{company}"`.
///
/// Two records denote the same job iff their identifiers are equal. No
/// escaping is applied, so a title or company containing the separator can
/// collide with another pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobIdentifier(String);

impl JobIdentifier {
    pub fn new(title: &str, company: &str) -> Self {
        let mut id = String::with_capacity(title.len() + company.len() + 1);
        id.push_str(title);
        id.push(IDENTIFIER_SEPARATOR);
        id.push_str(company);
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for JobIdentifier {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for JobIdentifier {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for JobIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(value).unwrap_or_default())
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(value))
}

// Truthiness of whatever the service sent for `isRemote`.
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
