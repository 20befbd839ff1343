//! Video payload validation
//!
//! Request bodies arrive as untyped JSON. The validator checks every rule,
//! collects at most one [`FieldError`] per field, and only when the list is
//! empty produces a typed input struct. Validation never touches the store.
//!
//! Field order in the error list is fixed: `title`, `author`,
//! `availableResolutions`, `canBeDownloaded`, `minAgeRestriction`,
//! `publicationDate`.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::{Number, Value};

use super::model::Resolution;

pub const TITLE_MAX_LEN: usize = 40;
pub const AUTHOR_MAX_LEN: usize = 20;
pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 18;

/// One failed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub message: String,
    pub field: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Accumulated field errors
///
/// Serializes as the API error body: `{"errorsMessages": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    errors_messages: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors_messages.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors_messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors_messages.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors_messages
    }

    /// Names of the failed fields, in report order
    pub fn fields(&self) -> Vec<&str> {
        self.errors_messages.iter().map(|e| e.field.as_str()).collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors_messages.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.errors_messages.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validated body of `POST /videos`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateVideoInput {
    /// Trimmed
    pub title: String,
    /// Trimmed
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
}

/// Validated body of `PUT /videos/:id`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateVideoInput {
    /// Trimmed
    pub title: String,
    /// Trimmed
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<u8>,
    pub publication_date: DateTime<Utc>,
}

/// Validate a create payload
pub fn validate_create(body: &Value) -> Result<CreateVideoInput, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = check_text(body, "title", TITLE_MAX_LEN, &mut errors);
    let author = check_text(body, "author", AUTHOR_MAX_LEN, &mut errors);
    let resolutions = check_resolutions(body, &mut errors);

    match (title, author, resolutions) {
        (Some(title), Some(author), Some(available_resolutions)) if errors.is_empty() => {
            Ok(CreateVideoInput {
                title,
                author,
                available_resolutions,
            })
        }
        _ => Err(errors),
    }
}

/// Validate a full-update payload
pub fn validate_update(body: &Value) -> Result<UpdateVideoInput, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = check_text(body, "title", TITLE_MAX_LEN, &mut errors);
    let author = check_text(body, "author", AUTHOR_MAX_LEN, &mut errors);
    let resolutions = check_resolutions(body, &mut errors);
    let can_be_downloaded = check_can_be_downloaded(body, &mut errors);
    let min_age = check_min_age(body, &mut errors);
    let publication_date = check_publication_date(body, &mut errors);

    match (title, author, resolutions, can_be_downloaded, min_age, publication_date) {
        (
            Some(title),
            Some(author),
            Some(available_resolutions),
            Some(can_be_downloaded),
            Some(min_age_restriction),
            Some(publication_date),
        ) if errors.is_empty() => Ok(UpdateVideoInput {
            title,
            author,
            available_resolutions,
            can_be_downloaded,
            min_age_restriction,
            publication_date,
        }),
        _ => Err(errors),
    }
}

/// Required string, non-empty after trim, at most `max_len` characters.
fn check_text(
    body: &Value,
    field: &str,
    max_len: usize,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, format!("{} is required", field));
            None
        }
        Some(Value::String(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                errors.push(field, format!("{} is required", field));
                None
            } else if trimmed.chars().count() > max_len {
                errors.push(field, format!("{} must not exceed {} characters", field, max_len));
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(_) => {
            errors.push(field, format!("{} must be a string", field));
            None
        }
    }
}

fn check_resolutions(body: &Value, errors: &mut ValidationErrors) -> Option<Vec<Resolution>> {
    const FIELD: &str = "availableResolutions";

    let items = match body.get(FIELD) {
        None | Some(Value::Null) => {
            errors.push(FIELD, "at least one resolution should be added");
            return None;
        }
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.push(FIELD, "availableResolutions must be an array");
            return None;
        }
    };

    if items.is_empty() {
        errors.push(FIELD, "at least one resolution should be added");
        return None;
    }

    let mut resolutions = Vec::with_capacity(items.len());
    for item in items {
        match item.as_str().map(str::parse::<Resolution>) {
            Some(Ok(resolution)) => resolutions.push(resolution),
            Some(Err(message)) => {
                errors.push(FIELD, message);
                return None;
            }
            None => {
                errors.push(FIELD, format!("invalid resolution: {}", item));
                return None;
            }
        }
    }
    Some(resolutions)
}

fn check_can_be_downloaded(body: &Value, errors: &mut ValidationErrors) -> Option<bool> {
    match body.get("canBeDownloaded") {
        Some(Value::Bool(flag)) => Some(*flag),
        _ => {
            errors.push("canBeDownloaded", "canBeDownloaded must be a boolean");
            None
        }
    }
}

/// `Some(None)` is a valid "no restriction"; outer `None` is a failure.
fn check_min_age(body: &Value, errors: &mut ValidationErrors) -> Option<Option<u8>> {
    match body.get("minAgeRestriction") {
        None | Some(Value::Null) => Some(None),
        Some(Value::Number(n)) => match integral(n) {
            Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Some(Some(age as u8)),
            _ => {
                push_min_age_error(errors);
                None
            }
        },
        Some(_) => {
            push_min_age_error(errors);
            None
        }
    }
}

/// Integer value of a JSON number; `18.0` counts as 18.
fn integral(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn push_min_age_error(errors: &mut ValidationErrors) {
    errors.push(
        "minAgeRestriction",
        format!(
            "minAgeRestriction must be null or an integer between {} and {}",
            MIN_AGE, MAX_AGE
        ),
    );
}

fn check_publication_date(body: &Value, errors: &mut ValidationErrors) -> Option<DateTime<Utc>> {
    let parsed = body
        .get("publicationDate")
        .and_then(Value::as_str)
        .and_then(parse_date_time);

    match parsed {
        Some(date) => Some(date),
        None => {
            errors.push(
                "publicationDate",
                "publicationDate must be a valid ISO 8601 date-time",
            );
            None
        }
    }
}

/// RFC 3339, or an ISO 8601 date-time without offset or a bare date, both
/// read as UTC.
fn parse_date_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
