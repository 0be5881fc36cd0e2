use axum::http::StatusCode;
use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};

/// Raw form body of a submission; either field may be absent.
#[derive(Debug, Default)]
pub struct ScrapeForm {
    pub url: Option<String>,
    pub tag: Option<String>,
}

impl ScrapeForm {
    /// Builds the form from decoded key/value pairs. A repeated key keeps its
    /// first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = ScrapeForm::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "url" => &mut form.url,
                "tag" => &mut form.tag,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }
}

/// A submission with both fields present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub url: String,
    pub tag: String,
}

impl TryFrom<ScrapeForm> for ScrapeRequest {
    type Error = AppError;

    fn try_from(form: ScrapeForm) -> Result<Self> {
        let url = non_blank(form.url);
        let tag = non_blank(form.tag);

        match (url, tag) {
            (Some(url), Some(tag)) => Ok(ScrapeRequest { url, tag }),
            _ => Err(AppError::MissingFields),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone)]
pub struct ScrapeResult {
    pub title: String,
    pub elements: Vec<String>,
    pub tag: String,
    pub url: String,
    pub scraped_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ScrapeError {
    pub message: String,
    pub status: StatusCode,
}

impl From<AppError> for ScrapeError {
    fn from(err: AppError) -> Self {
        ScrapeError {
            message: err.user_message(),
            status: err.status(),
        }
    }
}
