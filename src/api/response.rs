use axum::http::StatusCode;
use axum::response::Html;

use crate::api::models::{ScrapeError, ScrapeResult};
use crate::api::views;

pub type Page = (StatusCode, Html<String>);

pub fn index() -> Page {
    (StatusCode::OK, Html(views::index_page()))
}

pub fn success(result: &ScrapeResult) -> Page {
    (StatusCode::OK, Html(views::result_page(result)))
}

pub fn error(error: &ScrapeError) -> Page {
    (error.status, Html(views::error_page(error)))
}
