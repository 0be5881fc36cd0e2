use axum::{
    routing::{get, post},
    Router,
    extract::{rejection::FormRejection, Form, State},
    response::IntoResponse,
};
use tower_http::trace::TraceLayer;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::api::models::{ScrapeError, ScrapeForm, ScrapeRequest, ScrapeResult};
use crate::api::response;
use crate::fetcher::Fetcher;
use crate::scraper::extract_page;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/scrape", post(scrape_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn index_handler() -> impl IntoResponse {
    response::index()
}

async fn scrape_handler(
    State(state): State<AppState>,
    form: std::result::Result<Form<Vec<(String, String)>>, FormRejection>,
) -> impl IntoResponse {
    // An unreadable body is treated like a form with nothing filled in.
    let form = match form {
        Ok(Form(pairs)) => ScrapeForm::from_pairs(pairs),
        Err(rejection) => {
            debug!(%rejection, "form body rejected");
            ScrapeForm::default()
        }
    };

    match process_scrape_request(&state.fetcher, form).await {
        Ok(result) => response::success(&result),
        Err(err) => response::error(&ScrapeError::from(err)),
    }
}

/// Validates the submission, fetches the page and extracts the requested tag.
pub async fn process_scrape_request(fetcher: &Fetcher, form: ScrapeForm) -> Result<ScrapeResult> {
    let req = ScrapeRequest::try_from(form).inspect_err(|_| {
        warn!("rejected submission with missing url or tag");
    })?;

    info!(url = %req.url, tag = %req.tag, "scraping page");
    let start_time = std::time::Instant::now();

    let html = fetcher.fetch_html(&req.url).await.inspect_err(|err| {
        warn!(url = %req.url, error = %err, "fetch failed");
    })?;
    let scraped_at = Utc::now();
    debug!(url = %req.url, bytes = html.len(), "fetched page");

    let page = extract_page(&html, &req.tag);
    info!(
        url = %req.url,
        tag = %req.tag,
        matches = page.elements.len(),
        elapsed = ?start_time.elapsed(),
        "scrape finished"
    );

    Ok(ScrapeResult {
        title: page.title,
        elements: page.elements,
        tag: req.tag,
        url: req.url,
        scraped_at,
    })
}
