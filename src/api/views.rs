//! HTML pages served by the router.
//!
//! Every value that came from the user or from a fetched page goes through
//! `html_escape` before it is written into markup.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::api::models::{ScrapeError, ScrapeResult};

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:1rem}input{width:100%;padding:.4rem}\
button{margin-top:1rem;padding:.4rem 1rem}li{margin:.3rem 0;white-space:pre-wrap}\
.error{color:#a00}";

fn layout(heading: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{heading}</title>\n<style>{style}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        style = STYLE
    )
}

pub fn index_page() -> String {
    layout(
        "Web Scraper",
        "<h1>Web Scraper</h1>\n\
         <form action=\"/scrape\" method=\"post\">\n\
         <label for=\"url\">URL</label>\n\
         <input type=\"url\" id=\"url\" name=\"url\" placeholder=\"https://example.com\" required>\n\
         <label for=\"tag\">Tag</label>\n\
         <input type=\"text\" id=\"tag\" name=\"tag\" placeholder=\"p, h1, a, ...\" required>\n\
         <button type=\"submit\">Scrape</button>\n\
         </form>\n",
    )
}

pub fn result_page(result: &ScrapeResult) -> String {
    let mut body = String::with_capacity(256 + result.elements.iter().map(String::len).sum::<usize>());

    body.push_str("<h1>Scraping Results</h1>\n");
    body.push_str(&format!("<p><strong>Title:</strong> {}</p>\n", encode_text(&result.title)));
    body.push_str(&format!("<p><strong>URL:</strong> {}</p>\n", url_markup(&result.url)));
    body.push_str(&format!(
        "<p><strong>Tag:</strong> <code>{}</code> ({} found)</p>\n",
        encode_text(&result.tag),
        result.elements.len()
    ));

    if result.elements.is_empty() {
        body.push_str("<p>No elements found for this tag.</p>\n");
    } else {
        body.push_str("<ol>\n");
        for element in &result.elements {
            body.push_str(&format!("<li>{}</li>\n", encode_text(element)));
        }
        body.push_str("</ol>\n");
    }

    body.push_str(&format!(
        "<p><small>Scraped at {}</small></p>\n",
        result.scraped_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    body.push_str("<p><a href=\"/\">Scrape another page</a></p>\n");

    layout("Scraping Results", &body)
}

pub fn error_page(error: &ScrapeError) -> String {
    let body = format!(
        "<h1>Scraping Results</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Back</a></p>\n",
        encode_text(&error.message)
    );
    layout("Error", &body)
}

// Only http(s) urls become links; anything else is shown as text.
fn url_markup(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        format!(
            "<a href=\"{}\" rel=\"noopener noreferrer\">{}</a>",
            encode_double_quoted_attribute(url),
            encode_text(url)
        )
    } else {
        encode_text(url).into_owned()
    }
}
