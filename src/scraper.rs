use scraper::{ElementRef, Html, Selector};
use once_cell::sync::Lazy;

pub const NO_TITLE: &str = "No Title Found";

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("title").expect("Failed to parse title selector")
});

/// Title and matched element texts pulled from one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageExtract {
    pub title: String,
    pub elements: Vec<String>,
}

/// Parses `html` leniently and collects the text of every `tag` element.
pub fn extract_page(html: &str, tag: &str) -> PageExtract {
    let document = Html::parse_document(html);

    PageExtract {
        title: extract_title(&document),
        elements: extract_elements(&document, tag),
    }
}

/// Text of the first `<title>`, or [`NO_TITLE`] when the page has none.
/// A present but empty `<title></title>` stays empty rather than falling back.
pub fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|title| title.text().collect())
        .unwrap_or_else(|| NO_TITLE.to_string())
}

/// Texts of all elements named `tag`, in document order.
///
/// `tag` is compared against element names, never parsed as a CSS selector,
/// so anything that is not a plain tag name simply matches nothing.
pub fn extract_elements(document: &Html, tag: &str) -> Vec<String> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Vec::new();
    }

    document
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name().eq_ignore_ascii_case(tag))
        .map(|element| element.text().collect())
        .collect()
}
