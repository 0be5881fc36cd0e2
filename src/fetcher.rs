use std::time::Duration;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use reqwest::{header::{CONTENT_TYPE, USER_AGENT}, Client, ClientBuilder};
use tracing::debug;

use crate::error::Result;

/// How far into the body a `<meta charset>` declaration is looked for.
const META_SNIFF_LEN: usize = 1024;

/// Browser identity sent with every fetch; some sites answer 403 to unknown clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Retrieves remote pages. Cloning shares the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Builds a fetcher. Without a timeout a silent server keeps the request open
    /// until the transport gives up.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = ClientBuilder::new().pool_max_idle_per_host(10);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// GETs `url` and returns the decoded body. 4xx and 5xx statuses are errors.
    ///
    /// The charset comes from the Content-Type header, then from a `<meta>`
    /// declaration near the top of the page, and defaults to UTF-8.
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?
            .error_for_status()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = response.bytes().await?;

        Ok(decode_body(&bytes, content_type.as_deref()))
    }
}

pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_from_content_type)
        .or_else(|| sniff_meta_charset(bytes))
        .unwrap_or(UTF_8);
    debug!(encoding = encoding.name(), "decoding body");

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        debug!(encoding = encoding.name(), "body contained malformed sequences");
    }
    text.into_owned()
}

fn charset_from_content_type(value: &str) -> Option<&'static Encoding> {
    value.split(';').skip(1).find_map(|param| {
        let (name, label) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        Encoding::for_label(label.trim().trim_matches(['"', '\'']).as_bytes())
    })
}

// Covers both `<meta charset=..>` and the http-equiv `content="..; charset=.."` form.
fn sniff_meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(META_SNIFF_LEN)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();

    let mut rest = head.as_str();
    while let Some(pos) = rest.find("<meta") {
        rest = &rest[pos + "<meta".len()..];
        let tag = &rest[..rest.find('>').unwrap_or(rest.len())];
        let Some(idx) = tag.find("charset=") else {
            continue;
        };

        let label = tag[idx + "charset=".len()..]
            .trim_start_matches(['"', '\''])
            .split(|c: char| matches!(c, '"' | '\'' | ';' | '/') || c.is_ascii_whitespace())
            .next()
            .unwrap_or_default();

        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            // A byte stream can't declare itself UTF-16 from inside ASCII markup.
            if encoding == UTF_16LE || encoding == UTF_16BE {
                return Some(UTF_8);
            }
            return Some(encoding);
        }
    }
    None
}
