use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::fetcher::{errors::FetchError, types::Charset};

static HEADER_CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

/// How many leading bytes to inspect for meta tags and heuristics.
const SNIFF_WINDOW: usize = 4096;

/// Decide the page charset: Content-Type header first, then a `<meta>`
/// charset in the first few KB, then chardetng's guess.
pub fn detect(content_type: &str, body: &[u8]) -> Charset {
    if let Some(charset) = charset_from_label(content_type, &HEADER_CHARSET_RE) {
        return charset;
    }

    let window = &body[..body.len().min(SNIFF_WINDOW)];
    let head = String::from_utf8_lossy(window);
    if let Some(charset) = charset_from_label(&head, &META_CHARSET_RE) {
        return charset;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(window, false);
    Charset::from_encoding(detector.guess(None, true))
}

fn charset_from_label(haystack: &str, re: &Regex) -> Option<Charset> {
    let label = re.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes()).map(Charset::from_encoding)
}

/// Decode the body with the detected charset, failing rather than handing
/// mojibake to the normalizer.
pub fn decode(body: &[u8], charset: &Charset) -> Result<String, FetchError> {
    let encoding = charset.encoding();
    let (decoded, _encoding, had_errors) = encoding.decode(body);

    if had_errors {
        return Err(FetchError::Charset(format!(
            "body is not valid {}",
            encoding.name()
        )));
    }

    Ok(decoded.into_owned())
}
