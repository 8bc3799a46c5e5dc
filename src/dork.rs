// Dork composition and engine URL building

use crate::model::{FileType, SearchEngine, UrlTemplate, ALL_RESULTS_TAG};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Excludes dynamic pages and biases results toward open directory listings.
pub const LISTING_SUFFIX: &str = " -inurl:(jsp|pl|php|html|aspx|htm|cf|shtml) intitle:index.of";

/// Characters left as-is in a query component. Matches `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Whitespace as browsers trim it: Unicode White_Space plus U+FEFF, minus U+0085.
fn is_trimmed_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// True when nothing but trimmable whitespace is left of `query`.
pub fn is_blank(query: &str) -> bool {
    query.chars().all(is_trimmed_whitespace)
}

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Build the boolean query: raw text, optional extension group, listing suffix.
///
/// The query is used untrimmed; callers validate it beforehand.
pub fn compose_query(query: &str, file_type: Option<&FileType>) -> String {
    let mut dork = String::with_capacity(query.len() + LISTING_SUFFIX.len() + 64);
    dork.push_str(query);
    if let Some(ft) = file_type.filter(|ft| ft.has_pattern()) {
        dork.push_str(" +(");
        dork.push_str(ft.pattern);
        dork.push(')');
    }
    dork.push_str(LISTING_SUFFIX);
    dork
}

/// Destination URL for `engine`.
///
/// Path-segment engines take the raw query with spaces turned into `+` and the
/// file type's result tag; the extension group and listing suffix are dropped.
pub fn build_url(engine: SearchEngine, query: &str, file_type: Option<&FileType>) -> String {
    match engine.template() {
        UrlTemplate::QueryParam { base } => {
            format!("{}{}", base, encode_component(&compose_query(query, file_type)))
        }
        UrlTemplate::PathSegments { base } => {
            let tag = file_type.map_or(ALL_RESULTS_TAG, |ft| ft.result_tag);
            format!("{}{}/type/{}", base, query.replace(' ', "+"), tag)
        }
    }
}
