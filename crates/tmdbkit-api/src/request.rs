//! Request URL construction.
//!
//! Every call has the shape
//! `{base}{path}?api_key={key}&language={lang}&{extra}` where `extra`
//! holds endpoint-specific pairs such as `append_to_response` or `query`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::error::{Result, TmdbError};

/// Bytes escaped in a caller-supplied path segment (RFC 3986 unreserved kept).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Plain-HTTP base URL for TMDB API v3.
pub const API_URL: &str = "http://api.themoviedb.org/3/";

/// HTTPS base URL for TMDB API v3.
pub const SECURE_API_URL: &str = "https://api.themoviedb.org/3/";

/// Default `append_to_response` for `movie/{id}`.
pub const MOVIE_APPEND: &[&str] = &["trailers", "images", "casts", "translations"];

/// Default `append_to_response` for `tv/{id}`.
pub const TV_SHOW_APPEND: &[&str] = &["trailers", "images", "casts", "translations", "keywords"];

/// Default `append_to_response` for seasons and episodes.
pub const SEASON_APPEND: &[&str] = &["trailers", "images", "casts", "translations"];

/// Default `append_to_response` for `person/{id}`.
pub const PERSON_APPEND: &[&str] = &["tv_credits", "movie_credits"];

/// Default `append_to_response` for `collection/{id}`.
pub const COLLECTION_APPEND: &[&str] = &["images"];

/// Default `append_to_response` for `company/{id}`.
pub const COMPANY_APPEND: &[&str] = &["movies"];

/// Builds the full request URL for `path`.
///
/// `api_key` and `language` always come first; `extra` pairs follow in
/// order. All values are percent-encoded.
///
/// # Errors
///
/// Returns [`TmdbError::InvalidUrl`] if `path` cannot be joined onto `base`.
pub(crate) fn build_request_url(
    base: &Url,
    path: &str,
    api_key: &str,
    language: &str,
    extra: &[(&str, String)],
) -> Result<Url> {
    let mut url = base.join(path).map_err(|source| TmdbError::InvalidUrl {
        path: String::from(path),
        source,
    })?;

    url.query_pairs_mut()
        .append_pair("api_key", api_key)
        .append_pair("language", language)
        .extend_pairs(extra.iter().map(|(k, v)| (*k, v.as_str())));

    Ok(url)
}

/// Percent-encodes a caller-supplied value as a single path segment.
///
/// `/`, `?`, `#` and `%` are escaped, so the value can neither leave its
/// segment nor start a query or fragment.
///
/// # Errors
///
/// Returns [`TmdbError::InvalidPathSegment`] for an empty value, `.` or
/// `..`, which URL resolution would drop or climb out of.
pub(crate) fn path_segment(raw: &str) -> Result<String> {
    if matches!(raw, "" | "." | "..") {
        return Err(TmdbError::InvalidPathSegment(String::from(raw)));
    }
    Ok(utf8_percent_encode(raw, SEGMENT).to_string())
}

/// Converts an append list into an `append_to_response` pair.
///
/// An empty list produces no pair at all.
pub(crate) fn append_to_response(append: &[&str]) -> Option<(&'static str, String)> {
    if append.is_empty() {
        None
    } else {
        Some(("append_to_response", append.join(",")))
    }
}

/// Parses one of the built-in base URLs.
pub(crate) fn default_base_url(secure: bool) -> Result<Url> {
    let raw = if secure { SECURE_API_URL } else { API_URL };
    Url::parse(raw).map_err(|source| TmdbError::InvalidUrl {
        path: String::from(raw),
        source,
    })
}
