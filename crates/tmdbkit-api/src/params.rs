//! Request parameters for search and find endpoints.

use std::fmt;
use std::str::FromStr;

/// Parameters shared by the `search/*` endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Search query (required).
    pub query: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Include adult content.
    pub include_adult: bool,
    /// Year filter (`year` for movies, `first_air_date_year` for TV).
    pub year: Option<u32>,
}

impl SearchParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            include_adult: false,
            year: None,
        }
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the adult content flag.
    #[must_use]
    pub const fn include_adult(mut self, include: bool) -> Self {
        self.include_adult = include;
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Encodes the params as query pairs.
    ///
    /// `year_key` names the year filter for the target endpoint;
    /// `None` drops the filter for endpoints that have none.
    pub(crate) fn to_query(&self, year_key: Option<&'static str>) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("query", self.query.clone()),
            ("page", self.page.to_string()),
            ("include_adult", self.include_adult.to_string()),
        ];
        if let (Some(key), Some(year)) = (year_key, self.year) {
            query.push((key, year.to_string()));
        }
        query
    }
}

/// Third-party identifier families accepted by `find/{external_id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExternalSource {
    /// IMDb (`tt0137523`, `nm0000093`).
    #[default]
    Imdb,
    /// TheTVDB numeric ID.
    Tvdb,
    /// Freebase MID.
    FreebaseMid,
    /// Freebase ID.
    Freebase,
    /// TVRage ID.
    TvRage,
    /// Facebook page name.
    Facebook,
    /// Twitter handle.
    Twitter,
    /// Instagram handle.
    Instagram,
    /// Wikidata ID.
    Wikidata,
}

impl ExternalSource {
    /// Value sent as `external_source`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Imdb => "imdb_id",
            Self::Tvdb => "tvdb_id",
            Self::FreebaseMid => "freebase_mid",
            Self::Freebase => "freebase_id",
            Self::TvRage => "tvrage_id",
            Self::Facebook => "facebook_id",
            Self::Twitter => "twitter_id",
            Self::Instagram => "instagram_id",
            Self::Wikidata => "wikidata_id",
        }
    }

    /// All supported sources.
    pub const ALL: [Self; 9] = [
        Self::Imdb,
        Self::Tvdb,
        Self::FreebaseMid,
        Self::Freebase,
        Self::TvRage,
        Self::Facebook,
        Self::Twitter,
        Self::Instagram,
        Self::Wikidata,
    ];
}

impl fmt::Display for ExternalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised `external_source` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown external source: {0}")]
pub struct UnknownExternalSource(pub String);

impl FromStr for ExternalSource {
    type Err = UnknownExternalSource;

    /// Accepts both `imdb_id` and the short form `imdb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|src| {
                let full = src.as_str();
                full == wanted || full.strip_suffix("_id") == Some(wanted.as_str())
            })
            .ok_or_else(|| UnknownExternalSource(String::from(s)))
    }
}
