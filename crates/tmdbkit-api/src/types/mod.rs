//! TMDB domain models.
//!
//! Every model is deserialized straight from the API response. Keys the
//! response leaves out (or sends as `null`) fall back to empty values;
//! `id` is the one field a model cannot be decoded without.

mod collection;
mod common;
mod company;
mod configuration;
mod find;
mod movie;
mod person;
mod tv;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::lazy::Lazy;

pub use collection::Collection;
pub use common::{
    CastMember, CollectionSummary, CompanySummary, Credits, CrewMember, ExternalIds, Genre, Image,
    Images, Keyword, Keywords, Network, Trailer, Trailers, Translation, TranslationData,
    Translations,
};
pub use company::Company;
pub use configuration::{Configuration, ImageConfiguration};
pub use find::FindResults;
pub use movie::Movie;
pub use person::{MovieCredits, MovieRole, Person, Role, TvCredits, TvShowRole};
pub use tv::{Creator, Episode, Season, TvShow};

/// A paged list envelope (`search/*`, `movie/popular`, ...).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Page<T> {
    /// Items in response order.
    pub results: Vec<T>,
}

/// Treats an explicit `null` like an absent key.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes an appended page (`{"page":1,"results":[...]}`) into a [`Lazy`] list.
pub(crate) fn lazy_results<'de, D, T>(deserializer: D) -> Result<Lazy<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Page<T>>::deserialize(deserializer)?
        .map_or_else(Lazy::new, |page| Lazy::loaded(page.results)))
}

/// Parses a TMDB `YYYY-MM-DD` date; empty or malformed yields `None`.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
