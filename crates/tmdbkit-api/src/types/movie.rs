//! `Movie` model.

use std::sync::Weak;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::common::{
    CollectionSummary, CompanySummary, Credits, ExternalIds, Genre, Images, Trailers, Translations,
};
use super::{null_default, parse_date};
use crate::client::Requester;
use crate::error::Result;
use crate::lazy::{Backfill, Bind, Lazy};

/// A movie, from `movie/{id}` or any movie list.
///
/// List and search results carry only a subset of the fields; the
/// [`Lazy`] ones are fetched on first access.
#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    /// Original title.
    #[serde(default, deserialize_with = "null_default")]
    pub original_title: String,
    /// Original language (ISO 639-1).
    #[serde(default, deserialize_with = "null_default")]
    pub original_language: String,
    /// Overview text.
    #[serde(default, deserialize_with = "null_default")]
    pub overview: String,
    /// Tagline.
    #[serde(default, deserialize_with = "null_default")]
    pub tagline: String,
    /// Release date (YYYY-MM-DD, empty if unknown).
    #[serde(default, deserialize_with = "null_default")]
    pub release_date: String,
    /// Release status (e.g., "Released").
    #[serde(default, deserialize_with = "null_default")]
    pub status: String,
    /// Homepage URL.
    #[serde(default, deserialize_with = "null_default")]
    pub homepage: String,
    /// IMDb ID.
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Budget in USD.
    #[serde(default, deserialize_with = "null_default")]
    pub budget: u64,
    /// Revenue in USD.
    #[serde(default, deserialize_with = "null_default")]
    pub revenue: u64,
    /// Popularity score.
    #[serde(default, deserialize_with = "null_default")]
    pub popularity: f64,
    /// Vote average.
    #[serde(default, deserialize_with = "null_default")]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default, deserialize_with = "null_default")]
    pub vote_count: u32,
    /// Adult flag.
    #[serde(default, deserialize_with = "null_default")]
    pub adult: bool,
    /// Video flag.
    #[serde(default, deserialize_with = "null_default")]
    pub video: bool,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Genre IDs (list and search results).
    #[serde(default, deserialize_with = "null_default")]
    pub genre_ids: Vec<u32>,
    /// Collection this movie belongs to.
    #[serde(default)]
    pub belongs_to_collection: Option<CollectionSummary>,
    /// Production companies.
    #[serde(default, deserialize_with = "null_default")]
    pub production_companies: Vec<CompanySummary>,
    /// External IDs, when appended.
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
    /// Genres (detail responses only).
    #[serde(default)]
    pub genres: Lazy<Vec<Genre>>,
    /// Trailers (`append_to_response=trailers`).
    #[serde(default)]
    pub trailers: Lazy<Trailers>,
    /// Images (`append_to_response=images`).
    #[serde(default)]
    pub images: Lazy<Images>,
    /// Cast and crew (`append_to_response=casts`).
    #[serde(default)]
    pub casts: Lazy<Credits>,
    /// Translations (`append_to_response=translations`).
    #[serde(default)]
    pub translations: Lazy<Translations>,
    #[serde(skip)]
    backfill: Backfill,
}

impl Movie {
    /// Genres, fetching the movie details if needed.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn genres(&self) -> Result<&[Genre]> {
        let genres = self
            .genres
            .get_or_fill(|| self.backfill.fetch(None, Some("genres")))
            .await?;
        Ok(genres.as_slice())
    }

    /// Trailers, fetching `movie/{id}/trailers` if needed.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn trailers(&self) -> Result<&Trailers> {
        self.trailers
            .get_or_fill(|| self.backfill.fetch(Some("trailers"), None))
            .await
    }

    /// Source key of the first YouTube trailer.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn trailer(&self) -> Result<Option<&str>> {
        Ok(self.trailers().await?.first_youtube_source())
    }

    /// Images, fetching `movie/{id}/images` if needed.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn images(&self) -> Result<&Images> {
        self.images
            .get_or_fill(|| self.backfill.fetch(Some("images"), None))
            .await
    }

    /// Cast and crew, fetching `movie/{id}/casts` if needed.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn casts(&self) -> Result<&Credits> {
        self.casts
            .get_or_fill(|| self.backfill.fetch(Some("casts"), None))
            .await
    }

    /// Translations, fetching `movie/{id}/translations` if needed.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn translations(&self) -> Result<&Translations> {
        self.translations
            .get_or_fill(|| self.backfill.fetch(Some("translations"), None))
            .await
    }

    /// Parsed release date.
    #[must_use]
    pub fn released_on(&self) -> Option<NaiveDate> {
        parse_date(&self.release_date)
    }

    /// Release year.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        self.released_on().map(|date| date.year())
    }
}

impl Bind for Movie {
    fn bind(&mut self, client: &Weak<Requester>) {
        self.backfill = Backfill::new(client, format!("movie/{}", self.id));
    }
}
