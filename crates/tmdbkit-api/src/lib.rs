//! Client library for The Movie Database (TMDB) v3 API.
//!
//! Build a [`TmdbClient`] with an API key, then call the endpoint methods
//! of [`LocalTmdbApi`]. Responses come back as typed models; fields that
//! list and search responses leave out are [`Lazy`] and fetched on first
//! access.

/// `TmdbApi` trait definition.
pub mod api;
/// Concurrent detail fetches.
pub mod batch;
/// `TmdbClient` and its builder.
pub mod client;
mod endpoints;
/// Error type.
pub mod error;
/// Lazily completed model fields.
pub mod lazy;
/// Search and find parameters.
pub mod params;
/// Base URLs and default `append_to_response` sets.
pub mod request;
mod throttle;
/// Domain models.
pub mod types;

pub use api::{LocalTmdbApi, TmdbApi};
pub use batch::{fetch_movies, fetch_tv_shows};
pub use client::{TmdbClient, TmdbClientBuilder};
pub use error::{Result, TmdbError};
pub use lazy::Lazy;
pub use params::{ExternalSource, SearchParams, UnknownExternalSource};
pub use types::{
    CastMember, Collection, CollectionSummary, Company, CompanySummary, Configuration, Creator,
    Credits, CrewMember, Episode, ExternalIds, FindResults, Genre, Image, ImageConfiguration,
    Images, Keyword, Keywords, Movie, MovieCredits, MovieRole, Network, Person, Role, Season,
    Trailer, Trailers, Translation, TranslationData, Translations, TvCredits, TvShow, TvShowRole,
};
