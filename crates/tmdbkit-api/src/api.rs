//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::Result;
use crate::params::{ExternalSource, SearchParams};
use crate::types::{
    Collection, Company, Episode, FindResults, Movie, Person, Season, TvShow,
};

/// TMDB API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
///
/// Detail methods take an `append` list for `append_to_response`:
/// `None` sends the default set for the resource, `Some(&[])` sends none.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Fetches `movie/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn get_movie(&self, id: u64, append: Option<&[&str]>) -> Result<Movie>;

    /// Fetches `tv/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn get_tv_show(&self, id: u64, append: Option<&[&str]>) -> Result<TvShow>;

    /// Fetches `tv/{tv_id}/season/{season_number}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn get_season(
        &self,
        tv_id: u64,
        season_number: u32,
        append: Option<&[&str]>,
    ) -> Result<Season>;

    /// Fetches `tv/{tv_id}/season/{season_number}/episode/{episode_number}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn get_episode(
        &self,
        tv_id: u64,
        season_number: u32,
        episode_number: u32,
        append: Option<&[&str]>,
    ) -> Result<Episode>;

    /// Fetches `person/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn get_person(&self, id: u64, append: Option<&[&str]>) -> Result<Person>;

    /// Fetches `collection/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn get_collection(&self, id: u64, append: Option<&[&str]>) -> Result<Collection>;

    /// Fetches `company/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn get_company(&self, id: u64, append: Option<&[&str]>) -> Result<Company>;

    /// Searches for movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_movie(&self, params: &SearchParams) -> Result<Vec<Movie>>;

    /// Searches for TV shows.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_tv_show(&self, params: &SearchParams) -> Result<Vec<TvShow>>;

    /// Searches for people.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_person(&self, params: &SearchParams) -> Result<Vec<Person>>;

    /// Searches for collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_collection(&self, params: &SearchParams) -> Result<Vec<Collection>>;

    /// Searches for companies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_company(&self, params: &SearchParams) -> Result<Vec<Company>>;

    /// Fetches the most recently added movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn latest_movie(&self) -> Result<Movie>;

    /// Lists upcoming movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn upcoming_movies(&self, page: u32) -> Result<Vec<Movie>>;

    /// Lists movies now in theatres.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn now_playing_movies(&self, page: u32) -> Result<Vec<Movie>>;

    /// Lists popular movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn popular_movies(&self, page: u32) -> Result<Vec<Movie>>;

    /// Lists top-rated movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn top_rated_movies(&self, page: u32) -> Result<Vec<Movie>>;

    /// Fetches the most recently added TV show.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn latest_tv_show(&self) -> Result<TvShow>;

    /// Lists popular TV shows.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn popular_tv_shows(&self, page: u32) -> Result<Vec<TvShow>>;

    /// Lists shows with an episode airing in the next 7 days.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn on_the_air_tv_shows(&self, page: u32) -> Result<Vec<TvShow>>;

    /// Lists shows with an episode airing today.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn airing_today_tv_shows(&self, page: u32) -> Result<Vec<TvShow>>;

    /// Lists top-rated TV shows.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn top_rated_tv_shows(&self, page: u32) -> Result<Vec<TvShow>>;

    /// Fetches the most recently added person.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn latest_person(&self) -> Result<Person>;

    /// Lists popular people.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn popular_persons(&self, page: u32) -> Result<Vec<Person>>;

    /// Looks up every resource matching an external ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn find(&self, external_id: &str, source: ExternalSource) -> Result<FindResults>;

    /// Movies matching an external ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn find_movie(&self, external_id: &str, source: ExternalSource) -> Result<Vec<Movie>>;

    /// People matching an external ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn find_person(&self, external_id: &str, source: ExternalSource)
    -> Result<Vec<Person>>;

    /// TV shows matching an external ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn find_tv_show(
        &self,
        external_id: &str,
        source: ExternalSource,
    ) -> Result<Vec<TvShow>>;

    /// Seasons matching an external ID (usually [`ExternalSource::Tvdb`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn find_season(&self, external_id: &str, source: ExternalSource)
    -> Result<Vec<Season>>;

    /// Episodes matching an external ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn find_episode(
        &self,
        external_id: &str,
        source: ExternalSource,
    ) -> Result<Vec<Episode>>;
}
