//! Response of `find/{external_id}`.

use std::sync::Weak;

use serde::Deserialize;

use super::movie::Movie;
use super::null_default;
use super::person::Person;
use super::tv::{Episode, Season, TvShow};
use crate::client::Requester;
use crate::lazy::Bind;

/// Everything matching one external ID, grouped by kind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FindResults {
    /// Matching movies.
    #[serde(deserialize_with = "null_default")]
    pub movie_results: Vec<Movie>,
    /// Matching people.
    #[serde(deserialize_with = "null_default")]
    pub person_results: Vec<Person>,
    /// Matching TV shows.
    #[serde(deserialize_with = "null_default")]
    pub tv_results: Vec<TvShow>,
    /// Matching seasons.
    #[serde(deserialize_with = "null_default")]
    pub tv_season_results: Vec<Season>,
    /// Matching episodes.
    #[serde(deserialize_with = "null_default")]
    pub tv_episode_results: Vec<Episode>,
}

impl FindResults {
    /// Returns `true` when no list has a match.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movie_results.is_empty()
            && self.person_results.is_empty()
            && self.tv_results.is_empty()
            && self.tv_season_results.is_empty()
            && self.tv_episode_results.is_empty()
    }
}

impl Bind for FindResults {
    fn bind(&mut self, client: &Weak<Requester>) {
        self.movie_results.bind(client);
        self.person_results.bind(client);
        self.tv_results.bind(client);
        self.tv_season_results.bind(client);
        self.tv_episode_results.bind(client);
    }
}
