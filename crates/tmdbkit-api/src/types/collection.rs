//! `Collection` model.

use std::sync::Weak;

use serde::Deserialize;

use super::common::Images;
use super::movie::Movie;
use super::null_default;
use crate::client::Requester;
use crate::lazy::Bind;

/// A movie collection, from `collection/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    /// TMDB collection ID.
    pub id: u64,
    /// Name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Overview text.
    #[serde(default, deserialize_with = "null_default")]
    pub overview: String,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Movies in the collection, in response order.
    #[serde(default, deserialize_with = "null_default")]
    pub parts: Vec<Movie>,
    /// Images, when appended.
    #[serde(default)]
    pub images: Option<Images>,
}

impl Collection {
    /// Movies in the collection.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.parts
    }
}

impl Bind for Collection {
    fn bind(&mut self, client: &Weak<Requester>) {
        self.parts.bind(client);
    }
}
