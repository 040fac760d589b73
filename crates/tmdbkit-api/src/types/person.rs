//! `Person` model and the roles a person played.

use std::sync::Weak;

use chrono::NaiveDate;
use serde::Deserialize;

use super::common::{ExternalIds, Images};
use super::{null_default, parse_date};
use crate::client::Requester;
use crate::error::Result;
use crate::lazy::{Backfill, Bind, Lazy};

/// A movie role from `person/{id}/movie_credits`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieRole {
    /// Movie ID.
    pub id: u64,
    /// Movie title.
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    /// Original title.
    #[serde(default, deserialize_with = "null_default")]
    pub original_title: String,
    /// Character played.
    #[serde(default, deserialize_with = "null_default")]
    pub character: String,
    /// Credit ID.
    #[serde(default, deserialize_with = "null_default")]
    pub credit_id: String,
    /// Release date (YYYY-MM-DD, empty if unknown).
    #[serde(default, deserialize_with = "null_default")]
    pub release_date: String,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// A TV role from `person/{id}/tv_credits`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TvShowRole {
    /// TV show ID.
    pub id: u64,
    /// Show name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Original name.
    #[serde(default, deserialize_with = "null_default")]
    pub original_name: String,
    /// Character played.
    #[serde(default, deserialize_with = "null_default")]
    pub character: String,
    /// Credit ID.
    #[serde(default, deserialize_with = "null_default")]
    pub credit_id: String,
    /// First air date (YYYY-MM-DD, empty if unknown).
    #[serde(default, deserialize_with = "null_default")]
    pub first_air_date: String,
    /// Number of episodes the person appeared in.
    #[serde(default, deserialize_with = "null_default")]
    pub episode_count: u32,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// Either kind of acting role.
#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    /// A movie role.
    Movie(MovieRole),
    /// A TV role.
    TvShow(TvShowRole),
}

impl Role {
    /// ID of the movie or show.
    #[must_use]
    pub const fn media_id(&self) -> u64 {
        match self {
            Self::Movie(role) => role.id,
            Self::TvShow(role) => role.id,
        }
    }

    /// Movie title or show name.
    #[must_use]
    pub fn media_title(&self) -> &str {
        match self {
            Self::Movie(role) => &role.title,
            Self::TvShow(role) => &role.name,
        }
    }

    /// Character played.
    #[must_use]
    pub fn character(&self) -> &str {
        match self {
            Self::Movie(role) => &role.character,
            Self::TvShow(role) => &role.character,
        }
    }

    /// Release or first air date.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Movie(role) => parse_date(&role.release_date),
            Self::TvShow(role) => parse_date(&role.first_air_date),
        }
    }
}

/// Movie credits of a person.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MovieCredits {
    /// Acting roles in response order.
    #[serde(default, deserialize_with = "null_default")]
    pub cast: Vec<MovieRole>,
}

/// TV credits of a person.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TvCredits {
    /// Acting roles in response order.
    #[serde(default, deserialize_with = "null_default")]
    pub cast: Vec<TvShowRole>,
}

/// A person, from `person/{id}` or any person list.
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Other names.
    #[serde(default, deserialize_with = "null_default")]
    pub also_known_as: Vec<String>,
    /// Biography.
    #[serde(default, deserialize_with = "null_default")]
    pub biography: String,
    /// Birthday (YYYY-MM-DD).
    #[serde(default, deserialize_with = "null_default")]
    pub birthday: String,
    /// Deathday (YYYY-MM-DD).
    #[serde(default, deserialize_with = "null_default")]
    pub deathday: String,
    /// Place of birth.
    #[serde(default, deserialize_with = "null_default")]
    pub place_of_birth: String,
    /// Gender (0 unknown, 1 female, 2 male, 3 non-binary).
    #[serde(default, deserialize_with = "null_default")]
    pub gender: u8,
    /// Department the person is best known for.
    #[serde(default, deserialize_with = "null_default")]
    pub known_for_department: String,
    /// Homepage URL.
    #[serde(default, deserialize_with = "null_default")]
    pub homepage: String,
    /// IMDb ID.
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Adult flag.
    #[serde(default, deserialize_with = "null_default")]
    pub adult: bool,
    /// Popularity score.
    #[serde(default, deserialize_with = "null_default")]
    pub popularity: f64,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
    /// External IDs, when appended.
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
    /// Movie credits (`append_to_response=movie_credits`).
    #[serde(default)]
    pub movie_credits: Lazy<MovieCredits>,
    /// TV credits (`append_to_response=tv_credits`).
    #[serde(default)]
    pub tv_credits: Lazy<TvCredits>,
    /// Portraits (`append_to_response=images`).
    #[serde(default)]
    pub images: Lazy<Images>,
    #[serde(skip)]
    backfill: Backfill,
}

impl Person {
    /// Movie roles, fetching `person/{id}/movie_credits` if needed.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn movie_roles(&self) -> Result<&[MovieRole]> {
        let credits = self
            .movie_credits
            .get_or_fill(|| self.backfill.fetch(Some("movie_credits"), None))
            .await?;
        Ok(credits.cast.as_slice())
    }

    /// TV roles, fetching `person/{id}/tv_credits` if needed.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn tv_show_roles(&self) -> Result<&[TvShowRole]> {
        let credits = self
            .tv_credits
            .get_or_fill(|| self.backfill.fetch(Some("tv_credits"), None))
            .await?;
        Ok(credits.cast.as_slice())
    }

    /// Movie roles followed by TV roles.
    ///
    /// # Errors
    ///
    /// Returns the first failing backfill request's error.
    pub async fn roles(&self) -> Result<Vec<Role>> {
        let movies = self.movie_roles().await?;
        let shows = self.tv_show_roles().await?;
        Ok(movies
            .iter()
            .cloned()
            .map(Role::Movie)
            .chain(shows.iter().cloned().map(Role::TvShow))
            .collect())
    }

    /// Portraits, fetching `person/{id}/images` if needed.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn images(&self) -> Result<&Images> {
        self.images
            .get_or_fill(|| self.backfill.fetch(Some("images"), None))
            .await
    }

    /// Parsed birthday.
    #[must_use]
    pub fn born_on(&self) -> Option<NaiveDate> {
        parse_date(&self.birthday)
    }
}

impl Bind for Person {
    fn bind(&mut self, client: &Weak<Requester>) {
        self.backfill = Backfill::new(client, format!("person/{}", self.id));
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_parse_person_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/person_287.json");

        // Act
        let person: Person = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(person.id, 287);
        assert_eq!(person.name, "Brad Pitt");
        assert_eq!(person.place_of_birth, "Shawnee, Oklahoma, USA");
        assert_eq!(person.born_on(), NaiveDate::from_ymd_opt(1963, 12, 18));
        assert_eq!(person.deathday, "");
        assert_eq!(person.gender, 2);
        assert!(person.movie_credits.is_loaded());
        assert!(person.tv_credits.is_loaded());
        assert!(!person.images.is_loaded());
    }

    #[tokio::test]
    async fn test_roles_keep_movie_then_tv_order() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/person_287.json");
        let person: Person = serde_json::from_str(json).unwrap();

        // Act
        let roles = person.roles().await.unwrap();

        // Assert
        assert_eq!(roles.len(), 3);
        assert!(matches!(&roles[0], Role::Movie(role) if role.title == "Fight Club"));
        assert_eq!(roles[0].character(), "Tyler Durden");
        assert_eq!(roles[1].media_title(), "Se7en");
        assert!(matches!(&roles[2], Role::TvShow(role) if role.episode_count == 1));
        assert_eq!(roles[2].media_id(), 1668);
        assert_eq!(roles[0].date(), NaiveDate::from_ymd_opt(1999, 10, 15));
    }

    #[test]
    fn test_search_result_person_has_credits_unloaded() {
        // Arrange
        let json = r#"{"id":287,"name":"Brad Pitt","known_for_department":"Acting","profile_path":null}"#;

        // Act
        let person: Person = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(person.known_for_department, "Acting");
        assert!(person.profile_path.is_none());
        assert!(!person.movie_credits.is_loaded());
        assert!(!person.tv_credits.is_loaded());
    }
}
