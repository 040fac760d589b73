//! `TvShow`, `Season` and `Episode` models.

use std::sync::Weak;

use chrono::NaiveDate;
use serde::Deserialize;

use super::common::{
    CastMember, CompanySummary, Credits, CrewMember, ExternalIds, Genre, Images, Keywords,
    Network, Translations,
};
use super::{null_default, parse_date};
use crate::client::Requester;
use crate::error::{Result, TmdbError};
use crate::lazy::{Backfill, Bind, Lazy};

/// Creator of a TV show.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Creator {
    /// Person ID.
    pub id: u64,
    /// Name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Credit ID.
    #[serde(default, deserialize_with = "null_default")]
    pub credit_id: String,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// A TV show, from `tv/{id}` or any TV list.
#[derive(Debug, Clone, Deserialize)]
pub struct TvShow {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Original name.
    #[serde(default, deserialize_with = "null_default")]
    pub original_name: String,
    /// Original language (ISO 639-1).
    #[serde(default, deserialize_with = "null_default")]
    pub original_language: String,
    /// Overview text.
    #[serde(default, deserialize_with = "null_default")]
    pub overview: String,
    /// First air date (YYYY-MM-DD, empty if unknown).
    #[serde(default, deserialize_with = "null_default")]
    pub first_air_date: String,
    /// Last air date.
    #[serde(default, deserialize_with = "null_default")]
    pub last_air_date: String,
    /// Status (e.g., "Returning Series", "Ended").
    #[serde(default, deserialize_with = "null_default")]
    pub status: String,
    /// Homepage URL.
    #[serde(default, deserialize_with = "null_default")]
    pub homepage: String,
    /// Whether the show is still in production.
    #[serde(default, deserialize_with = "null_default")]
    pub in_production: bool,
    /// Total number of seasons.
    #[serde(default, deserialize_with = "null_default")]
    pub number_of_seasons: u32,
    /// Total number of episodes.
    #[serde(default, deserialize_with = "null_default")]
    pub number_of_episodes: u32,
    /// Typical episode runtimes in minutes.
    #[serde(default, deserialize_with = "null_default")]
    pub episode_run_time: Vec<u32>,
    /// Origin countries (ISO 3166-1).
    #[serde(default, deserialize_with = "null_default")]
    pub origin_country: Vec<String>,
    /// Popularity score.
    #[serde(default, deserialize_with = "null_default")]
    pub popularity: f64,
    /// Vote average.
    #[serde(default, deserialize_with = "null_default")]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default, deserialize_with = "null_default")]
    pub vote_count: u32,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Genre IDs (list and search results).
    #[serde(default, deserialize_with = "null_default")]
    pub genre_ids: Vec<u32>,
    /// Broadcasting networks.
    #[serde(default, deserialize_with = "null_default")]
    pub networks: Vec<Network>,
    /// Show creators.
    #[serde(default, deserialize_with = "null_default")]
    pub created_by: Vec<Creator>,
    /// Production companies.
    #[serde(default, deserialize_with = "null_default")]
    pub production_companies: Vec<CompanySummary>,
    /// External IDs, when appended.
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
    /// Genres (detail responses only).
    #[serde(default)]
    pub genres: Lazy<Vec<Genre>>,
    /// Season summaries (detail responses only).
    #[serde(default)]
    pub seasons: Lazy<Vec<Season>>,
    /// Images (`append_to_response=images`).
    #[serde(default)]
    pub images: Lazy<Images>,
    /// Cast and crew (`append_to_response=credits`).
    #[serde(default)]
    pub credits: Lazy<Credits>,
    /// Keywords (`append_to_response=keywords`).
    #[serde(default)]
    pub keywords: Lazy<Keywords>,
    /// Translations (`append_to_response=translations`).
    #[serde(default)]
    pub translations: Lazy<Translations>,
    #[serde(skip)]
    backfill: Backfill,
}

impl TvShow {
    /// Genres, fetching the show details if needed.
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

    /// Season summaries, fetching the show details if needed.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn seasons(&self) -> Result<&[Season]> {
        let seasons = self
            .seasons
            .get_or_fill(|| async {
                let mut seasons: Vec<Season> = self.backfill.fetch(None, Some("seasons")).await?;
                for season in &mut seasons {
                    season.fill_tv_show_id(self.id);
                }
                Ok::<_, TmdbError>(seasons)
            })
            .await?;
        Ok(seasons.as_slice())
    }

    /// Images, fetching `tv/{id}/images` if needed.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn images(&self) -> Result<&Images> {
        self.images
            .get_or_fill(|| self.backfill.fetch(Some("images"), None))
            .await
    }

    /// Cast and crew, fetching `tv/{id}/credits` if needed.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn credits(&self) -> Result<&Credits> {
        self.credits
            .get_or_fill(|| self.backfill.fetch(Some("credits"), None))
            .await
    }

    /// Keywords, fetching `tv/{id}/keywords` if needed.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn keywords(&self) -> Result<&Keywords> {
        self.keywords
            .get_or_fill(|| self.backfill.fetch(Some("keywords"), None))
            .await
    }

    /// Translations, fetching `tv/{id}/translations` if needed.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn translations(&self) -> Result<&Translations> {
        self.translations
            .get_or_fill(|| self.backfill.fetch(Some("translations"), None))
            .await
    }

    /// Parsed first air date.
    #[must_use]
    pub fn first_aired_on(&self) -> Option<NaiveDate> {
        parse_date(&self.first_air_date)
    }
}

impl Bind for TvShow {
    fn bind(&mut self, client: &Weak<Requester>) {
        self.backfill = Backfill::new(client, format!("tv/{}", self.id));
        if let Some(seasons) = self.seasons.get_mut() {
            for season in seasons {
                season.fill_tv_show_id(self.id);
            }
        }
    }
}

/// A season, from `tv/{id}/season/{n}` or a show's season list.
#[derive(Debug, Clone, Deserialize)]
pub struct Season {
    /// Internal `MongoDB` ID.
    #[serde(rename = "_id", default)]
    pub internal_id: Option<String>,
    /// TMDB season ID.
    pub id: u64,
    /// Parent TV show ID.
    #[serde(default, alias = "show_id", deserialize_with = "null_default")]
    pub tv_show_id: u64,
    /// Season name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Overview text.
    #[serde(default, deserialize_with = "null_default")]
    pub overview: String,
    /// Air date (YYYY-MM-DD, empty if unknown).
    #[serde(default, deserialize_with = "null_default")]
    pub air_date: String,
    /// Season number (0 = specials).
    #[serde(default, deserialize_with = "null_default")]
    pub season_number: u32,
    /// Number of episodes (season summaries only).
    #[serde(default, deserialize_with = "null_default")]
    pub episode_count: u32,
    /// Vote average.
    #[serde(default, deserialize_with = "null_default")]
    pub vote_average: f64,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Episodes (season details only).
    #[serde(default, deserialize_with = "null_default")]
    pub episodes: Vec<Episode>,
    /// Images, when appended.
    #[serde(default)]
    pub images: Option<Images>,
    /// External IDs, when appended.
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
}

impl Season {
    /// Looks up an episode by number.
    #[must_use]
    pub fn episode(&self, episode_number: u32) -> Option<&Episode> {
        self.episodes
            .iter()
            .find(|ep| ep.episode_number == episode_number)
    }

    /// Number of episodes, from the episode list when present.
    #[must_use]
    pub fn number_of_episodes(&self) -> usize {
        if self.episodes.is_empty() {
            usize::try_from(self.episode_count).unwrap_or(usize::MAX)
        } else {
            self.episodes.len()
        }
    }

    /// Uses `tv_show_id` as the parent show when the body carried none,
    /// then hands the season's parent to its episodes.
    pub(crate) fn fill_tv_show_id(&mut self, tv_show_id: u64) {
        if self.tv_show_id == 0 {
            self.tv_show_id = tv_show_id;
        }
        self.share_tv_show_id_with_episodes();
    }

    /// Copies the season's own parent show ID to episodes lacking one.
    fn share_tv_show_id_with_episodes(&mut self) {
        if self.tv_show_id == 0 {
            return;
        }
        for episode in &mut self.episodes {
            if episode.tv_show_id == 0 {
                episode.tv_show_id = self.tv_show_id;
            }
        }
    }
}

impl Bind for Season {
    // Seasons need no client; only their episodes' parent ID is settled.
    fn bind(&mut self, _client: &Weak<Requester>) {
        self.share_tv_show_id_with_episodes();
    }
}

/// An episode, from `tv/{id}/season/{n}/episode/{m}` or a season.
#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    /// TMDB episode ID.
    pub id: u64,
    /// Parent TV show ID.
    #[serde(default, alias = "show_id", deserialize_with = "null_default")]
    pub tv_show_id: u64,
    /// Episode name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Overview text.
    #[serde(default, deserialize_with = "null_default")]
    pub overview: String,
    /// Air date (YYYY-MM-DD, empty if unknown).
    #[serde(default, deserialize_with = "null_default")]
    pub air_date: String,
    /// Season number.
    #[serde(default, deserialize_with = "null_default")]
    pub season_number: u32,
    /// Episode number within the season.
    #[serde(default, deserialize_with = "null_default")]
    pub episode_number: u32,
    /// Production code.
    #[serde(default, deserialize_with = "null_default")]
    pub production_code: String,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Vote average.
    #[serde(default, deserialize_with = "null_default")]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default, deserialize_with = "null_default")]
    pub vote_count: u32,
    /// Still image path.
    #[serde(default)]
    pub still_path: Option<String>,
    /// Episode crew.
    #[serde(default, deserialize_with = "null_default")]
    pub crew: Vec<CrewMember>,
    /// Guest stars.
    #[serde(default, deserialize_with = "null_default")]
    pub guest_stars: Vec<CastMember>,
    /// Images, when appended.
    #[serde(default)]
    pub images: Option<Images>,
    /// External IDs, when appended.
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
}

impl Episode {
    /// Parsed air date.
    #[must_use]
    pub fn aired_on(&self) -> Option<NaiveDate> {
        parse_date(&self.air_date)
    }
}

impl Bind for Episode {
    fn bind(&mut self, _client: &Weak<Requester>) {}
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_parse_tv_details_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/tv_1399.json");

        // Act
        let mut show: TvShow = serde_json::from_str(json).unwrap();
        show.bind(&Weak::new());

        // Assert
        assert_eq!(show.id, 1399);
        assert_eq!(show.name, "Game of Thrones");
        assert_eq!(show.number_of_seasons, 8);
        assert_eq!(show.networks[0].name, "HBO");
        assert_eq!(show.created_by.len(), 2);
        assert!(!show.in_production);

        let seasons = show.seasons.get().unwrap();
        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[1].season_number, 1);
        assert_eq!(seasons[1].number_of_episodes(), 10);
        assert!(seasons.iter().all(|s| s.tv_show_id == 1399));

        assert_eq!(show.keywords.get().unwrap().results[0].name, "based on novel or book");
        assert!(show.images.is_loaded());
        assert!(!show.credits.is_loaded());
    }

    #[test]
    fn test_search_result_show_has_lazy_fields_unloaded() {
        // Arrange
        let json = r#"{"id":1399,"name":"Game of Thrones","genre_ids":[10765,18],"origin_country":["US"]}"#;

        // Act
        let show: TvShow = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(show.genre_ids, vec![10765, 18]);
        assert_eq!(show.origin_country, ["US"]);
        assert!(!show.genres.is_loaded());
        assert!(!show.seasons.is_loaded());
        assert_eq!(show.first_air_date, "");
    }

    #[test]
    fn test_parse_season_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/tv_1399_season_1.json");

        // Act
        let mut season: Season = serde_json::from_str(json).unwrap();
        season.fill_tv_show_id(1399);

        // Assert
        assert_eq!(season.internal_id.as_deref(), Some("5256c89f19c2956ff6046d47"));
        assert_eq!(season.season_number, 1);
        assert_eq!(season.tv_show_id, 1399);
        assert_eq!(season.number_of_episodes(), 2);
        let second = season.episode(2).unwrap();
        assert_eq!(second.name, "The Kingsroad");
        assert_eq!(second.tv_show_id, 1399);
        assert!(season.episode(11).is_none());
    }

    #[test]
    fn test_parse_episode_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/tv_1399_s1_e1.json");

        // Act
        let episode: Episode = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(episode.id, 63_056);
        assert_eq!(episode.name, "Winter Is Coming");
        assert_eq!(episode.episode_number, 1);
        assert_eq!(episode.runtime, Some(62));
        assert_eq!(episode.crew[0].job, "Director");
        assert_eq!(episode.guest_stars[0].character, "Robert Baratheon");
        assert_eq!(episode.aired_on(), NaiveDate::from_ymd_opt(2011, 4, 17));
        assert_eq!(episode.images.as_ref().unwrap().stills.len(), 1);
    }

    #[test]
    fn test_show_id_alias_from_find_results() {
        // Arrange
        let json = r#"{"id":63056,"show_id":1399,"name":"Winter Is Coming","season_number":1,"episode_number":1}"#;

        // Act
        let episode: Episode = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(episode.tv_show_id, 1399);
    }

    #[test]
    fn test_fill_tv_show_id_keeps_existing() {
        // Arrange
        let json = r#"{"id":3624,"show_id":1399,"episodes":[{"id":1,"episode_number":1}]}"#;
        let mut season: Season = serde_json::from_str(json).unwrap();

        // Act
        season.fill_tv_show_id(42);

        // Assert
        assert_eq!(season.tv_show_id, 1399);
        assert_eq!(season.episodes[0].tv_show_id, 1399);
    }

    #[test]
    fn test_bind_shares_season_parent_with_episodes() {
        // Arrange
        let json = r#"{"id":3624,"show_id":1399,"episodes":[
            {"id":1,"episode_number":1},
            {"id":2,"show_id":7,"episode_number":2}]}"#;
        let mut season: Season = serde_json::from_str(json).unwrap();

        // Act
        season.bind(&Weak::new());

        // Assert
        assert_eq!(season.episodes[0].tv_show_id, 1399);
        assert_eq!(season.episodes[1].tv_show_id, 7);
    }

    #[test]
    fn test_bind_without_parent_leaves_episodes_unset() {
        // Arrange
        let json = r#"{"id":3624,"episodes":[{"id":1,"episode_number":1}]}"#;
        let mut season: Season = serde_json::from_str(json).unwrap();

        // Act
        season.bind(&Weak::new());

        // Assert
        assert_eq!(season.tv_show_id, 0);
        assert_eq!(season.episodes[0].tv_show_id, 0);
    }
}
