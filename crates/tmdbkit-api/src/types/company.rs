//! `Company` model.

use std::sync::Weak;

use serde::Deserialize;

use super::common::CompanySummary;
use super::movie::Movie;
use super::{lazy_results, null_default};
use crate::client::Requester;
use crate::error::Result;
use crate::lazy::{Backfill, Bind, Lazy};

/// A production company, from `company/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Company {
    /// TMDB company ID.
    pub id: u64,
    /// Name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Description.
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    /// Headquarters location.
    #[serde(default, deserialize_with = "null_default")]
    pub headquarters: String,
    /// Homepage URL.
    #[serde(default, deserialize_with = "null_default")]
    pub homepage: String,
    /// Logo image path.
    #[serde(default)]
    pub logo_path: Option<String>,
    /// Origin country (ISO 3166-1).
    #[serde(default, deserialize_with = "null_default")]
    pub origin_country: String,
    /// Parent company.
    #[serde(default)]
    pub parent_company: Option<CompanySummary>,
    /// First page of the company's movies (`append_to_response=movies`).
    #[serde(default, deserialize_with = "lazy_results")]
    pub movies: Lazy<Vec<Movie>>,
    #[serde(skip)]
    backfill: Backfill,
}

impl Company {
    /// Movies, fetching `company/{id}/movies` if needed.
    ///
    /// # Errors
    ///
    /// Returns the backfill request's error.
    pub async fn movies(&self) -> Result<&[Movie]> {
        let movies = self
            .movies
            .get_or_fill(|| self.backfill.fetch_bound(Some("movies"), Some("results")))
            .await?;
        Ok(movies.as_slice())
    }
}

impl Bind for Company {
    fn bind(&mut self, client: &Weak<Requester>) {
        self.backfill = Backfill::new(client, format!("company/{}", self.id));
        if let Some(movies) = self.movies.get_mut() {
            movies.bind(client);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[tokio::test]
    async fn test_parse_company_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/company_508.json");

        // Act
        let company: Company = serde_json::from_str(json).unwrap();
        let movies = company.movies().await.unwrap();

        // Assert
        assert_eq!(company.id, 508);
        assert_eq!(company.name, "Regency Enterprises");
        assert_eq!(company.headquarters, "Los Angeles, California, USA");
        assert!(company.parent_company.is_none());
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Fight Club");
    }

    #[test]
    fn test_company_without_movies() {
        // Arrange & Act
        let company: Company = serde_json::from_str(r#"{"id":1,"name":"Lucasfilm"}"#).unwrap();

        // Assert
        assert!(!company.movies.is_loaded());
        assert_eq!(company.description, "");
    }
}
