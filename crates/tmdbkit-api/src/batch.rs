//! Concurrent detail fetches for several IDs.

use futures::future::try_join_all;

use crate::api::LocalTmdbApi;
use crate::error::Result;
use crate::types::{Movie, TvShow};

/// Fetches `movie/{id}` for every ID with the default append set.
///
/// Requests run concurrently, still paced by the client throttle.
/// Results are in input order.
///
/// # Errors
///
/// Returns the first failing request's error.
pub async fn fetch_movies<C: LocalTmdbApi>(client: &C, ids: &[u64]) -> Result<Vec<Movie>> {
    try_join_all(ids.iter().map(|&id| client.get_movie(id, None))).await
}

/// Fetches `tv/{id}` for every ID with the default append set.
///
/// # Errors
///
/// Returns the first failing request's error.
pub async fn fetch_tv_shows<C: LocalTmdbApi>(client: &C, ids: &[u64]) -> Result<Vec<TvShow>> {
    try_join_all(ids.iter().map(|&id| client.get_tv_show(id, None))).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::tests::test_client;

    #[tokio::test]
    async fn test_fetch_movies_keeps_input_order() {
        // Arrange
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server).await;
        // The first ID answers last.
        Mock::given(method("GET"))
            .and(path("/3/movie/603"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"id":603,"title":"The Matrix"}"#)
                    .set_delay(Duration::from_millis(150)),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/movie/550"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"id":550,"title":"Fight Club"}"#),
            )
            .mount(&mock_server)
            .await;

        // Act
        let movies = fetch_movies(&client, &[603, 550]).await.unwrap();

        // Assert
        let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, [603, 550]);
    }

    #[tokio::test]
    async fn test_fetch_movies_empty_input() {
        // Arrange
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server).await;

        // Act
        let movies = fetch_movies(&client, &[]).await.unwrap();

        // Assert
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_tv_shows_fails_on_any_error() {
        // Arrange
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server).await;
        Mock::given(method("GET"))
            .and(path("/3/tv/1399"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"id":1399,"name":"Game of Thrones"}"#),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/tv/0"))
            .respond_with(ResponseTemplate::new(404).set_body_string(
                r#"{"status_code":34,"status_message":"The resource you requested could not be found."}"#,
            ))
            .mount(&mock_server)
            .await;

        // Act
        let result = fetch_tv_shows(&client, &[1399, 0]).await;

        // Assert
        assert!(result.unwrap_err().is_not_found());
    }
}
