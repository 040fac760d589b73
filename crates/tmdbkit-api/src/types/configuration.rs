//! Response of the `configuration` endpoint.

use serde::Deserialize;

use super::null_default;

/// Server-side configuration, loaded once when the client is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Image hosting settings.
    pub images: ImageConfiguration,
    /// Keys reported by the change endpoints.
    #[serde(deserialize_with = "null_default")]
    pub change_keys: Vec<String>,
}

/// Image hosting settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageConfiguration {
    /// Plain-HTTP image base URL.
    #[serde(deserialize_with = "null_default")]
    pub base_url: String,
    /// HTTPS image base URL.
    #[serde(deserialize_with = "null_default")]
    pub secure_base_url: String,
    /// Valid backdrop sizes (e.g., "w300", "original").
    #[serde(deserialize_with = "null_default")]
    pub backdrop_sizes: Vec<String>,
    /// Valid logo sizes.
    #[serde(deserialize_with = "null_default")]
    pub logo_sizes: Vec<String>,
    /// Valid poster sizes.
    #[serde(deserialize_with = "null_default")]
    pub poster_sizes: Vec<String>,
    /// Valid profile sizes.
    #[serde(deserialize_with = "null_default")]
    pub profile_sizes: Vec<String>,
    /// Valid still sizes.
    #[serde(deserialize_with = "null_default")]
    pub still_sizes: Vec<String>,
}

impl Configuration {
    /// Returns `true` when neither image base URL is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.base_url.is_empty() && self.images.secure_base_url.is_empty()
    }

    /// Image base URL, preferring HTTPS when `secure` and available.
    #[must_use]
    pub fn image_base_url(&self, secure: bool) -> &str {
        if secure && !self.images.secure_base_url.is_empty() {
            &self.images.secure_base_url
        } else {
            &self.images.base_url
        }
    }

    /// Full URL of an image file at the given size.
    ///
    /// `size` is one of the `*_sizes` values, e.g. `w185` or `original`.
    #[must_use]
    pub fn image_url(&self, secure: bool, size: &str, file_path: &str) -> String {
        format!("{}{size}{file_path}", self.image_base_url(secure))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_configuration_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/configuration.json");

        // Act
        let config: Configuration = serde_json::from_str(json).unwrap();

        // Assert
        assert!(!config.is_empty());
        assert_eq!(config.images.base_url, "http://image.tmdb.org/t/p/");
        assert_eq!(config.images.secure_base_url, "https://image.tmdb.org/t/p/");
        assert!(config.images.poster_sizes.contains(&String::from("w185")));
        assert!(config.change_keys.contains(&String::from("title")));
    }

    #[test]
    fn test_empty_object_is_empty() {
        // Arrange & Act
        let config: Configuration = serde_json::from_str("{}").unwrap();

        // Assert
        assert!(config.is_empty());
    }

    #[test]
    fn test_image_base_url_prefers_secure() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/configuration.json");
        let config: Configuration = serde_json::from_str(json).unwrap();

        // Act & Assert
        assert_eq!(config.image_base_url(true), "https://image.tmdb.org/t/p/");
        assert_eq!(config.image_base_url(false), "http://image.tmdb.org/t/p/");
    }

    #[test]
    fn test_image_base_url_falls_back_to_plain() {
        // Arrange
        let config = Configuration {
            images: ImageConfiguration {
                base_url: String::from("http://img.example/"),
                ..ImageConfiguration::default()
            },
            change_keys: Vec::new(),
        };

        // Act & Assert
        assert_eq!(config.image_base_url(true), "http://img.example/");
    }

    #[test]
    fn test_image_url() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/configuration.json");
        let config: Configuration = serde_json::from_str(json).unwrap();

        // Act
        let url = config.image_url(true, "w500", "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg");

        // Assert
        assert_eq!(
            url,
            "https://image.tmdb.org/t/p/w500/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"
        );
    }
}
