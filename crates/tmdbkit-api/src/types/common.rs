//! Nested records shared by several models.

use serde::Deserialize;

use super::null_default;

/// Genre entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
}

/// Keyword entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Keyword {
    /// Keyword ID.
    pub id: u64,
    /// Keyword text.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
}

/// Keyword list.
///
/// TV responses use `results`, movie responses use `keywords`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Keywords {
    /// Keywords in response order.
    #[serde(default, alias = "keywords", deserialize_with = "null_default")]
    pub results: Vec<Keyword>,
}

/// One image file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Image {
    /// Path to append to the image base URL and size.
    #[serde(deserialize_with = "null_default")]
    pub file_path: String,
    /// Width in pixels.
    #[serde(deserialize_with = "null_default")]
    pub width: u32,
    /// Height in pixels.
    #[serde(deserialize_with = "null_default")]
    pub height: u32,
    /// Width / height.
    #[serde(deserialize_with = "null_default")]
    pub aspect_ratio: f64,
    /// Language of any text in the image.
    pub iso_639_1: Option<String>,
    /// Vote average.
    #[serde(deserialize_with = "null_default")]
    pub vote_average: f64,
    /// Vote count.
    #[serde(deserialize_with = "null_default")]
    pub vote_count: u32,
}

/// Image sets for a resource; unused kinds stay empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Images {
    /// Backdrop images.
    #[serde(deserialize_with = "null_default")]
    pub backdrops: Vec<Image>,
    /// Poster images.
    #[serde(deserialize_with = "null_default")]
    pub posters: Vec<Image>,
    /// Logo images.
    #[serde(deserialize_with = "null_default")]
    pub logos: Vec<Image>,
    /// Person portraits.
    #[serde(deserialize_with = "null_default")]
    pub profiles: Vec<Image>,
    /// Episode stills.
    #[serde(deserialize_with = "null_default")]
    pub stills: Vec<Image>,
}

/// A cast credit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CastMember {
    /// Person ID.
    pub id: u64,
    /// Name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Character played.
    #[serde(default, deserialize_with = "null_default")]
    pub character: String,
    /// Credit ID.
    #[serde(default, deserialize_with = "null_default")]
    pub credit_id: String,
    /// Billing order.
    #[serde(default, deserialize_with = "null_default")]
    pub order: u32,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// A crew credit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrewMember {
    /// Person ID.
    pub id: u64,
    /// Name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Job title (e.g., "Director").
    #[serde(default, deserialize_with = "null_default")]
    pub job: String,
    /// Department.
    #[serde(default, deserialize_with = "null_default")]
    pub department: String,
    /// Credit ID.
    #[serde(default, deserialize_with = "null_default")]
    pub credit_id: String,
    /// Profile image path.
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Cast and crew of a movie or show.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Credits {
    /// Cast credits.
    #[serde(deserialize_with = "null_default")]
    pub cast: Vec<CastMember>,
    /// Crew credits.
    #[serde(deserialize_with = "null_default")]
    pub crew: Vec<CrewMember>,
}

impl Credits {
    /// Crew members with the given job, in response order.
    pub fn with_job<'a>(&'a self, job: &'a str) -> impl Iterator<Item = &'a CrewMember> + 'a {
        self.crew.iter().filter(move |member| member.job == job)
    }
}

/// A hosted trailer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Trailer {
    /// Name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Resolution label (e.g., "HD").
    #[serde(deserialize_with = "null_default")]
    pub size: String,
    /// Host-specific key, e.g. the YouTube video ID.
    #[serde(deserialize_with = "null_default")]
    pub source: String,
    /// Kind label (e.g., "Trailer", "Featurette").
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
}

/// Trailers grouped by host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Trailers {
    /// YouTube trailers.
    #[serde(deserialize_with = "null_default")]
    pub youtube: Vec<Trailer>,
    /// QuickTime trailers.
    #[serde(deserialize_with = "null_default")]
    pub quicktime: Vec<Trailer>,
}

impl Trailers {
    /// Source key of the first YouTube trailer.
    #[must_use]
    pub fn first_youtube_source(&self) -> Option<&str> {
        self.youtube.first().map(|trailer| trailer.source.as_str())
    }
}

/// Translated fields of one translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslationData {
    /// Movie title.
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    /// TV show name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Overview text.
    #[serde(deserialize_with = "null_default")]
    pub overview: String,
    /// Homepage URL.
    #[serde(deserialize_with = "null_default")]
    pub homepage: String,
    /// Tagline.
    #[serde(deserialize_with = "null_default")]
    pub tagline: String,
}

/// One available translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Translation {
    /// Country (ISO 3166-1).
    #[serde(deserialize_with = "null_default")]
    pub iso_3166_1: String,
    /// Language (ISO 639-1).
    #[serde(deserialize_with = "null_default")]
    pub iso_639_1: String,
    /// Native language name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// English language name.
    #[serde(deserialize_with = "null_default")]
    pub english_name: String,
    /// Translated fields, when the API sends them.
    pub data: Option<TranslationData>,
}

/// Translation list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Translations {
    /// Translations in response order.
    #[serde(deserialize_with = "null_default")]
    pub translations: Vec<Translation>,
}

impl Translations {
    /// Language codes in response order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.translations.iter().map(|t| t.iso_639_1.as_str())
    }
}

/// IDs of the same resource in other catalogues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExternalIds {
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// TheTVDB ID.
    pub tvdb_id: Option<u64>,
    /// Freebase MID.
    pub freebase_mid: Option<String>,
    /// Freebase ID.
    pub freebase_id: Option<String>,
    /// TVRage ID.
    pub tvrage_id: Option<u64>,
    /// Wikidata ID.
    pub wikidata_id: Option<String>,
    /// Facebook page.
    pub facebook_id: Option<String>,
    /// Instagram handle.
    pub instagram_id: Option<String>,
    /// Twitter handle.
    pub twitter_id: Option<String>,
}

/// Company reference embedded in other models.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanySummary {
    /// TMDB ID.
    pub id: u64,
    /// Name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Logo image path.
    #[serde(default)]
    pub logo_path: Option<String>,
    /// Origin country (ISO 3166-1).
    #[serde(default, deserialize_with = "null_default")]
    pub origin_country: String,
}

/// Collection reference embedded in a movie.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CollectionSummary {
    /// TMDB ID.
    pub id: u64,
    /// Name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// Broadcasting network of a TV show.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Network {
    /// TMDB ID.
    pub id: u64,
    /// Name.
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Logo image path.
    #[serde(default)]
    pub logo_path: Option<String>,
    /// Origin country (ISO 3166-1).
    #[serde(default, deserialize_with = "null_default")]
    pub origin_country: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_keywords_accepts_both_envelopes() {
        // Arrange & Act
        let tv: Keywords = serde_json::from_str(r#"{"results":[{"id":1,"name":"dragon"}]}"#).unwrap();
        let movie: Keywords =
            serde_json::from_str(r#"{"keywords":[{"id":2,"name":"soap"}]}"#).unwrap();

        // Assert
        assert_eq!(tv.results[0].name, "dragon");
        assert_eq!(movie.results[0].name, "soap");
    }

    #[test]
    fn test_credits_with_job() {
        // Arrange
        let credits: Credits = serde_json::from_str(
            r#"{"id":550,"cast":[],"crew":[
                {"id":7467,"name":"David Fincher","job":"Director","department":"Directing"},
                {"id":7474,"name":"Ross Grayson Bell","job":"Producer","department":"Production"}
            ]}"#,
        )
        .unwrap();

        // Act
        let directors: Vec<&str> = credits
            .with_job("Director")
            .map(|m| m.name.as_str())
            .collect();

        // Assert
        assert_eq!(directors, ["David Fincher"]);
    }

    #[test]
    fn test_trailers_first_youtube_source() {
        // Arrange
        let trailers: Trailers = serde_json::from_str(
            r#"{"quicktime":[],"youtube":[
                {"name":"Trailer 1","size":"HD","source":"SUXWAEX2jlg","type":"Trailer"},
                {"name":"Trailer 2","size":"HD","source":"BdJKm16Co6M","type":"Trailer"}
            ]}"#,
        )
        .unwrap();
        let empty = Trailers::default();

        // Act & Assert
        assert_eq!(trailers.first_youtube_source(), Some("SUXWAEX2jlg"));
        assert_eq!(trailers.youtube[0].kind, "Trailer");
        assert!(empty.first_youtube_source().is_none());
    }

    #[test]
    fn test_image_null_fields_default() {
        // Arrange & Act
        let image: Image = serde_json::from_str(
            r#"{"file_path":"/a.jpg","width":1920,"height":1080,"iso_639_1":null,"vote_average":null}"#,
        )
        .unwrap();

        // Assert
        assert_eq!(image.file_path, "/a.jpg");
        assert!(image.iso_639_1.is_none());
        assert_eq!(image.vote_count, 0);
    }

    #[test]
    fn test_translations_languages() {
        // Arrange
        let translations: Translations = serde_json::from_str(
            r#"{"translations":[
                {"iso_3166_1":"US","iso_639_1":"en","name":"English","english_name":"English"},
                {"iso_3166_1":"DE","iso_639_1":"de","name":"Deutsch","english_name":"German",
                 "data":{"title":"Fight Club","overview":"Ein Ich-Erzähler"}}
            ]}"#,
        )
        .unwrap();

        // Act
        let langs: Vec<&str> = translations.languages().collect();

        // Assert
        assert_eq!(langs, ["en", "de"]);
        assert_eq!(
            translations.translations[1].data.as_ref().unwrap().title,
            "Fight Club"
        );
    }
}
