//! `TmdbClient` - TMDB API client implementation.

use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use crate::error::{Result, TmdbError};
use crate::lazy::Bind;
use crate::request::{append_to_response, build_request_url, default_base_url};
use crate::throttle::Throttle;
use crate::types::{Configuration, Page};

/// Language sent when the builder is given none.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Maximum number of retries for HTTP 429 responses.
const MAX_RETRIES: u32 = 3;

/// Backoff duration between retries.
const RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// Error body returned by TMDB on non-success statuses.
#[derive(Debug, Deserialize)]
struct TmdbErrorResponse {
    status_code: u32,
    status_message: String,
}

/// Issues authenticated GET requests and decodes the JSON body.
///
/// Shared by every clone of a [`TmdbClient`]; models keep a `Weak`
/// reference to it for lazy completion.
pub(crate) struct Requester {
    http_client: Client,
    base_url: Url,
    api_key: String,
    language: String,
    throttle: Mutex<Throttle>,
}

impl fmt::Debug for Requester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requester")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Requester {
    /// Sends `GET {base}{path}?api_key=..&language=..&{extra}` and decodes
    /// the body. Retries up to `MAX_RETRIES` times on HTTP 429.
    #[instrument(skip_all)]
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&str, String)],
    ) -> Result<T> {
        self.throttle.lock().await.acquire().await;

        let url = build_request_url(&self.base_url, path, &self.api_key, &self.language, extra)?;

        let mut retries = 0u32;
        loop {
            tracing::debug!(path, language = %self.language, "TMDB API request");

            let response = self
                .http_client
                .get(url.clone())
                .send()
                .await
                .map_err(|source| TmdbError::Transport {
                    path: String::from(path),
                    source,
                })?;

            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                retries = retries.saturating_add(1);
                if retries > MAX_RETRIES {
                    return Err(TmdbError::RateLimited {
                        path: String::from(path),
                        retries: MAX_RETRIES,
                    });
                }
                tracing::warn!(
                    path,
                    retry = retries,
                    max_retries = MAX_RETRIES,
                    "TMDB API rate limited (429). Retrying..."
                );
                tokio::time::sleep(RETRY_BACKOFF.saturating_mul(retries)).await;
                self.throttle.lock().await.acquire().await;
                continue;
            }

            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| String::from("<failed to read body>"));
                return Err(
                    match serde_json::from_str::<TmdbErrorResponse>(&body) {
                        Ok(error_response) => TmdbError::Status {
                            status,
                            code: Some(error_response.status_code),
                            message: error_response.status_message,
                        },
                        Err(_) => TmdbError::Status {
                            status,
                            code: None,
                            message: body,
                        },
                    },
                );
            }

            let body = response
                .text()
                .await
                .map_err(|source| TmdbError::Transport {
                    path: String::from(path),
                    source,
                })?;
            return serde_json::from_str(&body).map_err(|source| TmdbError::Decode {
                path: String::from(path),
                source,
            });
        }
    }
}

/// TMDB API client.
///
/// Cheap to clone; clones share the HTTP connection pool, the request
/// throttle and the cached [`Configuration`].
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    inner: Arc<Requester>,
    configuration: Arc<Configuration>,
    secure: bool,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    api_key: Option<String>,
    language: Option<String>,
    secure: bool,
    base_url: Option<Url>,
    user_agent: Option<String>,
    min_interval: Option<Duration>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            api_key: None,
            language: None,
            secure: true,
            base_url: None,
            user_agent: None,
            min_interval: None,
        }
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the response language (default: `en`).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Chooses between the HTTPS and plain-HTTP endpoints (default: HTTPS).
    ///
    /// Also selects which image base URL [`TmdbClient::image_url`] returns.
    #[must_use]
    pub const fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (default: `tmdbkit/{version}`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the minimum request interval (default: 25ms).
    #[must_use]
    pub const fn min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = Some(interval);
        self
    }

    /// Builds the client and loads the server-side configuration.
    ///
    /// # Errors
    ///
    /// - [`TmdbError::MissingField`] if `api_key` is not set.
    /// - [`TmdbError::HttpClient`] if `reqwest::Client` build fails.
    /// - [`TmdbError::Initialization`] if the `configuration` request fails.
    /// - [`TmdbError::EmptyConfiguration`] if it carries no image base URL.
    pub async fn build(self) -> Result<TmdbClient> {
        let api_key = self.api_key.ok_or(TmdbError::MissingField("api_key"))?;
        let language = self
            .language
            .unwrap_or_else(|| String::from(DEFAULT_LANGUAGE));
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("tmdbkit/{}", env!("CARGO_PKG_VERSION")));

        let base_url = match self.base_url {
            Some(url) => url,
            None => default_base_url(self.secure)?,
        };

        let throttle = self.min_interval.map_or_else(Throttle::default, Throttle::new);

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .map_err(TmdbError::HttpClient)?;

        let inner = Arc::new(Requester {
            http_client,
            base_url,
            api_key,
            language,
            throttle: Mutex::new(throttle),
        });

        let configuration: Configuration = inner
            .get_json("configuration", &[])
            .await
            .map_err(|err| TmdbError::Initialization(Box::new(err)))?;
        if configuration.is_empty() {
            return Err(TmdbError::EmptyConfiguration);
        }
        tracing::debug!(
            image_base_url = configuration.image_base_url(self.secure),
            "TMDB configuration loaded"
        );

        Ok(TmdbClient {
            inner,
            configuration: Arc::new(configuration),
            secure: self.secure,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Server-side configuration fetched at build time.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Image base URL joined with `size`, e.g. `https://image.tmdb.org/t/p/w185`.
    #[must_use]
    pub fn image_url(&self, size: &str) -> String {
        format!("{}{size}", self.configuration.image_base_url(self.secure))
    }

    /// Response language sent with every request.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.inner.language
    }

    /// Whether HTTPS URLs are preferred.
    #[must_use]
    pub const fn is_secure(&self) -> bool {
        self.secure
    }

    /// Fetches `movie/{id}[/{option}]` and decodes it as `T`.
    ///
    /// `append` of `None` requests nothing extra. The result is not bound
    /// to the client, so any [`Lazy`](crate::Lazy) field it holds stays
    /// unfillable.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn movie_info<T: DeserializeOwned>(
        &self,
        id: u64,
        option: Option<&str>,
        append: Option<&[&str]>,
    ) -> Result<T> {
        let path = option.map_or_else(
            || format!("movie/{id}"),
            |option| format!("movie/{id}/{option}"),
        );
        let extra: Vec<(&str, String)> = append
            .and_then(append_to_response)
            .into_iter()
            .collect();
        self.inner.get_json(&path, &extra).await
    }

    /// Fetches and decodes a single model, binding it to this client.
    pub(crate) async fn fetch<T: DeserializeOwned + Bind>(
        &self,
        path: &str,
        extra: &[(&str, String)],
    ) -> Result<T> {
        let mut value: T = self.inner.get_json(path, extra).await?;
        value.bind(&self.downgrade());
        Ok(value)
    }

    /// Fetches a paged list and returns its `results`, in order.
    pub(crate) async fn fetch_results<T: DeserializeOwned + Bind>(
        &self,
        path: &str,
        extra: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let page: Page<T> = self.inner.get_json(path, extra).await?;
        let mut results = page.results;
        results.bind(&self.downgrade());
        Ok(results)
    }

    fn downgrade(&self) -> Weak<Requester> {
        Arc::downgrade(&self.inner)
    }
}
