//! Lazy completion of fields missing from list and search responses.
//!
//! A [`Lazy`] is filled at decode time when the response carried the
//! field. Otherwise the owning model fills it on first access through a
//! [`Backfill`], which holds only a weak reference to the client.

use std::fmt;
use std::future::Future;
use std::sync::{Arc, Weak};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tokio::sync::OnceCell;

use crate::client::Requester;
use crate::error::{Result, TmdbError};

/// A field that is either loaded or fetched on first access.
///
/// Concurrent first accesses are serialized: exactly one backfill request
/// is issued and every caller observes its result.
pub struct Lazy<T> {
    cell: OnceCell<T>,
}

impl<T> Lazy<T> {
    /// Creates an unloaded cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Creates a cell that is already loaded.
    #[must_use]
    pub fn loaded(value: T) -> Self {
        Self {
            cell: OnceCell::new_with(Some(value)),
        }
    }

    /// Returns the value if it is loaded, without any I/O.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Returns `true` if reading the field will not hit the network.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    pub(crate) fn get_mut(&mut self) -> Option<&mut T> {
        self.cell.get_mut()
    }

    /// Returns the value, running `fill` first if the cell is empty.
    ///
    /// A failed `fill` leaves the cell empty so a later access retries.
    pub(crate) async fn get_or_fill<F, Fut>(&self, fill: F) -> Result<&T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.cell.get_or_try_init(fill).await
    }
}

impl<T> Default for Lazy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Loaded").field(value).finish(),
            None => f.write_str("NotLoaded"),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Lazy<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<T>::deserialize(deserializer)?;
        Ok(Self {
            cell: OnceCell::new_with(value),
        })
    }
}

/// Where a model goes to complete its lazy fields.
#[derive(Debug, Clone, Default)]
pub(crate) struct Backfill {
    client: Weak<Requester>,
    resource: String,
}

impl Backfill {
    pub(crate) fn new(client: &Weak<Requester>, resource: String) -> Self {
        Self {
            client: Weak::clone(client),
            resource,
        }
    }

    /// Fetches `{resource}[/{option}]`.
    ///
    /// With `key`, only that top-level field of the response is decoded.
    ///
    /// # Errors
    ///
    /// [`TmdbError::Detached`] if the client is gone, otherwise the
    /// transport or decode error of the request.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        option: Option<&str>,
        key: Option<&str>,
    ) -> Result<T> {
        let client: Arc<Requester> = self.client.upgrade().ok_or(TmdbError::Detached)?;
        let path = option.map_or_else(
            || self.resource.clone(),
            |option| format!("{}/{option}", self.resource),
        );
        tracing::debug!(%path, key, "lazy backfill");

        let Some(key) = key else {
            return client.get_json(&path, &[]).await;
        };

        let mut body: serde_json::Value = client.get_json(&path, &[]).await?;
        let field = body
            .get_mut(key)
            .map_or(serde_json::Value::Null, serde_json::Value::take);
        serde_json::from_value(field).map_err(|source| TmdbError::Decode { path, source })
    }

    /// Like [`Backfill::fetch`], binding the decoded models to the same client.
    pub(crate) async fn fetch_bound<T: DeserializeOwned + Bind>(
        &self,
        option: Option<&str>,
        key: Option<&str>,
    ) -> Result<T> {
        let mut value: T = self.fetch(option, key).await?;
        value.bind(&self.client);
        Ok(value)
    }
}

/// Attaches decoded models to the client that produced them.
pub(crate) trait Bind {
    fn bind(&mut self, client: &Weak<Requester>);
}

impl<T: Bind> Bind for Vec<T> {
    fn bind(&mut self, client: &Weak<Requester>) {
        for item in self {
            item.bind(client);
        }
    }
}

impl<T: Bind> Bind for Option<T> {
    fn bind(&mut self, client: &Weak<Requester>) {
        if let Some(item) = self {
            item.bind(client);
        }
    }
}
