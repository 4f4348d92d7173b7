//! Product identifiers.
//!
//! Product ids are opaque, stable strings. Seeded products use short numeric
//! ids (`"1"`, `"2"`, ...); products created from the admin dashboard get
//! wall-clock derived ids from [`ProductIdGenerator`].

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a product in the catalog.
///
/// A product's id never changes once assigned, and it is also the identity of
/// the product's line in a cart.
///
/// ```rust
/// use berrima_core::ProductId;
///
/// let id = ProductId::from("3");
/// assert_eq!(id.as_str(), "3");
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// Issues fresh product ids for newly created products.
///
/// Ids are the current Unix time in milliseconds. Two creations within the
/// same millisecond (or a clock that steps backwards) would collide, so every
/// issued value is bumped to be strictly greater than the previous one and to
/// skip any id the caller reports as taken.
#[derive(Debug, Clone, Default)]
pub struct ProductIdGenerator {
    last: i64,
}

impl ProductIdGenerator {
    /// Create a generator that has not issued any id yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Issue the next id based on the wall clock.
    ///
    /// `taken` reports whether an id is already in use.
    pub fn next_id(&mut self, taken: impl Fn(&ProductId) -> bool) -> ProductId {
        self.next_at(chrono::Utc::now().timestamp_millis(), taken)
    }

    /// Issue the next id as if the clock read `now_millis`.
    pub fn next_at(&mut self, now_millis: i64, taken: impl Fn(&ProductId) -> bool) -> ProductId {
        let mut candidate = now_millis.max(self.last.saturating_add(1));
        loop {
            let id = ProductId::new(candidate.to_string());
            if !taken(&id) {
                self.last = candidate;
                return id;
            }
            candidate = candidate.saturating_add(1);
        }
    }
}
