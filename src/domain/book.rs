//! Book domain model.
//!
//! This module defines the core `Book` record and the `NamedEntry` lookup
//! entries used for the author and genre tables. Books are immutable for the
//! lifetime of the process: they are deserialized once from the catalog
//! document and only ever read afterwards.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// A single book record in the catalog.
///
/// Identity is the opaque `id` string; ids are assumed unique across the
/// catalog (lookups take the first match in catalog order). The `author`
/// field and every entry of `genres` are foreign keys into the catalog's
/// author and genre tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genres: Vec<String>,
    pub image: String,
    pub published: String,
    pub description: String,
}

impl Book {
    /// Returns the publication year parsed from the `published` timestamp.
    ///
    /// The timestamp is stored as an RFC 3339 string. Returns `None` if the
    /// string does not parse; callers fall back to omitting the year rather
    /// than surfacing an error.
    #[must_use]
    pub fn publication_year(&self) -> Option<i32> {
        chrono::DateTime::parse_from_rfc3339(&self.published)
            .ok()
            .map(|dt| dt.year())
    }
}

/// One `(id, name)` entry of the author or genre table.
///
/// Entries are kept in a `Vec` rather than a map so the catalog document's
/// own order is preserved for selector population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntry {
    pub id: String,
    pub name: String,
}
