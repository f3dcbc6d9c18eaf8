//! Catalog store: the immutable book list and its lookup tables.
//!
//! The catalog is the leaf of the system: a fixed list of [`Book`] records
//! plus the author and genre id→name tables, loaded once at startup and
//! read-only afterwards. The plugin ships its catalog embedded as a JSON
//! document (the same way themes are embedded as TOML), so no I/O happens
//! after load.
//!
//! Table entries keep the document's own order; selector population relies on
//! that order and nothing here sorts.

use crate::domain::error::{BookstandError, Result};
use crate::domain::{Book, NamedEntry};
use serde::Deserialize;

/// On-disk shape of the catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    books: Vec<Book>,
    authors: Vec<NamedEntry>,
    genres: Vec<NamedEntry>,
}

/// The fixed collection of books available to filter and display.
///
/// Owns the book records exclusively; every other component reads them
/// through this type. Filtering never reorders: consumers receive books in
/// catalog order.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    authors: Vec<NamedEntry>,
    genres: Vec<NamedEntry>,
}

impl Catalog {
    /// Parses a catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`BookstandError::Catalog`] if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)
            .map_err(|e| BookstandError::Catalog(format!("failed to parse catalog: {e}")))?;

        tracing::debug!(
            book_count = doc.books.len(),
            author_count = doc.authors.len(),
            genre_count = doc.genres.len(),
            "catalog parsed"
        );

        Ok(Self {
            books: doc.books,
            authors: doc.authors,
            genres: doc.genres,
        })
    }

    /// Returns the catalog embedded in the plugin binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded document fails to parse (should never occur).
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_json_str(include_str!("../../data/catalog.json"))
            .expect("embedded catalog document should always parse")
    }

    /// All book records, in catalog order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Author table entries, in document order.
    #[must_use]
    pub fn authors(&self) -> &[NamedEntry] {
        &self.authors
    }

    /// Genre table entries, in document order.
    #[must_use]
    pub fn genres(&self) -> &[NamedEntry] {
        &self.genres
    }

    /// Looks up a book by exact id, first match in catalog order.
    ///
    /// Ids are assumed unique; if duplicates exist the earliest record wins.
    /// Returns `None` for an unknown id — callers treat that as a silent
    /// no-op, not an error.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Resolves an author id to its display name.
    #[must_use]
    pub fn author_name(&self, id: &str) -> Option<&str> {
        self.authors
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.name.as_str())
    }

    /// Resolves a genre id to its display name.
    #[must_use]
    pub fn genre_name(&self, id: &str) -> Option<&str> {
        self.genres
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.name.as_str())
    }

    /// Formats the detail subtitle for a book: `"{author} ({year})"`.
    ///
    /// Unknown author ids render as "Unknown"; an unparseable publication
    /// date drops the year rather than failing.
    #[must_use]
    pub fn subtitle_for(&self, book: &Book) -> String {
        let author = self.author_name(&book.author).unwrap_or("Unknown");
        match book.publication_year() {
            Some(year) => format!("{author} ({year})"),
            None => author.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "authors": [
            {"id": "a-herbert", "name": "Frank Herbert"},
            {"id": "a-asimov", "name": "Isaac Asimov"}
        ],
        "genres": [
            {"id": "g-sf", "name": "Science Fiction"}
        ],
        "books": [
            {
                "id": "b1",
                "title": "Dune",
                "author": "a-herbert",
                "genres": ["g-sf"],
                "image": "https://example.com/dune.jpg",
                "published": "1965-08-01T00:00:00+00:00",
                "description": "A desert planet."
            },
            {
                "id": "b2",
                "title": "Foundation",
                "author": "a-asimov",
                "genres": ["g-sf"],
                "image": "https://example.com/foundation.jpg",
                "published": "1951-06-01T00:00:00+00:00",
                "description": "A galactic empire falls."
            }
        ]
    }"#;

    #[test]
    fn parses_books_and_tables_in_document_order() {
        let catalog = Catalog::from_json_str(SMALL).unwrap();
        assert_eq!(catalog.books().len(), 2);
        assert_eq!(catalog.books()[0].title, "Dune");
        assert_eq!(catalog.authors()[0].name, "Frank Herbert");
        assert_eq!(catalog.authors()[1].name, "Isaac Asimov");
        assert_eq!(catalog.genres()[0].id, "g-sf");
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(Catalog::from_json_str("{not json").is_err());
        assert!(Catalog::from_json_str(r#"{"books": []}"#).is_err());
    }

    #[test]
    fn find_by_id_returns_first_match_only() {
        let catalog = Catalog::from_json_str(SMALL).unwrap();
        assert_eq!(catalog.find_by_id("b2").unwrap().title, "Foundation");
        assert!(catalog.find_by_id("nonexistent-id").is_none());
    }

    #[test]
    fn subtitle_includes_author_and_year() {
        let catalog = Catalog::from_json_str(SMALL).unwrap();
        let dune = catalog.find_by_id("b1").unwrap();
        assert_eq!(catalog.subtitle_for(dune), "Frank Herbert (1965)");
    }

    #[test]
    fn subtitle_falls_back_on_unknown_author_and_bad_date() {
        let catalog = Catalog::from_json_str(SMALL).unwrap();
        let mut stray = catalog.find_by_id("b1").unwrap().clone();
        stray.author = "a-nobody".to_string();
        stray.published = "someday".to_string();
        assert_eq!(catalog.subtitle_for(&stray), "Unknown");
    }

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::embedded();
        assert!(!catalog.books().is_empty());
        assert!(!catalog.authors().is_empty());
        assert!(!catalog.genres().is_empty());

        for book in catalog.books() {
            assert!(catalog.author_name(&book.author).is_some(), "dangling author id in {}", book.id);
            for genre in &book.genres {
                assert!(catalog.genre_name(genre).is_some(), "dangling genre id in {}", book.id);
            }
        }
    }
}
