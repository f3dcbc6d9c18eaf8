//! Filter engine: pure predicate evaluation over the catalog.
//!
//! This module defines [`FilterCriteria`] and the stable [`filter`] function.
//! All permissive-fallback policy for raw form input lives in one place,
//! [`FilterCriteria::from_form`]: empty or sentinel selector values become
//! [`SelectorChoice::Any`], and a whitespace-only title query matches
//! everything. The predicates themselves never error.

use crate::domain::Book;

/// A selector field's constraint: either the "any" sentinel or a concrete id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorChoice {
    /// No constraint; every record passes this predicate.
    Any,
    /// Match only records referencing this id.
    Id(String),
}

impl SelectorChoice {
    /// Builds a choice from a raw form value.
    ///
    /// Empty, whitespace-only, and the literal `"any"` sentinel all mean
    /// "no constraint"; anything else is taken as an id verbatim. Unknown ids
    /// are not rejected here — they simply match nothing.
    #[must_use]
    pub fn from_form_value(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "any" {
            Self::Any
        } else {
            Self::Id(trimmed.to_string())
        }
    }
}

/// A single search request's title/author/genre constraints.
///
/// Constructed fresh per search submission and discarded after use. The
/// three predicates are conjunctive; there is no OR-mode and no ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring to look for in titles; empty matches all.
    pub title_query: String,
    /// Author constraint.
    pub author: SelectorChoice,
    /// Genre constraint.
    pub genre: SelectorChoice,
}

impl FilterCriteria {
    /// The criteria that matches every record.
    #[must_use]
    pub fn match_all() -> Self {
        Self {
            title_query: String::new(),
            author: SelectorChoice::Any,
            genre: SelectorChoice::Any,
        }
    }

    /// Builds criteria from raw form field values with permissive defaults.
    ///
    /// A whitespace-only title is normalized to empty (match all); the
    /// selector fields go through [`SelectorChoice::from_form_value`].
    #[must_use]
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        let title_query = if title.trim().is_empty() {
            String::new()
        } else {
            title.to_string()
        };

        Self {
            title_query,
            author: SelectorChoice::from_form_value(author),
            genre: SelectorChoice::from_form_value(genre),
        }
    }

    /// Returns true iff the book satisfies all three predicates.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        let genre_match = match &self.genre {
            SelectorChoice::Any => true,
            SelectorChoice::Id(id) => book.genres.iter().any(|g| g == id),
        };

        let title_match = self.title_query.is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.title_query.to_lowercase());

        let author_match = match &self.author {
            SelectorChoice::Any => true,
            SelectorChoice::Id(id) => &book.author == id,
        };

        genre_match && title_match && author_match
    }
}

/// Filters the catalog by the given criteria.
///
/// The result is an order-preserving subsequence of `books`: a stable filter,
/// no sort, no scoring. Pure and deterministic.
#[must_use]
pub fn filter(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    books.iter().filter(|b| criteria.matches(b)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genres: genres.iter().map(ToString::to_string).collect(),
            image: format!("https://example.com/{id}.jpg"),
            published: "1900-01-01T00:00:00+00:00".to_string(),
            description: String::new(),
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("b1", "Dune", "herbert", &["sf"]),
            book("b2", "Dune Messiah", "herbert", &["sf"]),
            book("b3", "Emma", "austen", &["romance"]),
            book("b4", "Persuasion", "austen", &["romance", "satire"]),
        ]
    }

    #[test]
    fn identity_criteria_returns_catalog_unchanged() {
        let books = shelf();
        let out = filter(&books, &FilterCriteria::match_all());
        assert_eq!(out, books);
    }

    #[test]
    fn title_matching_is_case_insensitive_substring() {
        let books = shelf();
        let out = filter(&books, &FilterCriteria::from_form("dUnE", "any", "any"));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, "b1");
        assert_eq!(out[1].id, "b2");

        let none = filter(&books, &FilterCriteria::from_form("dune iv", "any", "any"));
        assert!(none.is_empty());
    }

    #[test]
    fn predicates_are_conjunctive() {
        let books = shelf();
        let criteria = FilterCriteria::from_form("e", "austen", "satire");
        let out = filter(&books, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "b4");
        for b in &books {
            if out.iter().all(|m| m.id != b.id) {
                assert!(!criteria.matches(b));
            }
        }
    }

    #[test]
    fn result_preserves_catalog_order() {
        let books = shelf();
        let out = filter(&books, &FilterCriteria::from_form("", "any", "sf"));
        let ids: Vec<&str> = out.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2"]);
    }

    #[test]
    fn whitespace_title_and_sentinels_mean_match_all() {
        let books = shelf();
        let criteria = FilterCriteria::from_form("   ", " any ", "");
        assert_eq!(criteria, FilterCriteria::match_all());
        assert_eq!(filter(&books, &criteria).len(), books.len());
    }

    #[test]
    fn unknown_selector_ids_match_nothing() {
        let books = shelf();
        let out = filter(&books, &FilterCriteria::from_form("", "nobody", "any"));
        assert!(out.is_empty());
    }
}
