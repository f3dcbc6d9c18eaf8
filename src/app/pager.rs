//! Pagination engine: slice arithmetic over the current match set.
//!
//! Pages are revealed cumulatively: `page_count` pages of `page_size` records
//! are visible at any time, and revealing appends exactly one more page. The
//! functions here are pure; the controller owns `page_count` itself.

/// Returns the records currently visible: `matches[0 .. min(len, page_count * page_size)]`.
///
/// Used for full re-renders. `page_count` is expected to be ≥ 1; the bounds
/// math saturates, so a degenerate `page_size` of 0 yields an empty slice
/// rather than panicking.
#[must_use]
pub fn visible_slice<T>(matches: &[T], page_size: usize, page_count: usize) -> &[T] {
    let end = matches.len().min(page_count.saturating_mul(page_size));
    &matches[..end]
}

/// Returns exactly the next page to reveal: `matches[page_count * page_size ..]`,
/// capped at one page.
///
/// Used for incremental appends. May be shorter than `page_size`, and is
/// empty when everything is already revealed.
#[must_use]
pub fn next_page_slice<T>(matches: &[T], page_size: usize, page_count: usize) -> &[T] {
    let start = matches.len().min(page_count.saturating_mul(page_size));
    let end = matches
        .len()
        .min(page_count.saturating_add(1).saturating_mul(page_size));
    &matches[start..end]
}

/// Returns how many records remain beyond the revealed pages.
///
/// The "show more" affordance is disabled iff this returns 0.
#[must_use]
pub fn remaining_count<T>(matches: &[T], page_size: usize, page_count: usize) -> usize {
    matches
        .len()
        .saturating_sub(page_count.saturating_mul(page_size))
}
