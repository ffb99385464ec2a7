//! Free-text cleanup.

/// Collapse internal whitespace runs to single spaces and trim the ends.
pub fn clean_term(term: &str) -> String {
    term.split_whitespace().collect::<Vec<_>>().join(" ")
}
