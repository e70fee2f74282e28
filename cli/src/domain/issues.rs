//! Issue filtering shared by the CLI, REST, and JSON-RPC surfaces.
//!
//! Pure functions only. No I/O, no async.

use medic_common::{Category, Issue};

/// Keep issues whose category is in `categories`.
///
/// `None` or an empty list returns the input unchanged. Relative order is
/// preserved.
#[must_use]
pub fn filter_by_category(issues: Vec<Issue>, categories: Option<&[String]>) -> Vec<Issue> {
    let Some(categories) = categories.filter(|c| !c.is_empty()) else {
        return issues;
    };
    let wanted: Vec<Category> = categories.iter().map(|c| Category::from(c.as_str())).collect();
    issues
        .into_iter()
        .filter(|issue| wanted.contains(issue.category()))
        .collect()
}

/// Keep issues whose id is in `ids`. Same semantics as [`filter_by_category`].
#[must_use]
pub fn filter_by_id(issues: Vec<Issue>, ids: Option<&[String]>) -> Vec<Issue> {
    let Some(ids) = ids.filter(|i| !i.is_empty()) else {
        return issues;
    };
    issues
        .into_iter()
        .filter(|issue| ids.iter().any(|id| id == issue.id()))
        .collect()
}
