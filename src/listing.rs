//! # Listing Window
//!
//! Prefix filtering and cursor windowing applied after the vendor's
//! pagination has been fully exhausted, so vendor page boundaries never
//! leak to callers.

use crate::store::ListPage;

/// Select one page from the complete set of vault entry names.
///
/// Names are sorted, filtered to those starting with `prefix`, and a
/// `continue_at` resume point keeps only names at or after it (the cursor
/// names the first entry not yet returned, so resumption includes it).
/// With `limit: None` the whole remainder is returned and the cursor is
/// `None`; with `limit: Some(n)` at most `n` names are returned and the
/// cursor points at the next matching name, if any remain.
pub(crate) fn select_page(
    mut names: Vec<String>,
    prefix: &str,
    continue_at: Option<&str>,
    limit: Option<usize>,
) -> ListPage {
    names.sort_unstable();
    let mut matches: Vec<String> = names
        .into_iter()
        .filter(|name| name.starts_with(prefix))
        .filter(|name| continue_at.is_none_or(|cursor| name.as_str() >= cursor))
        .collect();

    match limit {
        Some(n) if n < matches.len() => {
            let continue_at = Some(matches[n].clone());
            matches.truncate(n);
            ListPage {
                names: matches,
                continue_at,
            }
        }
        _ => ListPage {
            names: matches,
            continue_at: None,
        },
    }
}
