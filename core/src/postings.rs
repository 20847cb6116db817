use crate::index::DocId;
use std::cmp::Ordering;

/// Intersect two ascending postings lists in one linear pass.
///
/// Both inputs must already be sorted ascending; this is not checked in release builds.
pub fn intersect(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    debug_assert!(is_ascending(a) && is_ascending(b), "postings must be sorted");
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
        }
    }
    out
}

fn is_ascending(ids: &[DocId]) -> bool {
    ids.windows(2).all(|w| w[0] <= w[1])
}
