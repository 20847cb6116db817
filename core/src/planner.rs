//! Orders query terms so intersection starts from the rarest one.

use crate::index::{DocId, InvertedIndex};
use std::collections::HashSet;

/// A query term resolved against the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedTerm<'a> {
    pub term: &'a str,
    pub postings: &'a [DocId],
}

/// Planner output.
///
/// `NoMatch` is the short-circuit for a term the index has never seen: the
/// conjunction is empty whatever the other terms are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan<'a> {
    NoMatch,
    /// Distinct terms, ascending by postings length. Ties keep query order.
    Terms(Vec<PlannedTerm<'a>>),
}

impl QueryPlan<'_> {
    pub fn is_no_match(&self) -> bool { matches!(self, QueryPlan::NoMatch) }

    /// Terms in planned order; empty for `NoMatch`.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        let planned: &[PlannedTerm<'_>] = match self {
            QueryPlan::NoMatch => &[],
            QueryPlan::Terms(t) => t,
        };
        planned.iter().map(|p| p.term)
    }
}

/// Resolve every term against `index` and sort ascending by postings length.
pub fn order_by_selectivity<'a, S>(terms: &'a [S], index: &'a InvertedIndex) -> QueryPlan<'a>
where
    S: AsRef<str>,
{
    let mut seen: HashSet<&str> = HashSet::with_capacity(terms.len());
    let mut planned = Vec::with_capacity(terms.len());
    for term in terms {
        let term = term.as_ref();
        if !seen.insert(term) {
            continue;
        }
        match index.postings(term) {
            Some(postings) => planned.push(PlannedTerm { term, postings }),
            None => {
                tracing::debug!(term, "query term not in index");
                return QueryPlan::NoMatch;
            }
        }
    }
    planned.sort_by_key(|p| p.postings.len());
    QueryPlan::Terms(planned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InvertedIndex {
        // a -> [0, 1], b -> [1, 2, 3], c -> [4]
        InvertedIndex::from_tokens(vec![
            vec!["a"],
            vec!["a", "b"],
            vec!["b"],
            vec!["b"],
            vec!["c"],
        ])
    }

    #[test]
    fn sorts_by_num_postings() {
        let index = sample();
        let plan = order_by_selectivity(&["a", "b", "c"], &index);
        assert_eq!(plan.terms().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn missing_term_is_no_match() {
        let index = sample();
        assert!(order_by_selectivity(&["a", "zzz", "b"], &index).is_no_match());
    }

    #[test]
    fn repeated_terms_planned_once() {
        let index = sample();
        let plan = order_by_selectivity(&["b", "a", "b"], &index);
        assert_eq!(plan.terms().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn empty_query_plans_nothing() {
        let index = sample();
        let terms: [&str; 0] = [];
        assert_eq!(order_by_selectivity(&terms, &index), QueryPlan::Terms(vec![]));
    }

    #[test]
    fn ties_are_unordered() {
        let index = InvertedIndex::from_tokens(vec![vec!["x", "y"], vec!["z", "x", "y"]]);
        let plan = order_by_selectivity(&["x", "z", "y"], &index);
        let terms: Vec<&str> = plan.terms().collect();
        assert_eq!(terms[0], "z");
        let mut rest = terms[1..].to_vec();
        rest.sort();
        assert_eq!(rest, vec!["x", "y"]);
    }
}
