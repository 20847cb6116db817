use crate::index::{DocId, InvertedIndex};
use crate::planner::{order_by_selectivity, QueryPlan};
use crate::postings::intersect;
use crate::tokenizer::tokenize;

/// Answer a conjunctive query: ascending ids of documents containing every query term.
pub fn search(index: &InvertedIndex, query: &str) -> Vec<DocId> {
    search_terms(index, &tokenize(query))
}

/// Same as [`search`] for a query that is already tokenized.
pub fn search_terms<S: AsRef<str>>(index: &InvertedIndex, terms: &[S]) -> Vec<DocId> {
    let planned = match order_by_selectivity(terms, index) {
        QueryPlan::NoMatch => return Vec::new(),
        QueryPlan::Terms(planned) => planned,
    };
    let mut remaining = planned.into_iter();
    let mut result = match remaining.next() {
        Some(rarest) => rarest.postings.to_vec(),
        None => return Vec::new(),
    };
    for next in remaining {
        if result.is_empty() {
            break;
        }
        result = intersect(&result, next.postings);
        tracing::debug!(term = next.term, remaining = result.len(), "folded term");
    }
    if result.is_empty() {
        tracing::debug!("conjunction is empty");
    }
    result
}
