use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type DocId = u32;

/// Term -> ascending document ids. Built once from a fixed corpus, read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<DocId>>, // strictly ascending, one entry per document
    num_docs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub num_docs: u32,
    pub num_terms: usize,
    pub total_postings: usize,
    /// Term with the longest postings list and that list's length.
    pub longest: Option<(String, usize)>,
}

/// Tokenize every document and index it under its position in `documents`.
pub fn build_index<I, S>(documents: I) -> InvertedIndex
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    InvertedIndex::from_tokens(documents.into_iter().map(|d| tokenize(d.as_ref())))
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Build from per-document token sequences; document `i` of the iterator gets id `i`.
    ///
    /// A token repeated within one document records that document once.
    pub fn from_tokens<D, T>(documents: D) -> Self
    where
        D: IntoIterator<Item = T>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        let mut postings: HashMap<String, Vec<DocId>> = HashMap::new();
        let mut num_docs: u32 = 0;
        for tokens in documents {
            let doc_id = num_docs;
            num_docs += 1;
            for token in tokens {
                let list = postings.entry(token.into()).or_default();
                // documents arrive in ascending order, so a repeat can only be the tail
                if list.last() != Some(&doc_id) {
                    list.push(doc_id);
                }
            }
        }
        tracing::info!(num_docs, num_terms = postings.len(), "built inverted index");
        Self { postings, num_docs }
    }

    pub fn postings(&self, term: &str) -> Option<&[DocId]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    pub fn contains(&self, term: &str) -> bool { self.postings.contains_key(term) }

    /// Number of documents containing `term`; 0 when it was never indexed.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, Vec::len)
    }

    pub fn num_docs(&self) -> u32 { self.num_docs }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.postings.keys().map(String::as_str)
    }

    pub fn stats(&self) -> IndexStats {
        let total_postings = self.postings.values().map(Vec::len).sum();
        // ties on length resolve to the lexicographically smallest term
        let longest = self
            .postings
            .iter()
            .max_by(|a, b| a.1.len().cmp(&b.1.len()).then_with(|| b.0.cmp(a.0)))
            .map(|(term, list)| (term.clone(), list.len()));
        IndexStats { num_docs: self.num_docs, num_terms: self.postings.len(), total_postings, longest }
    }
}
