//! Boolean (AND) document retrieval over an in-memory inverted index.
//!
//! ```
//! use boolsearch_core::{build_index, search};
//!
//! let index = build_index(["A rose is a rose", "A violet is blue", "Roses are red"]);
//! assert_eq!(search(&index, "a is"), vec![0, 1]);
//! assert!(search(&index, "rose blue").is_empty());
//! ```

pub mod index;
pub mod planner;
pub mod postings;
pub mod search;
pub mod tokenizer;

pub use index::{build_index, DocId, IndexStats, InvertedIndex};
pub use planner::{order_by_selectivity, PlannedTerm, QueryPlan};
pub use postings::intersect;
pub use search::{search, search_terms};
pub use tokenizer::tokenize;
