use boolsearch_core::{build_index, search, tokenize, DocId};

const DOCS: [&str; 3] = ["A rose is a rose", "A violet is blue", "Roses are red"];

#[test]
fn tokenizes_example_corpus() {
    let tokens: Vec<Vec<String>> = DOCS.iter().map(|d| tokenize(d)).collect();
    assert_eq!(tokens[0], vec!["a", "rose", "is", "a", "rose"]);
    assert_eq!(tokens[1], vec!["a", "violet", "is", "blue"]);
    assert_eq!(tokens[2], vec!["roses", "are", "red"]);
}

#[test]
fn index_entries_for_example_corpus() {
    let index = build_index(DOCS);
    assert_eq!(index.postings("a"), Some(&[0, 1][..]));
    assert_eq!(index.postings("rose"), Some(&[0][..]));
    assert_eq!(index.postings("is"), Some(&[0, 1][..]));
    assert_eq!(index.postings("roses"), Some(&[2][..]));
}

#[test]
fn conjunctive_queries_on_example_corpus() {
    let index = build_index(DOCS);
    assert_eq!(search(&index, "a is"), vec![0, 1]);
    assert_eq!(search(&index, "rose blue"), Vec::<DocId>::new());
    assert_eq!(search(&index, ""), Vec::<DocId>::new());
    assert_eq!(search(&index, "RED roses?"), vec![2]);
}

#[test]
fn third_term_removes_pairwise_matches() {
    // "x" and "y" are the rarest terms and co-occur only in docs 0 and 1,
    // neither of which contains "z".
    let index = build_index([
        "x y", "x y", "z", "z", "z", "z y", "z x",
    ]);
    assert_eq!(index.document_frequency("x"), 3);
    assert_eq!(index.document_frequency("y"), 3);
    assert_eq!(index.document_frequency("z"), 5);
    assert_eq!(search(&index, "x y"), vec![0, 1]);
    assert!(search(&index, "x y z").is_empty());
    assert!(search(&index, "z y x").is_empty());
}

#[test]
fn many_terms_fold_to_common_document() {
    let index = build_index([
        "one two three four five",
        "one two three four",
        "one two three",
        "one two",
        "five four three two one",
    ]);
    assert_eq!(search(&index, "five four three two one"), vec![0, 4]);
    assert_eq!(search(&index, "one two three"), vec![0, 1, 2, 4]);
}
