use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE: Regex = Regex::new(r"\w+").expect("valid regex");
}

/// Tokenize text into lower-cased runs of word characters (letters, digits, underscore).
///
/// Everything else, apostrophes included, is a separator and is dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    RE.find_iter(&lowered).map(|m| m.as_str().to_string()).collect()
}
