//! Turn raw word-list input into trimmed word tokens.

/// Delimiters tried, in order, on a raw string. The first one present wins.
pub const DELIMITERS: [char; 3] = [',', '-', ' '];

/// Raw word-list input: either a delimited string or an already split list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordInput {
    Text(String),
    List(Vec<String>),
}

impl From<&str> for WordInput {
    fn from(s: &str) -> Self {
        WordInput::Text(s.to_string())
    }
}

impl From<String> for WordInput {
    fn from(s: String) -> Self {
        WordInput::Text(s)
    }
}

impl From<Vec<String>> for WordInput {
    fn from(words: Vec<String>) -> Self {
        WordInput::List(words)
    }
}

impl From<&[&str]> for WordInput {
    fn from(words: &[&str]) -> Self {
        WordInput::List(words.iter().map(|w| w.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for WordInput {
    fn from(words: [&str; N]) -> Self {
        WordInput::List(words.iter().map(|w| w.to_string()).collect())
    }
}

/// First delimiter from [`DELIMITERS`] that occurs in `s`.
pub fn detect_delimiter(s: &str) -> Option<char> {
    DELIMITERS.into_iter().find(|d| s.contains(*d))
}

/// Normalize input into at most `max_words` leading tokens, then split each on
/// `&` and `" and "`, trim, and drop empties.
///
/// Truncation happens before the `&`/`and` re-split, so the result can hold
/// more than `max_words` tokens when a kept token contained a conjunction.
pub fn tokenize(input: &WordInput, max_words: usize) -> Vec<String> {
    let raw: Vec<&str> = match input {
        WordInput::Text(s) => match detect_delimiter(s) {
            Some(d) => s.split(d).collect(),
            None => vec![s.as_str()],
        },
        WordInput::List(words) => words.iter().map(String::as_str).collect(),
    };

    raw.into_iter()
        .take(max_words)
        .flat_map(|w| w.split('&'))
        .flat_map(|w| w.split(" and "))
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}
