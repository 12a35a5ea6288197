use once_cell::sync::Lazy;
use regex::Regex;

// ASCII classes only: accented letters and other non-ASCII text are stripped.
static CONTROL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[[:cntrl:]]").unwrap());
static NON_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^[:alpha:][:blank:]]").unwrap());
static SPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Reduce raw text to ASCII letters separated by single spaces.
///
/// Control characters and everything that is neither a letter nor a blank
/// become blanks, whitespace runs collapse to one space, and the result is
/// trimmed. Casing is left alone.
pub fn normalize(text: &str) -> String {
    let text = CONTROL_REGEX.replace_all(text, " ");
    let text = NON_WORD_REGEX.replace_all(&text, " ");
    let text = SPACE_RUN_REGEX.replace_all(&text, " ");
    text.trim().to_string()
}
