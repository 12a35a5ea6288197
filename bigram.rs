use std::collections::HashMap;
use std::iter;

use itertools::Itertools;

use crate::normalize::normalize;

/// Bigram key ("the quick") to number of occurrences.
pub type Histogram = HashMap<String, usize>;

/// Count the bigrams of one line into `histogram`.
///
/// `previous_word` is the last word of the line before, or empty when there
/// is none; it is paired with this line's first word so bigrams spanning a
/// line break are kept. Returns the word to carry into the next call. A line
/// without any word returns `previous_word` untouched.
pub fn accumulate(line: &str, previous_word: &str, histogram: &mut Histogram) -> String {
    let normalized = normalize(line);
    if normalized.is_empty() {
        return previous_word.to_string();
    }

    let mut tokens = normalized.split_whitespace().map(str::to_ascii_lowercase);

    let reference = if previous_word.is_empty() {
        let Some(first) = tokens.next() else {
            return String::new();
        };
        first
    } else {
        previous_word.to_string()
    };

    let mut carried = reference.clone();
    for (left, right) in iter::once(reference).chain(tokens).tuple_windows() {
        *histogram.entry(format!("{left} {right}")).or_insert(0) += 1;
        carried = right;
    }

    carried
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOISY_LINE: &str =
        "brOWN-+=Fox.\n\t\n◊ ◊ ◊  │  │◊ ◊   ◊│  │◊   ◊ ◊│  │  ◊ ◊ ◊│and";

    #[test]
    fn returns_last_word_read() {
        let mut histogram = Histogram::new();

        let carried = accumulate(NOISY_LINE, "quick", &mut histogram);

        assert_eq!(carried, "and");
        assert_eq!(histogram.len(), 3);
        assert_eq!(histogram["quick brown"], 1);
        assert_eq!(histogram["brown fox"], 1);
        assert_eq!(histogram["fox and"], 1);
    }

    #[test]
    fn no_previous_word_drops_leading_pairing() {
        let mut histogram = Histogram::new();

        let carried = accumulate("brOWN-+=Fox.", "", &mut histogram);

        assert_eq!(carried, "fox");
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram["brown fox"], 1);
    }

    #[test]
    fn single_word_without_previous_only_carries() {
        let mut histogram = Histogram::new();

        let carried = accumulate("  Hello!  ", "", &mut histogram);

        assert_eq!(carried, "hello");
        assert!(histogram.is_empty());
    }

    #[test]
    fn single_word_with_previous_makes_one_entry() {
        let mut histogram = Histogram::new();

        let carried = accumulate("World.", "hello", &mut histogram);

        assert_eq!(carried, "world");
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram["hello world"], 1);
    }

    #[test]
    fn wordless_line_keeps_previous_word() {
        let mut histogram = Histogram::new();

        assert_eq!(accumulate("", "fox", &mut histogram), "fox");
        assert_eq!(accumulate("  \t ", "fox", &mut histogram), "fox");
        assert_eq!(accumulate("1984 -- ◊ ◊", "fox", &mut histogram), "fox");
        assert_eq!(accumulate("--", "", &mut histogram), "");
        assert!(histogram.is_empty());
    }

    #[test]
    fn lowercases_every_token() {
        let mut histogram = Histogram::new();

        let carried = accumulate("The QUICK Brown", "", &mut histogram);

        assert_eq!(carried, "brown");
        assert_eq!(histogram["the quick"], 1);
        assert_eq!(histogram["quick brown"], 1);
    }

    #[test]
    fn repeated_pairs_increment_by_one() {
        let mut histogram = Histogram::new();

        accumulate("to be or not to be", "", &mut histogram);
        assert_eq!(histogram["to be"], 2);
        assert_eq!(histogram["be or"], 1);

        accumulate("to be", "be", &mut histogram);
        assert_eq!(histogram["be to"], 1);
        assert_eq!(histogram["to be"], 3);
        assert_eq!(histogram.values().sum::<usize>(), 7);
    }

    #[test]
    fn keys_are_two_lowercase_words() {
        let mut histogram = Histogram::new();

        let mut carried = String::new();
        for line in ["It was the best of times,", "it was the WORST of times;", "", "42 -- Dickens"] {
            carried = accumulate(line, &carried, &mut histogram);
        }

        assert_eq!(carried, "dickens");
        for key in histogram.keys() {
            let words: Vec<&str> = key.split(' ').collect();
            assert_eq!(words.len(), 2, "{key:?}");
            assert!(
                words
                    .iter()
                    .all(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase())),
                "{key:?}"
            );
        }
        assert_eq!(histogram["times dickens"], 1);
        assert_eq!(histogram["times it"], 1);
    }
}
