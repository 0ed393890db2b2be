//! Text normalization for lexicon matching.
//!
//! Folding is one char in, one char out, so a char index into the folded
//! string is also a char index into the original utterance. All spans in the
//! extractor are char ranges under this mapping.

use std::ops::Range;

/// Lowercases and strips Greek diacritics and the final sigma.
pub(crate) fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let lower = c.to_lowercase().next().unwrap_or(c);
    match lower {
        'ά' => 'α',
        'έ' => 'ε',
        'ή' => 'η',
        'ί' | 'ϊ' | 'ΐ' => 'ι',
        'ό' => 'ο',
        'ύ' | 'ϋ' | 'ΰ' => 'υ',
        'ώ' => 'ω',
        'ς' => 'σ',
        other => other,
    }
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Finds every word-boundary occurrence of `alias` in the folded haystack,
/// as char ranges.
pub(crate) fn find_word(folded: &str, alias: &str) -> Vec<Range<usize>> {
    if alias.is_empty() {
        return Vec::new();
    }
    let chars: Vec<char> = folded.chars().collect();
    let alias_chars: Vec<char> = alias.chars().collect();
    let mut hits = Vec::new();
    let mut i = 0;
    while i + alias_chars.len() <= chars.len() {
        if chars[i..i + alias_chars.len()] == alias_chars[..] {
            let before_ok = i == 0 || !is_word_char(chars[i - 1]);
            let after = i + alias_chars.len();
            let after_ok = after == chars.len() || !is_word_char(chars[after]);
            if before_ok && after_ok {
                hits.push(i..after);
                i = after;
                continue;
            }
        }
        i += 1;
    }
    hits
}

/// Converts a byte offset into `folded` (e.g. from a regex match) to a char
/// offset.
pub(crate) fn byte_to_char(folded: &str, byte: usize) -> usize {
    folded[..byte].chars().count()
}

/// A whitespace-delimited token with its char range in the source string.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) raw: String,
    pub(crate) folded: String,
    pub(crate) span: Range<usize>,
}

pub(crate) fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0;
    for (i, c) in text.chars().enumerate() {
        if c.is_whitespace() {
            if !current.is_empty() {
                tokens.push(make_token(current, start..i));
                current = String::new();
            }
        } else {
            if current.is_empty() {
                start = i;
            }
            current.push(c);
        }
    }
    if !current.is_empty() {
        let end = text.chars().count();
        tokens.push(make_token(current, start..end));
    }
    tokens
}

fn make_token(raw: String, span: Range<usize>) -> Token {
    // Trim punctuation off the edges but keep the span over the full run, so
    // the note reconstruction drops the punctuation along with the word.
    let folded = fold(&raw);
    let folded = folded
        .trim_matches(|c: char| !is_word_char(c) && c != '€')
        .to_string();
    Token { raw, folded, span }
}

/// Articles and prepositions that carry no slot content; dropped from notes.
const STOPWORDS: &[&str] = &[
    "ο", "η", "το", "τη", "την", "τον", "τα", "τησ", "του", "των", "στη", "στην", "στο", "στον",
    "στα", "στισ", "στουσ", "σε", "με", "για", "απο", "και", "ηταν", "ειναι", "που", "να",
];

pub(crate) fn is_stopword(folded_word: &str) -> bool {
    STOPWORDS.contains(&folded_word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_final_sigma() {
        assert_eq!(fold("Πλήρωσα 45€ ρεύμα στη Θεσσαλονίκη"), "πληρωσα 45€ ρευμα στη θεσσαλονικη");
        assert_eq!(fold("χθες"), "χθεσ");
        assert_eq!(fold("Μαΐου"), "μαιου");
    }

    #[test]
    fn folding_preserves_char_count() {
        let s = "Πλήρωσα 45€ ρεύμα στη Θεσσαλονίκη σήμερα";
        assert_eq!(fold(s).chars().count(), s.chars().count());
    }

    #[test]
    fn find_word_respects_boundaries() {
        let folded = fold("πληρωσα τη δεη σημερα");
        assert_eq!(find_word(&folded, "δεη"), vec![11..14]);
        // "ρευμα" inside a longer word must not match.
        let folded = fold("ρευματοδοτηση");
        assert!(find_word(&folded, "ρευμα").is_empty());
    }

    #[test]
    fn tokenize_keeps_spans() {
        let tokens = tokenize("Πλήρωσα 45€ ρεύμα");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].span, 0..7);
        assert_eq!(tokens[1].folded, "45€");
        assert_eq!(tokens[2].span, 12..17);
    }
}
