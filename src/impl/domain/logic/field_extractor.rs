//! Slot extraction from a single utterance.
//!
//! Each of the five extractable slots is matched independently against the
//! lexicon or a regex; extraction order carries no meaning. Anything the
//! matchers did not consume (minus stopwords) is retained as the note. The
//! extractor never synthesizes a field from world knowledge or earlier turns;
//! its output is a pure function of the utterance text.

use std::ops::Range;
use std::str::FromStr as _;
use std::sync::LazyLock;

use regex::Regex;

use crate::data::models::amount_model::EurAmountModel;
use crate::entities::{DateMention, Lexicon, PartialEntry, SlotMatch};

use super::normalize::{byte_to_char, fold, is_stopword, tokenize, Token};

/// Amount with an explicit currency marker, e.g. "45€", "45 ευρώ", "45 eur".
/// Greek grouping and decimals are both accepted: "1.200€", "45,50€",
/// "1.200,50 ευρώ".
static MARKED_AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3}(?:\.\d{3})+(?:,\d{1,2})?|\d+(?:[.,]\d{1,2})?)\s*(?:€|ευρω\b|eur\b)")
        .expect("static regex")
});

/// Explicit numeric date: "15/12/2025", "15/12/25", "15/12". The year is two
/// or four digits, never three.
static EXPLICIT_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{2}(?:\d{2})?))?\b").expect("static regex")
});

/// Genitive, accusative and colloquial month names, pre-folded.
const MONTHS: &[(&str, u32)] = &[
    ("ιανουαριου", 1),
    ("ιανουαριο", 1),
    ("γεναρη", 1),
    ("φεβρουαριου", 2),
    ("φεβρουαριο", 2),
    ("φλεβαρη", 2),
    ("μαρτιου", 3),
    ("μαρτιο", 3),
    ("μαρτη", 3),
    ("απριλιου", 4),
    ("απριλιο", 4),
    ("απριλη", 4),
    ("μαιου", 5),
    ("μαιο", 5),
    ("μαη", 5),
    ("ιουνιου", 6),
    ("ιουνιο", 6),
    ("ιουνη", 6),
    ("ιουλιου", 7),
    ("ιουλιο", 7),
    ("ιουλη", 7),
    ("αυγουστου", 8),
    ("αυγουστο", 8),
    ("σεπτεμβριου", 9),
    ("σεπτεμβριο", 9),
    ("σεπτεμβρη", 9),
    ("οκτωβριου", 10),
    ("οκτωβριο", 10),
    ("οκτωβρη", 10),
    ("νοεμβριου", 11),
    ("νοεμβριο", 11),
    ("νοεμβρη", 11),
    ("δεκεμβριου", 12),
    ("δεκεμβριο", 12),
    ("δεκεμβρη", 12),
];

pub(crate) fn extract(utterance: &str, lexicon: &Lexicon) -> PartialEntry {
    let folded = fold(utterance);
    let tokens = tokenize(utterance);
    let mut consumed: Vec<Range<usize>> = Vec::new();

    let property = lexicon.resolve_property(&folded);
    consumed.extend(property.spans.iter().cloned());

    let direction = lexicon.resolve_direction(&folded);
    consumed.extend(direction.spans.iter().cloned());

    // Category scoping follows the property hit; the lookup itself is still
    // strictly lexical.
    let category = lexicon.resolve_category(&folded, property.slot.found().copied());
    consumed.extend(category.spans.iter().cloned());

    let (date, date_spans) = extract_date(&folded, &tokens);
    consumed.extend(date_spans.iter().cloned());

    let (amount, amount_spans) = extract_amount(&folded, &tokens, &date_spans);
    consumed.extend(amount_spans);

    let note = leftover_note(&tokens, &consumed);

    PartialEntry {
        property: property.slot,
        direction: direction.slot,
        category: category.slot,
        amount_eur: amount,
        date,
        note,
    }
}

// Amount.
// ---

fn extract_amount(
    folded: &str,
    tokens: &[Token],
    date_spans: &[Range<usize>],
) -> (SlotMatch<f64>, Vec<Range<usize>>) {
    let mut candidates: Vec<(f64, Range<usize>)> = Vec::new();

    for cap in MARKED_AMOUNT_RE.captures_iter(folded) {
        let whole = cap.get(0).expect("capture 0 always present");
        let span = byte_to_char(folded, whole.start())..byte_to_char(folded, whole.end());
        if let Ok(model) = EurAmountModel::from_str(&cap[1]) {
            candidates.push((model.0, span));
        }
    }

    // Bare-number fallback: only when no marked amount exists, and never for
    // numbers that are part of a date pattern.
    if candidates.is_empty() {
        for token in tokens {
            if overlaps_any(&token.span, date_spans) {
                continue;
            }
            if !token.folded.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                continue;
            }
            if token.folded.contains('/') {
                continue;
            }
            if let Ok(model) = EurAmountModel::from_str(&token.folded) {
                candidates.push((model.0, token.span.clone()));
            }
        }
    }

    let mut distinct: Vec<f64> = Vec::new();
    for (value, _) in &candidates {
        if !distinct.iter().any(|v| v == value) {
            distinct.push(*value);
        }
    }
    let spans: Vec<Range<usize>> = candidates.into_iter().map(|(_, s)| s).collect();
    let slot = match distinct.len() {
        0 => SlotMatch::Absent,
        1 => SlotMatch::Found(distinct[0]),
        _ => SlotMatch::Ambiguous,
    };
    (slot, spans)
}

// Date mentions.
// ---

fn extract_date(
    folded: &str,
    tokens: &[Token],
) -> (SlotMatch<DateMention>, Vec<Range<usize>>) {
    let mut mentions: Vec<(DateMention, Vec<Range<usize>>)> = Vec::new();

    for cap in EXPLICIT_DATE_RE.captures_iter(folded) {
        let whole = cap.get(0).expect("capture 0 always present");
        let span = byte_to_char(folded, whole.start())..byte_to_char(folded, whole.end());
        let day: u32 = match cap[1].parse() {
            Ok(d) => d,
            Err(_) => continue,
        };
        let month: u32 = match cap[2].parse() {
            Ok(m) if (1..=12).contains(&m) => m,
            _ => continue,
        };
        let mention = match cap.get(3) {
            Some(y) => {
                let year: i32 = match y.as_str().parse::<i32>() {
                    Ok(y) if y < 100 => 2000 + y,
                    Ok(y) => y,
                    Err(_) => continue,
                };
                match chrono::NaiveDate::from_ymd_opt(year, month, day) {
                    Some(date) => DateMention::Explicit(date),
                    None => continue,
                }
            }
            None if day >= 1 && day <= 31 => DateMention::DayMonth { day, month },
            None => continue,
        };
        mentions.push((mention, vec![span]));
    }

    for (i, token) in tokens.iter().enumerate() {
        match token.folded.as_str() {
            "σημερα" => mentions.push((DateMention::Today, vec![token.span.clone()])),
            "χθεσ" | "εχθεσ" => {
                mentions.push((DateMention::Yesterday, vec![token.span.clone()]))
            }
            word => {
                if let Some(&(_, month)) = MONTHS.iter().find(|(alias, _)| *alias == word) {
                    // A plain day number right before the month name makes the
                    // mention fully determined; otherwise the day is missing.
                    // A four-digit year right after the month name belongs to
                    // the date too, never to the amount.
                    let day_token = tokens[..i]
                        .iter()
                        .rev()
                        .find(|t| !is_stopword(&t.folded))
                        .filter(|t| t.folded.chars().all(|c| c.is_ascii_digit()));
                    let day = day_token
                        .and_then(|t| t.folded.parse::<u32>().ok())
                        .filter(|d| (1..=31).contains(d));
                    let year_token = tokens
                        .get(i + 1)
                        .filter(|t| t.folded.len() == 4)
                        .filter(|t| t.folded.chars().all(|c| c.is_ascii_digit()));
                    let year = year_token.and_then(|t| t.folded.parse::<i32>().ok());

                    let mut spans = vec![token.span.clone()];
                    if day.is_some() {
                        if let Some(t) = day_token {
                            spans.push(t.span.clone());
                        }
                    }
                    if let Some(t) = year_token {
                        spans.push(t.span.clone());
                    }

                    let mention = match (day, year) {
                        (Some(day), Some(year)) => {
                            match chrono::NaiveDate::from_ymd_opt(year, month, day) {
                                Some(date) => DateMention::Explicit(date),
                                None => DateMention::DayMonth { day, month },
                            }
                        }
                        (Some(day), None) => DateMention::DayMonth { day, month },
                        (None, _) => DateMention::MonthOnly(month),
                    };
                    mentions.push((mention, spans));
                }
            }
        }
    }

    let mut distinct: Vec<DateMention> = Vec::new();
    for (mention, _) in &mentions {
        if !distinct.contains(mention) {
            distinct.push(*mention);
        }
    }
    let spans: Vec<Range<usize>> = mentions.into_iter().flat_map(|(_, s)| s).collect();
    let slot = match distinct.len() {
        0 => SlotMatch::Absent,
        1 => SlotMatch::Found(distinct[0]),
        _ => SlotMatch::Ambiguous,
    };
    (slot, spans)
}

// Note.
// ---

fn leftover_note(tokens: &[Token], consumed: &[Range<usize>]) -> Option<String> {
    let words: Vec<&str> = tokens
        .iter()
        .filter(|t| !t.folded.is_empty())
        .filter(|t| !is_stopword(&t.folded))
        .filter(|t| !overlaps_any(&t.span, consumed))
        .map(|t| t.raw.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn overlaps_any(span: &Range<usize>, others: &[Range<usize>]) -> bool {
    others.iter().any(|o| span.start < o.end && o.start < span.end)
}
