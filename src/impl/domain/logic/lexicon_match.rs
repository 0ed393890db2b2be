//! Lexicon resolution: closed-world lookup of property, direction, and
//! category slots against their alias sets.
//!
//! No alias hit means "field absent", never a default. Hits for more than one
//! canonical value in the same utterance mean "present but uncertain"
//! (`SlotMatch::Ambiguous`), which the gate treats like absent.

use std::ops::Range;

use crate::entities::{Direction, Lexicon, Property, SlotMatch};

use super::normalize::find_word;

/// Slot resolution plus the char spans the matched aliases consumed. Spans
/// are consumed even on an ambiguous hit, so the competing alias words don't
/// leak into the note.
pub(crate) struct SlotHit<T> {
    pub(crate) slot: SlotMatch<T>,
    pub(crate) spans: Vec<Range<usize>>,
}

impl Lexicon {
    pub(crate) fn resolve_property(&self, folded: &str) -> SlotHit<Property> {
        resolve(folded, self.properties.iter().map(|g| (g.property, &g.aliases)))
    }

    pub(crate) fn resolve_direction(&self, folded: &str) -> SlotHit<Direction> {
        resolve(folded, self.directions.iter().map(|g| (g.direction, &g.aliases)))
    }

    /// Category lookup, optionally scoped: when the utterance names a
    /// property, categories scoped to the other property are excluded.
    pub(crate) fn resolve_category(
        &self,
        folded: &str,
        scope: Option<Property>,
    ) -> SlotHit<String> {
        let groups = self.categories.iter().filter(|g| match (g.scope, scope) {
            (Some(s), Some(p)) => s == p,
            (Some(_), None) => true,
            (None, _) => true,
        });
        resolve(folded, groups.map(|g| (g.label.clone(), &g.aliases)))
    }
}

fn resolve<'a, T: Clone + PartialEq>(
    folded: &str,
    groups: impl Iterator<Item = (T, &'a Vec<String>)>,
) -> SlotHit<T> {
    let mut matched: Vec<T> = Vec::new();
    let mut spans: Vec<Range<usize>> = Vec::new();
    for (canonical, aliases) in groups {
        let mut hit = false;
        for alias in aliases {
            let found = find_word(folded, alias);
            if !found.is_empty() {
                hit = true;
                spans.extend(found);
            }
        }
        if hit && !matched.contains(&canonical) {
            matched.push(canonical);
        }
    }
    let slot = match matched.len() {
        0 => SlotMatch::Absent,
        1 => SlotMatch::Found(matched.remove(0)),
        _ => SlotMatch::Ambiguous,
    };
    SlotHit { slot, spans }
}
