use serde_derive::Deserialize;

use super::entry::{Direction, Property};

/// Static controlled vocabulary: every canonical value's alias list is
/// explicit data. Read-only at run time; the extractor never matches outside
/// it. Aliases are stored pre-folded (lowercase, no diacritics, no final
/// sigma) so matching stays a plain substring search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Lexicon {
    pub properties: Vec<PropertyAliases>,
    pub directions: Vec<DirectionAliases>,
    pub categories: Vec<CategoryAliases>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyAliases {
    pub property: Property,
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DirectionAliases {
    pub direction: Direction,
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryAliases {
    /// Canonical label recorded on the entry.
    pub label: String,
    /// When set, the category only applies to entries for this property
    /// (Vourvourou carries extras such as Garden and Maintenance).
    pub scope: Option<Property>,
    pub aliases: Vec<String>,
}
