use std::sync::LazyLock;

use crate::entities::{
    CategoryAliases, Direction, DirectionAliases, Lexicon, Property, PropertyAliases,
};

/// Built-in Greek vocabulary for the two managed properties. Every alias is
/// stored pre-folded: lowercase, no diacritics, plain sigma. Garden and
/// Maintenance exist only at Vourvourou.
pub static STANDARD_LEXICON: LazyLock<Lexicon> = LazyLock::new(|| Lexicon {
    properties: vec![
        property(
            Property::Thessaloniki,
            &["θεσσαλονικη", "θεσνικη", "σαλονικη", "thessaloniki"],
        ),
        property(Property::Vourvourou, &["βουρβουρου", "vourvourou"]),
    ],
    directions: vec![
        direction(
            Direction::Expense,
            &[
                "πληρωσα",
                "πληρωσαμε",
                "ξοδεψα",
                "ξοδεψαμε",
                "αγορασα",
                "εδωσα",
                "εξοδο",
                "εξοδα",
                "χρεωση",
            ],
        ),
        direction(
            Direction::Income,
            &[
                "εισεπραξα",
                "εισπραξη",
                "εισπραξεισ",
                "ελαβα",
                "μπηκαν",
                "εσοδο",
                "εσοδα",
                "εισοδημα",
            ],
        ),
    ],
    categories: vec![
        category(
            "Utilities",
            None,
            &["ρευμα", "δεη", "νερο", "ευδαπ", "ιντερνετ", "wifi", "κοινοχρηστα", "θερμανση"],
        ),
        category(
            "Cleaning",
            None,
            &["καθαρισμα", "καθαρισμοσ", "καθαριστρια", "καθαριοτητα"],
        ),
        category(
            "Supplies",
            None,
            &["αναλωσιμα", "σεντονια", "πετσετεσ", "σαπουνια", "προμηθειεσ"],
        ),
        category(
            "Repairs",
            None,
            &["επισκευη", "επισκευεσ", "υδραυλικοσ", "υδραυλικο", "ηλεκτρολογοσ", "βλαβη"],
        ),
        category("Taxes", None, &["εφορια", "ενφια", "φοροσ", "φοροι"]),
        category("Airbnb", None, &["airbnb", "booking", "κρατηση", "διανυκτερευση"]),
        category(
            "Garden",
            Some(Property::Vourvourou),
            &["κηποσ", "κηπο", "κηπουροσ", "γκαζον", "ποτισμα"],
        ),
        category(
            "Maintenance",
            Some(Property::Vourvourou),
            &["συντηρηση", "φιλτρα", "αποφραξη", "βαψιμο"],
        ),
    ],
});

fn property(property: Property, aliases: &[&str]) -> PropertyAliases {
    PropertyAliases {
        property,
        aliases: owned(aliases),
    }
}

fn direction(direction: Direction, aliases: &[&str]) -> DirectionAliases {
    DirectionAliases {
        direction,
        aliases: owned(aliases),
    }
}

fn category(label: &str, scope: Option<Property>, aliases: &[&str]) -> CategoryAliases {
    CategoryAliases {
        label: label.to_string(),
        scope,
        aliases: owned(aliases),
    }
}

fn owned(aliases: &[&str]) -> Vec<String> {
    aliases.iter().map(|a| a.to_string()).collect()
}
