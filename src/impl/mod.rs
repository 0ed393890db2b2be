// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod lexicon_ron_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod athens_clock;
        pub(crate) mod memory_ledger_gateway;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod clarification;
        pub(crate) mod entry;
        pub(crate) mod lexicon;
        pub(crate) mod partial_entry;
        pub(crate) mod report;
    }
    pub(crate) mod logic {
        pub(crate) mod date_resolver;
        pub(crate) mod field_extractor;
        pub(crate) mod lexicon_match;
        pub(crate) mod normalize;
        pub(crate) mod query_parser;
        pub(crate) mod report_engine;
        pub(crate) mod validator;
    }
    pub(crate) mod repositories {
        pub(crate) mod clock;
        pub(crate) mod ledger_gateway;
    }
    pub(crate) mod usecases {
        pub(crate) mod log_entry_usecase;
        pub(crate) mod report_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod receipt_fmt;
    pub(crate) mod report_fmt;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::clarification::*;
        pub use crate::domain::entities::entry::*;
        pub use crate::domain::entities::lexicon::*;
        pub use crate::domain::entities::partial_entry::*;
        pub use crate::domain::entities::report::*;
    }

    pub mod gateway {
        pub use crate::data::repositories::athens_clock::*;
        pub use crate::data::repositories::memory_ledger_gateway::*;
        pub use crate::domain::repositories::clock::*;
        pub use crate::domain::repositories::ledger_gateway::*;
    }
}
