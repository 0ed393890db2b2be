// Crate-internal.
// ---

pub(crate) mod standard_lexicon {
    pub(crate) mod core;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod standard_lexicon {
        pub use crate::impl_ext::standard_lexicon::core::*;
    }
}
