use std::fs;

use ron::from_str;

use crate::entities::Lexicon;
use crate::errors::Result;

/// Loads a custom lexicon from RON text. Alias strings must be stored
/// pre-folded (lowercase, no diacritics, final sigma as plain sigma); the
/// matcher does not re-fold alias data at run time.
pub(crate) trait LexiconDatasource {
    fn from_string(&self, s: &str) -> Result<Lexicon>;

    fn from_file<P>(&self, path: P) -> Result<Lexicon>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct LexiconRonDatasourceImpl;

impl LexiconRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl LexiconDatasource for LexiconRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Lexicon> {
        Ok(from_str(s)?)
    }

    fn from_file<P>(&self, path: P) -> Result<Lexicon>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path)?)
    }
}
