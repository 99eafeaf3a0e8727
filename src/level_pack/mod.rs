use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::Grid;

mod parse;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read level pack {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: level header {text:?} is not a number")]
    InvalidHeader { line: usize, text: String },
}

/// A level template as it appears in the pack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    /// The number from the `;` header, or None for rows that came before any header.
    pub id: Option<i64>,
    pub grid: Grid,
}

/// The ordered, immutable set of levels read from one source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelPack {
    levels: Vec<Level>,
}

impl LevelPack {
    pub fn load(path: impl AsRef<Path>) -> Result<LevelPack, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let pack = LevelPack::parse(&source)?;
        tracing::info!(path = %path.display(), levels = pack.len(), "loaded level pack");
        Ok(pack)
    }

    pub fn parse(source: &str) -> Result<LevelPack, LoadError> {
        parse::parse_levels(source).map(|levels| LevelPack { levels })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }
}
