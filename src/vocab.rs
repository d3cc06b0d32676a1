//! Named vocabularies, loaded at most once per loader.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, info};

use crate::error::VocabError;

type LoadFn = dyn Fn() -> io::Result<String> + Send + Sync;

/// Where the text of a vocabulary comes from.
#[derive(Clone)]
pub enum VocabSource {
    /// Text compiled into the binary.
    Embedded(&'static str),
    /// A whitespace-separated word file.
    File(PathBuf),
    /// Any other producer of word text.
    Func(Arc<LoadFn>),
}

impl VocabSource {
    pub fn func<F>(f: F) -> Self
    where
        F: Fn() -> io::Result<String> + Send + Sync + 'static,
    {
        VocabSource::Func(Arc::new(f))
    }

    fn read(&self) -> Result<String, VocabError> {
        match self {
            VocabSource::Embedded(text) => Ok(text.to_string()),
            VocabSource::File(path) => fs::read_to_string(path).map_err(|source| VocabError::Io {
                path: path.clone(),
                source,
            }),
            VocabSource::Func(f) => f().map_err(|source| VocabError::Io {
                path: PathBuf::new(),
                source,
            }),
        }
    }
}

/// Loads vocabularies by name and keeps each one after the first load.
#[derive(Clone)]
pub struct VocabLoader {
    sources: HashMap<String, VocabSource>,
    cache: HashMap<String, Arc<[String]>>,
}

impl Default for VocabLoader {
    fn default() -> Self {
        let mut loader = Self::empty();
        loader.register(Self::EMBEDDED, VocabSource::Embedded(crate::DICTIONARY));
        loader
    }
}

impl VocabLoader {
    /// Name of the dictionary compiled into the crate
    pub const EMBEDDED: &'static str = "embedded";

    /// A loader that knows no vocabularies.
    pub fn empty() -> Self {
        Self {
            sources: HashMap::new(),
            cache: HashMap::new(),
        }
    }

    /// Register (or replace) a named source. Replacing drops any cached copy.
    pub fn register(&mut self, name: impl Into<String>, source: VocabSource) {
        let name = name.into();
        self.cache.remove(&name);
        self.sources.insert(name, source);
    }

    /// Load `name`, reading its source only on the first call.
    pub fn load(&mut self, name: &str) -> Result<Arc<[String]>, VocabError> {
        if let Some(words) = self.cache.get(name) {
            debug!("Vocabulary {:?} served from cache", name);
            return Ok(words.clone());
        }
        let words = self.load_uncached(name)?;
        self.cache.insert(name.to_string(), words.clone());
        Ok(words)
    }

    /// Load `name` from its source without reading or filling the cache.
    pub fn load_uncached(&self, name: &str) -> Result<Arc<[String]>, VocabError> {
        let source = self
            .sources
            .get(name)
            .ok_or_else(|| VocabError::Unknown(name.to_string()))?;
        let words = parse_words(&source.read()?);
        if words.is_empty() {
            return Err(VocabError::Empty(name.to_string()));
        }
        info!("Loaded {} words from vocabulary {:?}", words.len(), name);
        Ok(words.into())
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }
}

/// Split word text on whitespace, lowercasing and dropping repeats and
/// anything that is not plain ASCII letters.
pub fn parse_words(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut skipped = 0;
    let mut words = Vec::new();
    for raw in text.split_whitespace() {
        let word = raw.to_lowercase();
        if !is_word(&word) {
            skipped += 1;
            continue;
        }
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    if skipped > 0 {
        debug!("Skipped {} words with non-letter characters", skipped);
    }
    words
}

/// True for a non-empty run of lowercase ASCII letters.
pub fn is_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// The words of exactly `len` letters, in their original order.
pub fn words_of_length(words: &[String], len: usize) -> Vec<String> {
    words.iter().filter(|w| w.len() == len).cloned().collect()
}
