//! Content pack model, loading and category resolution.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;
use std::path::Path;

use arena_core::error::DomainError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::error::ContentError;

/// Category name that selects the union of every category in a section.
pub const RANDOM_CATEGORY: &str = "random";

const BUNDLED_PACK: &str = include_str!("../content/default.yaml");

/// Charades prompts for one category, split by difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharadesDeck {
    /// Prompts for the `easy` difficulty.
    pub easy: Vec<String>,
    /// Prompts for the `medium` difficulty.
    pub medium: Vec<String>,
}

/// Truth and dare prompts for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TruthOrDareDeck {
    /// Truth prompts.
    pub truths: Vec<String>,
    /// Dare prompts.
    pub dares: Vec<String>,
}

/// One picture-quiz question: an image and its correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizImage {
    /// Image URL or path, resolved by the client.
    pub image: String,
    /// The correct answer.
    pub answer: String,
}

/// Every table a game setup can select from.
///
/// Sections are `BTreeMap`s so that `random` unions and fingerprints are
/// independent of YAML key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentPack {
    /// Single-word categories (Codenames, Imposter, Sketch).
    #[serde(default)]
    pub words: BTreeMap<String, Vec<String>>,
    /// Charades categories.
    #[serde(default)]
    pub charades: BTreeMap<String, CharadesDeck>,
    /// Truth or Dare categories.
    #[serde(default)]
    pub truth_or_dare: BTreeMap<String, TruthOrDareDeck>,
    /// Never Have I Ever categories.
    #[serde(default)]
    pub never_have_i_ever: BTreeMap<String, Vec<String>>,
    /// Picture Quiz categories.
    #[serde(default)]
    pub picture_quiz: BTreeMap<String, Vec<QuizImage>>,
}

/// Category names per section, for clients building a config screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryIndex {
    /// `words` categories.
    pub words: Vec<String>,
    /// `charades` categories.
    pub charades: Vec<String>,
    /// `truth_or_dare` categories.
    pub truth_or_dare: Vec<String>,
    /// `never_have_i_ever` categories.
    pub never_have_i_ever: Vec<String>,
    /// `picture_quiz` categories.
    pub picture_quiz: Vec<String>,
}

impl ContentPack {
    /// Parses and validates a pack from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Parse` for malformed YAML and the validation
    /// errors described on [`ContentPack::validate`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ContentError> {
        let pack: Self = serde_yaml::from_str(yaml)?;
        pack.validate()?;
        Ok(pack)
    }

    /// Reads, parses and validates a pack file.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Io` if the file cannot be read, otherwise the
    /// errors of [`ContentPack::from_yaml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let pack = Self::from_yaml_str(&yaml)?;
        info!(path = %path.display(), fingerprint = %pack.fingerprint(), "loaded content pack");
        Ok(pack)
    }

    /// The sample pack compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns a `ContentError` only if the bundled file itself is broken.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_yaml_str(BUNDLED_PACK)
    }

    /// Checks every category in every section.
    ///
    /// # Errors
    ///
    /// - `ContentError::ReservedCategory` for a key named `random` or one
    ///   that cannot appear in a game code.
    /// - `ContentError::EmptyCategory` for a category with no entries (for
    ///   decks: an empty difficulty or prompt list).
    /// - `ContentError::DuplicateEntry` for a repeated entry in a list.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (category, words) in &self.words {
            check_list("words", category, words)?;
        }
        for (category, deck) in &self.charades {
            check_list("charades", category, &deck.easy)?;
            check_list("charades", category, &deck.medium)?;
        }
        for (category, deck) in &self.truth_or_dare {
            check_list("truth_or_dare", category, &deck.truths)?;
            check_list("truth_or_dare", category, &deck.dares)?;
        }
        for (category, prompts) in &self.never_have_i_ever {
            check_list("never_have_i_ever", category, prompts)?;
        }
        for (category, images) in &self.picture_quiz {
            check_list("picture_quiz", category, images)?;
            let answers: Vec<&String> = images.iter().map(|image| &image.answer).collect();
            check_list("picture_quiz", category, &answers)?;
        }
        Ok(())
    }

    /// Hex SHA-256 over every section, category and entry in order, each
    /// string and list prefixed with its length.
    ///
    /// Two clients with the same fingerprint build identical games from the
    /// same code.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hash_section(&mut hasher, "words", &self.words, |h, words| hash_strings(h, words));
        hash_section(&mut hasher, "charades", &self.charades, |h, deck| {
            hash_strings(h, &deck.easy);
            hash_strings(h, &deck.medium);
        });
        hash_section(&mut hasher, "truth_or_dare", &self.truth_or_dare, |h, deck| {
            hash_strings(h, &deck.truths);
            hash_strings(h, &deck.dares);
        });
        hash_section(&mut hasher, "never_have_i_ever", &self.never_have_i_ever, |h, prompts| {
            hash_strings(h, prompts);
        });
        hash_section(&mut hasher, "picture_quiz", &self.picture_quiz, |h, images| {
            hash_len(h, images.len());
            for image in images {
                hash_str(h, &image.image);
                hash_str(h, &image.answer);
            }
        });
        format!("{:x}", hasher.finalize())
    }

    /// Category names per section.
    #[must_use]
    pub fn categories(&self) -> CategoryIndex {
        CategoryIndex {
            words: self.words.keys().cloned().collect(),
            charades: self.charades.keys().cloned().collect(),
            truth_or_dare: self.truth_or_dare.keys().cloned().collect(),
            never_have_i_ever: self.never_have_i_ever.keys().cloned().collect(),
            picture_quiz: self.picture_quiz.keys().cloned().collect(),
        }
    }

    /// Words for `category`, or the de-duplicated union of all categories
    /// for `random`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownCategory` if the category is missing.
    pub fn words(&self, category: &str) -> Result<Cow<'_, [String]>, DomainError> {
        resolve_list(&self.words, category)
    }

    /// Never Have I Ever prompts for `category` (or `random`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownCategory` if the category is missing.
    pub fn never_have_i_ever(&self, category: &str) -> Result<Cow<'_, [String]>, DomainError> {
        resolve_list(&self.never_have_i_ever, category)
    }

    /// Picture Quiz images for `category` (or `random`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownCategory` if the category is missing.
    pub fn picture_quiz(&self, category: &str) -> Result<Cow<'_, [QuizImage]>, DomainError> {
        resolve_list(&self.picture_quiz, category)
    }

    /// Charades deck for `category`; `random` merges every deck per
    /// difficulty.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownCategory` if the category is missing.
    pub fn charades(&self, category: &str) -> Result<Cow<'_, CharadesDeck>, DomainError> {
        if category == RANDOM_CATEGORY {
            return Ok(Cow::Owned(CharadesDeck {
                easy: union(self.charades.values().map(|deck| deck.easy.as_slice())),
                medium: union(self.charades.values().map(|deck| deck.medium.as_slice())),
            }));
        }
        self.charades
            .get(category)
            .map(Cow::Borrowed)
            .ok_or_else(|| DomainError::UnknownCategory(category.to_owned()))
    }

    /// Truth or Dare deck for `category`; `random` merges every deck.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownCategory` if the category is missing.
    pub fn truth_or_dare(&self, category: &str) -> Result<Cow<'_, TruthOrDareDeck>, DomainError> {
        if category == RANDOM_CATEGORY {
            return Ok(Cow::Owned(TruthOrDareDeck {
                truths: union(self.truth_or_dare.values().map(|deck| deck.truths.as_slice())),
                dares: union(self.truth_or_dare.values().map(|deck| deck.dares.as_slice())),
            }));
        }
        self.truth_or_dare
            .get(category)
            .map(Cow::Borrowed)
            .ok_or_else(|| DomainError::UnknownCategory(category.to_owned()))
    }
}

fn resolve_list<'a, T: Clone + Eq + Hash>(
    section: &'a BTreeMap<String, Vec<T>>,
    category: &str,
) -> Result<Cow<'a, [T]>, DomainError> {
    if category == RANDOM_CATEGORY {
        return Ok(Cow::Owned(union(section.values().map(Vec::as_slice))));
    }
    section
        .get(category)
        .map(|list| Cow::Borrowed(list.as_slice()))
        .ok_or_else(|| DomainError::UnknownCategory(category.to_owned()))
}

/// Concatenates lists in order, keeping the first occurrence of each entry.
fn union<'a, T: Clone + Eq + Hash + 'a>(lists: impl Iterator<Item = &'a [T]>) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for list in lists {
        for entry in list {
            if seen.insert(entry) {
                merged.push(entry.clone());
            }
        }
    }
    merged
}

fn check_list<T: Eq + Hash + ToString>(
    section: &'static str,
    category: &str,
    entries: &[T],
) -> Result<(), ContentError> {
    if !is_code_safe(category) {
        return Err(ContentError::ReservedCategory {
            section,
            category: category.to_owned(),
        });
    }
    if entries.is_empty() {
        return Err(ContentError::EmptyCategory {
            section,
            category: category.to_owned(),
        });
    }
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry) {
            return Err(ContentError::DuplicateEntry {
                section,
                category: category.to_owned(),
                entry: entry.to_string(),
            });
        }
    }
    Ok(())
}

/// A category must round-trip through a game code: lowercase ASCII words
/// joined by single hyphens, and never the reserved `random`.
fn is_code_safe(category: &str) -> bool {
    category != RANDOM_CATEGORY
        && !category.is_empty()
        && category.split('-').all(|word| {
            !word.is_empty()
                && word
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

fn hash_section<T>(
    hasher: &mut Sha256,
    name: &str,
    section: &BTreeMap<String, T>,
    mut hash_value: impl FnMut(&mut Sha256, &T),
) {
    hash_str(hasher, name);
    hash_len(hasher, section.len());
    for (category, value) in section {
        hash_str(hasher, category);
        hash_value(hasher, value);
    }
}

fn hash_strings(hasher: &mut Sha256, entries: &[String]) {
    hash_len(hasher, entries.len());
    for entry in entries {
        hash_str(hasher, entry);
    }
}

fn hash_str(hasher: &mut Sha256, value: &str) {
    hash_len(hasher, value.len());
    hasher.update(value.as_bytes());
}

fn hash_len(hasher: &mut Sha256, len: usize) {
    hasher.update((len as u64).to_le_bytes());
}

impl std::fmt::Display for QuizImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.answer, self.image)
    }
}
