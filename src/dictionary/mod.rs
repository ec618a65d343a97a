//! Radical lookup tables
//!
//! Maps characters to their constituent radicals and radicals to curated
//! semantic categories. Both lookups are partial by nature: an unknown
//! character has no radicals and an uncategorized radical falls into
//! [`OTHER_CATEGORY`].
//!
//! Tables are immutable once built and are passed explicitly to the analysis
//! code, so tests can run against small synthetic dictionaries.
//!
//! # Dictionary files
//!
//! ```toml
//! # radicals.toml
//! replace_builtin = false   # true starts from an empty table
//!
//! [characters]
//! "功" = ["力", "工"]
//!
//! [[categories]]
//! name = "power"
//! radicals = ["力", "刀", "弓", "戈"]
//! description = "Strength, weapons, force"
//! color = "#ef4444"
//! ```

mod builtin;

use crate::models::OTHER_CATEGORY;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a dictionary file
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Cannot read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid dictionary file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Dictionary key {0:?} must be exactly one character")]
    InvalidCharacter(String),

    #[error("Category name {0:?} is reserved for uncategorized radicals")]
    ReservedCategory(String),
}

/// A curated group of radicals sharing a semantic theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub radicals: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// On-disk dictionary layout
#[derive(Debug, Default, Deserialize)]
struct DictionaryFile {
    #[serde(default)]
    replace_builtin: bool,
    #[serde(default)]
    characters: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    categories: Vec<Category>,
}

/// Character → radicals and radical → category lookups
#[derive(Debug, Clone, Default)]
pub struct RadicalTable {
    characters: FxHashMap<char, Vec<String>>,
    categories: Vec<Category>,
    /// radical → index of the first category listing it
    radical_category: FxHashMap<String, usize>,
}

impl RadicalTable {
    /// Build a table from explicit data. Category order is priority order:
    /// a radical listed by two categories belongs to the first.
    pub fn new<I>(characters: I, categories: Vec<Category>) -> Self
    where
        I: IntoIterator<Item = (char, Vec<String>)>,
    {
        let mut table = Self {
            characters: characters.into_iter().collect(),
            categories,
            radical_category: FxHashMap::default(),
        };
        table.reindex();
        table
    }

    /// The curated tables shipped with bushou
    pub fn builtin() -> Self {
        let characters = builtin::CHARACTERS
            .iter()
            .map(|(ch, radicals)| (*ch, radicals.iter().map(|r| r.to_string()).collect()));
        let categories = builtin::CATEGORIES
            .iter()
            .map(|(name, radicals, description, color)| Category {
                name: name.to_string(),
                radicals: radicals.iter().map(|r| r.to_string()).collect(),
                description: description.to_string(),
                color: Some(color.to_string()),
            })
            .collect();
        Self::new(characters, categories)
    }

    /// Load a dictionary file, layered over the built-in tables unless the
    /// file sets `replace_builtin = true`.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let content = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml_str(&content)?;
        debug!(
            "Loaded dictionary {} ({} characters, {} categories)",
            path.display(),
            table.character_count(),
            table.categories.len()
        );
        Ok(table)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DictionaryError> {
        let file: DictionaryFile = toml::from_str(content)?;
        let mut table = if file.replace_builtin {
            Self::default()
        } else {
            Self::builtin()
        };
        table.merge(file)?;
        Ok(table)
    }

    fn merge(&mut self, file: DictionaryFile) -> Result<(), DictionaryError> {
        for (key, radicals) in file.characters {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(DictionaryError::InvalidCharacter(key));
            };
            self.characters.insert(ch, radicals);
        }
        for category in file.categories {
            if category.name == OTHER_CATEGORY {
                return Err(DictionaryError::ReservedCategory(category.name));
            }
            match self.categories.iter_mut().find(|c| c.name == category.name) {
                Some(existing) => *existing = category,
                None => self.categories.push(category),
            }
        }
        self.reindex();
        Ok(())
    }

    fn reindex(&mut self) {
        self.radical_category.clear();
        for (idx, category) in self.categories.iter().enumerate() {
            for radical in &category.radicals {
                self.radical_category.entry(radical.clone()).or_insert(idx);
            }
        }
    }

    /// Radicals of `ch`, empty when the character is unknown.
    pub fn radicals_of(&self, ch: char) -> &[String] {
        self.characters.get(&ch).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Category of `radical`, or `"other"` when no curated category lists it.
    pub fn category_of(&self, radical: &str) -> &str {
        self.radical_category
            .get(radical)
            .map(|&idx| self.categories[idx].name.as_str())
            .unwrap_or(OTHER_CATEGORY)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Named categories in priority order followed by `"other"`
    pub fn category_names(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|c| c.name.as_str())
            .chain(std::iter::once(OTHER_CATEGORY))
            .collect()
    }

    pub fn is_known_category(&self, name: &str) -> bool {
        name == OTHER_CATEGORY || self.category(name).is_some()
    }

    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Every radical used by at least one character entry
    pub fn all_radicals(&self) -> BTreeSet<&str> {
        self.characters
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Characters whose decomposition includes `radical`, sorted
    pub fn characters_with_radical(&self, radical: &str) -> Vec<char> {
        let mut chars: Vec<char> = self
            .characters
            .iter()
            .filter(|(_, rads)| rads.iter().any(|r| r == radical))
            .map(|(ch, _)| *ch)
            .collect();
        chars.sort_unstable();
        chars
    }

    pub fn stats(&self) -> DictionaryStats {
        let mut per_radical: FxHashMap<&str, usize> = FxHashMap::default();
        for radicals in self.characters.values() {
            let unique: BTreeSet<&str> = radicals.iter().map(String::as_str).collect();
            for radical in unique {
                *per_radical.entry(radical).or_insert(0) += 1;
            }
        }

        let characters_by_category = self
            .categories
            .iter()
            .map(|category| {
                let chars: BTreeSet<char> = category
                    .radicals
                    .iter()
                    .flat_map(|r| self.characters_with_radical(r))
                    .collect();
                CategoryCoverage {
                    category: category.name.clone(),
                    characters: chars.len(),
                }
            })
            .collect();

        let mut characters_per_radical: Vec<RadicalCoverage> = per_radical
            .into_iter()
            .map(|(radical, characters)| RadicalCoverage {
                category: self.category_of(radical).to_string(),
                radical: radical.to_string(),
                characters,
            })
            .collect();
        characters_per_radical.sort_by(|a, b| {
            b.characters
                .cmp(&a.characters)
                .then_with(|| a.radical.cmp(&b.radical))
        });

        DictionaryStats {
            total_characters: self.characters.len(),
            total_unique_radicals: characters_per_radical.len(),
            characters_by_category,
            characters_per_radical,
        }
    }
}

/// Summary of dictionary coverage
#[derive(Debug, Clone, Serialize)]
pub struct DictionaryStats {
    pub total_characters: usize,
    pub total_unique_radicals: usize,
    pub characters_by_category: Vec<CategoryCoverage>,
    /// Most widely used radicals first
    pub characters_per_radical: Vec<RadicalCoverage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCoverage {
    pub category: String,
    pub characters: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadicalCoverage {
    pub radical: String,
    pub category: String,
    pub characters: usize,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Small dictionary covering `道可道非常道`
    pub(crate) fn sample_table() -> RadicalTable {
        RadicalTable::new(
            [
                ('道', vec!["辶".to_string()]),
                ('可', vec!["口".to_string(), "丁".to_string()]),
                ('非', vec!["非".to_string()]),
                ('常', vec!["巾".to_string(), "尚".to_string()]),
            ],
            vec![
                Category {
                    name: "motion".into(),
                    radicals: vec!["辶".into()],
                    description: String::new(),
                    color: None,
                },
                Category {
                    name: "boundary".into(),
                    radicals: vec!["口".into()],
                    description: String::new(),
                    color: None,
                },
                Category {
                    name: "cloth".into(),
                    radicals: vec!["巾".into()],
                    description: String::new(),
                    color: None,
                },
            ],
        )
    }

    #[test]
    fn test_unknown_character_has_no_radicals() {
        let table = sample_table();
        assert!(table.radicals_of('名').is_empty());
        assert_eq!(table.radicals_of('可'), ["口", "丁"]);
    }

    #[test]
    fn test_uncategorized_radical_is_other() {
        let table = sample_table();
        assert_eq!(table.category_of("辶"), "motion");
        assert_eq!(table.category_of("丁"), OTHER_CATEGORY);
        assert_eq!(
            table.category_names(),
            vec!["motion", "boundary", "cloth", "other"]
        );
    }

    #[test]
    fn test_first_category_wins() {
        let table = RadicalTable::new(
            std::iter::empty(),
            vec![
                Category {
                    name: "a".into(),
                    radicals: vec!["足".into()],
                    description: String::new(),
                    color: None,
                },
                Category {
                    name: "b".into(),
                    radicals: vec!["足".into()],
                    description: String::new(),
                    color: None,
                },
            ],
        );
        assert_eq!(table.category_of("足"), "a");
    }

    #[test]
    fn test_builtin_tables() {
        let table = RadicalTable::builtin();
        assert_eq!(table.categories().len(), 19);
        assert_eq!(table.radicals_of('道'), ["辶"]);
        assert_eq!(table.radicals_of('知'), ["矢", "口"]);
        // Later entries in the curated list override earlier ones
        assert_eq!(table.radicals_of('信'), ["言"]);
        assert_eq!(table.category_of("氵"), "fluid");
        assert_eq!(table.category_of("火"), "transformation");
        assert_eq!(table.category_of("彳"), OTHER_CATEGORY);
    }

    #[test]
    fn test_dictionary_file_extends_builtin() {
        let toml_str = r#"
[characters]
"功" = ["力", "工"]
"道" = ["辶", "首"]

[[categories]]
name = "power"
radicals = ["力", "刀"]
description = "Strength"

[[categories]]
name = "motion"
radicals = ["辶", "彳"]
"#;
        let table = RadicalTable::from_toml_str(toml_str).unwrap();
        assert_eq!(table.radicals_of('功'), ["力", "工"]);
        assert_eq!(table.radicals_of('道'), ["辶", "首"]);
        assert_eq!(table.radicals_of('水'), ["水"]);
        assert_eq!(table.category_of("力"), "power");
        assert_eq!(table.category_of("彳"), "motion");
        assert_eq!(table.category_of("走"), OTHER_CATEGORY);
        assert_eq!(table.categories().len(), 20);
    }

    #[test]
    fn test_dictionary_file_can_replace_builtin() {
        let toml_str = r#"
replace_builtin = true
[characters]
"功" = ["力"]
"#;
        let table = RadicalTable::from_toml_str(toml_str).unwrap();
        assert_eq!(table.character_count(), 1);
        assert!(table.categories().is_empty());
        assert!(table.radicals_of('道').is_empty());
    }

    #[test]
    fn test_dictionary_file_rejects_bad_keys() {
        let err = RadicalTable::from_toml_str("[characters]\n\"天下\" = [\"大\"]\n").unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidCharacter(_)));

        let err = RadicalTable::from_toml_str(
            "[[categories]]\nname = \"other\"\nradicals = [\"一\"]\n",
        )
        .unwrap_err();
        assert!(matches!(err, DictionaryError::ReservedCategory(_)));

        assert!(matches!(
            RadicalTable::from_toml_str("characters = 3").unwrap_err(),
            DictionaryError::Parse(_)
        ));
    }

    #[test]
    fn test_stats() {
        let table = sample_table();
        let stats = table.stats();
        assert_eq!(stats.total_characters, 4);
        assert_eq!(stats.total_unique_radicals, 6);
        assert_eq!(stats.characters_by_category[0].category, "motion");
        assert_eq!(stats.characters_by_category[0].characters, 1);
        assert_eq!(table.characters_with_radical("口"), vec!['可']);
        assert_eq!(table.all_radicals().len(), 6);
    }
}
