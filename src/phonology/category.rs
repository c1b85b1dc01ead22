//! Phoneme categories usable as environment placeholders

use ahash::AHashMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::error::{EvolveError, Result};

/// A named class of phonemes, written as a one-letter code inside `[..]` or
/// `(..)` placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Vowel,
}

impl Category {
    pub const ALL: [Category; 1] = [Category::Vowel];

    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "V" => Ok(Category::Vowel),
            _ => Err(EvolveError::UnknownCategory(code.to_string())),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Category::Vowel => "V",
        }
    }
}

/// Source of category membership for pattern expansion
pub trait CategoryResolver {
    /// Ordered members of `category`. Order drives expansion order.
    fn members(&self, category: Category) -> &[String];

    /// Resolve a placeholder code to its members
    fn resolve(&self, code: &str) -> Result<&[String]> {
        let category = Category::from_code(code)?;
        Ok(self.members(category))
    }
}

/// Built-in vowel inventory
const DEFAULT_VOWELS: [&str; 8] = ["a", "e", "i", "o", "u", "ɛ", "ɔ", "ə"];

/// Category membership table
#[derive(Debug, Clone)]
pub struct CategoryTable {
    members: AHashMap<Category, Vec<String>>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::empty().with_members(Category::Vowel, DEFAULT_VOWELS)
    }
}

impl CategoryTable {
    /// A table where every category resolves to nothing
    pub fn empty() -> Self {
        Self {
            members: AHashMap::new(),
        }
    }

    /// Replace the members of one category
    pub fn with_members<I, S>(mut self, category: Category, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members
            .insert(category, members.into_iter().map(Into::into).collect());
        self
    }

    /// Parse a table of the form:
    ///
    /// ```toml
    /// [categories]
    /// V = ["a", "e", "i"]
    /// ```
    ///
    /// Categories missing from the file keep their built-in members.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CategoryFile = toml::from_str(content)?;
        let mut table = Self::default();

        for (code, members) in file.categories {
            let category = Category::from_code(&code)?;
            if members.is_empty() {
                return Err(EvolveError::InvalidData(format!(
                    "category {} has no members",
                    code
                )));
            }
            if members.iter().any(|m| m.is_empty()) {
                return Err(EvolveError::InvalidData(format!(
                    "category {} has an empty member",
                    code
                )));
            }
            table = table.with_members(category, members);
        }

        Ok(table)
    }
}

impl CategoryResolver for CategoryTable {
    fn members(&self, category: Category) -> &[String] {
        self.members
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[derive(Debug, Deserialize)]
struct CategoryFile {
    #[serde(default)]
    categories: std::collections::BTreeMap<String, Vec<String>>,
}

/// Load a category table from a TOML file
pub fn load_category_table(path: &Path) -> Result<CategoryTable> {
    let content = fs::read_to_string(path)?;
    CategoryTable::from_toml_str(&content)
}
