//! Core data models for pylint-exit-options
//!
//! pylint encodes its exit status as an OR of six bit flags, one per message
//! category. These types describe that table and sets of categories.

use serde::{Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// A pylint message category, each bound to exactly one exit-status bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Fatal,
    Error,
    Warning,
    Refactor,
    Convention,
    Usage,
}

impl Category {
    /// All categories in canonical (severity-first) order
    pub const ALL: [Category; 6] = [
        Category::Fatal,
        Category::Error,
        Category::Warning,
        Category::Refactor,
        Category::Convention,
        Category::Usage,
    ];

    /// Bit flag pylint sets for this category
    pub const fn flag(self) -> u8 {
        match self {
            Category::Fatal => 1,
            Category::Error => 2,
            Category::Warning => 4,
            Category::Refactor => 8,
            Category::Convention => 16,
            Category::Usage => 32,
        }
    }

    /// Single-letter selector used by `--exit-report`
    pub const fn selector(self) -> char {
        match self {
            Category::Fatal => 'F',
            Category::Error => 'E',
            Category::Warning => 'W',
            Category::Refactor => 'R',
            Category::Convention => 'C',
            Category::Usage => 'U',
        }
    }

    /// Human-readable message shown in reports
    pub const fn label(self) -> &'static str {
        match self {
            Category::Fatal => "Fatal message issued",
            Category::Error => "Error message issued",
            Category::Warning => "Warning message issued",
            Category::Refactor => "Refactor message issued",
            Category::Convention => "Convention message issued",
            Category::Usage => "Usage error",
        }
    }

    /// Look up a category by selector letter (case-insensitive)
    pub fn from_selector(c: char) -> Option<Category> {
        let upper = c.to_ascii_uppercase();
        Category::ALL.into_iter().find(|cat| cat.selector() == upper)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Fatal => write!(f, "fatal"),
            Category::Error => write!(f, "error"),
            Category::Warning => write!(f, "warning"),
            Category::Refactor => write!(f, "refactor"),
            Category::Convention => write!(f, "convention"),
            Category::Usage => write!(f, "usage"),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Errors from strict selector parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("unknown category selector '{0}' (expected one of F, E, W, R, C, U)")]
    Unknown(String),
}

/// A set of categories stored as the same bitmask pylint uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);
    pub const ALL: CategorySet = CategorySet(0b11_1111);

    /// Fatal, Error, Warning and Usage
    pub const DEFAULT_REPORTABLE: CategorySet = CategorySet(
        Category::Fatal.flag() | Category::Error.flag() | Category::Warning.flag() | Category::Usage.flag(),
    );

    /// Build a set from a bitmask, dropping bits outside the six category flags
    pub const fn from_bits_truncate(bits: u8) -> Self {
        CategorySet(bits & Self::ALL.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, category: Category) -> bool {
        self.0 & category.flag() != 0
    }

    pub fn insert(&mut self, category: Category) {
        self.0 |= category.flag();
    }

    pub const fn intersection(self, other: CategorySet) -> CategorySet {
        CategorySet(self.0 & other.0)
    }

    pub const fn is_subset(self, other: CategorySet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in canonical order
    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// Selector list such as `F,E,W,U`
    pub fn to_selector_string(self) -> String {
        self.iter()
            .map(|c| c.selector().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse a comma-delimited selector list, ignoring anything unrecognized.
    ///
    /// Returns the set and the items that matched no category. Surrounding
    /// whitespace and empty items are skipped, letters are case-insensitive.
    pub fn parse_lenient(input: &str) -> (CategorySet, Vec<String>) {
        let mut set = CategorySet::EMPTY;
        let mut unknown = Vec::new();
        for item in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match single_selector(item) {
                Some(cat) => set.insert(cat),
                None => unknown.push(item.to_string()),
            }
        }
        (set, unknown)
    }
}

fn single_selector(item: &str) -> Option<Category> {
    let mut chars = item.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Category::from_selector(c),
        _ => None,
    }
}

impl FromStr for CategorySet {
    type Err = SelectorError;

    /// Strict parse: the first unrecognized item is an error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (set, unknown) = CategorySet::parse_lenient(s);
        match unknown.into_iter().next() {
            Some(bad) => Err(SelectorError::Unknown(bad)),
            None => Ok(set),
        }
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl std::fmt::Display for CategorySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_selector_string())
    }
}

impl Serialize for CategorySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|c| c.selector().to_string()))
    }
}
