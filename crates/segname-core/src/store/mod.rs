//! Component storage
//!
//! A [`ComponentStore`] holds an ordered list of masked components. Two
//! variants exist and must be indistinguishable from the outside:
//!
//! - [`ArrayStore`] keeps the components in a `Vec`.
//! - [`StringStore`] keeps a single delimited string and splits it on read.
//!
//! The trait is deliberately narrow. Everything a name can do beyond reading
//! and editing single components (rendering, equality, concatenation) is a
//! provided method built only from the required ones, so a new variant gets
//! it for free.

mod array;
mod string;

pub use array::ArrayStore;
pub use string::StringStore;

use crate::codec::{self, DEFAULT_DELIMITER};
use crate::error::ArgumentError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Which storage variant backs a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backing {
    #[default]
    Array,
    String,
}

impl fmt::Display for Backing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backing::Array => write!(f, "array"),
            Backing::String => write!(f, "string"),
        }
    }
}

impl FromStr for Backing {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "array" => Ok(Backing::Array),
            "string" => Ok(Backing::String),
            other => Err(ArgumentError::UnknownBacking(other.to_string())),
        }
    }
}

/// Ordered storage of masked components.
///
/// Index arguments are assumed valid; range checks belong to the caller.
pub trait ComponentStore {
    fn no_components(&self) -> usize;

    /// Masked component at `i`, or `None` past the end
    fn component(&self, i: usize) -> Option<Cow<'_, str>>;

    fn set(&mut self, i: usize, c: String);

    fn insert(&mut self, i: usize, c: String);

    fn remove(&mut self, i: usize) -> String;

    fn backing(&self) -> Backing;

    fn push(&mut self, c: String) {
        let n = self.no_components();
        self.insert(n, c);
    }

    fn is_empty(&self) -> bool {
        self.no_components() == 0
    }

    /// All masked components, in order
    fn to_vec(&self) -> Vec<String> {
        (0..self.no_components())
            .filter_map(|i| self.component(i).map(Cow::into_owned))
            .collect()
    }

    /// Masked components joined with the canonical delimiter
    fn data_string(&self) -> String {
        codec::join(&self.to_vec(), DEFAULT_DELIMITER)
    }

    /// Unmasked components joined with `delimiter`
    fn display_string(&self, delimiter: char) -> String {
        let unmasked: Vec<String> = self
            .to_vec()
            .iter()
            .map(|c| codec::unmask(c))
            .collect();
        codec::join(&unmasked, delimiter)
    }

    /// Pairwise equality of masked components.
    ///
    /// Reads each side once through `to_vec`; `component` may re-derive the
    /// whole list on every call.
    fn same_components(&self, other: &dyn ComponentStore) -> bool {
        self.no_components() == other.no_components() && self.to_vec() == other.to_vec()
    }
}

/// Either store variant, chosen at construction.
#[derive(Debug, Clone)]
pub enum Store {
    Array(ArrayStore),
    String(StringStore),
}

impl Store {
    pub fn from_components(backing: Backing, components: Vec<String>, delimiter: char) -> Self {
        match backing {
            Backing::Array => Store::Array(ArrayStore::new(components)),
            Backing::String => Store::String(StringStore::from_components(&components, delimiter)),
        }
    }

    pub fn parse(backing: Backing, raw: &str, delimiter: char) -> Self {
        match backing {
            Backing::Array => Store::Array(ArrayStore::new(codec::split(raw, delimiter))),
            Backing::String => Store::String(StringStore::parse(raw, delimiter)),
        }
    }

    fn inner(&self) -> &dyn ComponentStore {
        match self {
            Store::Array(s) => s,
            Store::String(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ComponentStore {
        match self {
            Store::Array(s) => s,
            Store::String(s) => s,
        }
    }
}

impl ComponentStore for Store {
    fn no_components(&self) -> usize {
        self.inner().no_components()
    }

    fn component(&self, i: usize) -> Option<Cow<'_, str>> {
        self.inner().component(i)
    }

    fn set(&mut self, i: usize, c: String) {
        self.inner_mut().set(i, c)
    }

    fn insert(&mut self, i: usize, c: String) {
        self.inner_mut().insert(i, c)
    }

    fn remove(&mut self, i: usize) -> String {
        self.inner_mut().remove(i)
    }

    fn backing(&self) -> Backing {
        self.inner().backing()
    }

    fn to_vec(&self) -> Vec<String> {
        self.inner().to_vec()
    }
}
