use super::{Backing, ComponentStore};
use crate::codec;
use std::borrow::Cow;

/// Components held as one masked, delimited string.
///
/// The component count is tracked next to the string. A string on its own
/// cannot tell a name with no components from a name with one empty
/// component, both render as `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringStore {
    raw: String,
    delimiter: char,
    count: usize,
}

impl StringStore {
    /// Parse `raw`; the empty string is one empty component.
    pub fn parse(raw: &str, delimiter: char) -> Self {
        Self {
            raw: raw.to_string(),
            delimiter,
            count: codec::count_components(raw, delimiter),
        }
    }

    pub fn from_components(components: &[String], delimiter: char) -> Self {
        Self {
            raw: codec::join(components, delimiter),
            delimiter,
            count: components.len(),
        }
    }

    /// The stored masked string
    pub fn raw(&self) -> &str {
        &self.raw
    }

    fn split(&self) -> Vec<String> {
        if self.count == 0 {
            Vec::new()
        } else {
            codec::split(&self.raw, self.delimiter)
        }
    }

    fn store(&mut self, components: Vec<String>) {
        *self = Self::from_components(&components, self.delimiter);
    }
}

impl ComponentStore for StringStore {
    fn no_components(&self) -> usize {
        self.count
    }

    fn component(&self, i: usize) -> Option<Cow<'_, str>> {
        self.split().into_iter().nth(i).map(Cow::Owned)
    }

    fn set(&mut self, i: usize, c: String) {
        let mut components = self.split();
        components[i] = c;
        self.store(components);
    }

    fn insert(&mut self, i: usize, c: String) {
        let mut components = self.split();
        components.insert(i, c);
        self.store(components);
    }

    fn remove(&mut self, i: usize) -> String {
        let mut components = self.split();
        let removed = components.remove(i);
        self.store(components);
        removed
    }

    fn backing(&self) -> Backing {
        Backing::String
    }

    fn to_vec(&self) -> Vec<String> {
        self.split()
    }
}
