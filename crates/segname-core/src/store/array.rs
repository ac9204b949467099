use super::{Backing, ComponentStore};
use std::borrow::Cow;

/// Components held directly in a `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayStore {
    components: Vec<String>,
}

impl ArrayStore {
    pub fn new(components: Vec<String>) -> Self {
        Self { components }
    }
}

impl ComponentStore for ArrayStore {
    fn no_components(&self) -> usize {
        self.components.len()
    }

    fn component(&self, i: usize) -> Option<Cow<'_, str>> {
        self.components.get(i).map(|c| Cow::Borrowed(c.as_str()))
    }

    fn set(&mut self, i: usize, c: String) {
        self.components[i] = c;
    }

    fn insert(&mut self, i: usize, c: String) {
        self.components.insert(i, c);
    }

    fn remove(&mut self, i: usize) -> String {
        self.components.remove(i)
    }

    fn backing(&self) -> Backing {
        Backing::Array
    }

    fn to_vec(&self) -> Vec<String> {
        self.components.clone()
    }
}
