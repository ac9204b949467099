use crate::codec::{self, DEFAULT_DELIMITER};
use crate::contract;
use crate::delimiter::Delimiter;
use crate::error::{Error, Result};
use crate::store::{Backing, ComponentStore, Store};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::trace;

/// A sequence of masked components separated by a single delimiter.
///
/// `Name` is a value type. The edit methods (`set_component`, `insert`,
/// `append`, `remove`, `concat`) leave the receiver untouched and return a
/// new name. The `*_mut` variants replace the receiver with that result,
/// and only do so once every check has passed.
///
/// Equality and hashing look at the masked components only, never at the
/// delimiter or the backing store.
#[derive(Debug, Clone)]
pub struct Name {
    delimiter: Delimiter,
    store: Store,
}

impl Name {
    /// Create an array-backed name from already masked components
    pub fn from_components<I, S>(components: I, delimiter: Delimiter) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NameBuilder::new()
            .delimiter(delimiter)
            .components(components)
            .build()
    }

    /// Parse a masked string into a string-backed name.
    ///
    /// `""` is a name with one empty component.
    pub fn parse(raw: &str, delimiter: Delimiter) -> Result<Self> {
        Self::parse_with(raw, delimiter, Backing::String)
    }

    pub fn parse_with(raw: &str, delimiter: Delimiter, backing: Backing) -> Result<Self> {
        contract::require_no_dangling_escape(raw)?;
        trace!(%raw, %delimiter, %backing, "parse name");
        Self::from_store(Store::parse(backing, raw, delimiter.as_char()), delimiter)
    }

    fn from_store(store: Store, delimiter: Delimiter) -> Result<Self> {
        contract::check_invariants(&store, delimiter)?;
        Ok(Self { delimiter, store })
    }

    /// Re-checks the invariants established by `from_store`; debug builds only
    fn debug_check_invariants(&self) {
        debug_assert!(
            contract::check_invariants(&self.store, self.delimiter).is_ok(),
            "name invariants violated: {:?}",
            self.store
        );
    }

    /// The same name held in a different store variant
    pub fn with_backing(&self, backing: Backing) -> Result<Self> {
        if backing == self.backing() {
            return Ok(self.clone());
        }
        let store = Store::from_components(backing, self.components(), self.delimiter.as_char());
        Self::from_store(store, self.delimiter)
    }

    pub fn backing(&self) -> Backing {
        self.store.backing()
    }

    pub fn no_components(&self) -> usize {
        self.store.no_components()
    }

    pub fn is_empty(&self) -> bool {
        self.no_components() == 0
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn delimiter_char(&self) -> char {
        self.delimiter.as_char()
    }

    /// Masked component at `i`
    pub fn component(&self, i: usize) -> Result<Cow<'_, str>> {
        self.debug_check_invariants();
        contract::require_index(i, self.no_components())?;
        self.store
            .component(i)
            .ok_or_else(|| contract::postcondition_failed(format!("component {} missing from store", i)))
    }

    /// All masked components, in order
    pub fn components(&self) -> Vec<String> {
        self.store.to_vec()
    }

    // ------------------------------------------------------------------------
    // Persistent edits
    // ------------------------------------------------------------------------

    pub fn set_component(&self, i: usize, c: impl Into<String>) -> Result<Self> {
        let c = c.into();
        contract::require_index(i, self.no_components())?;
        contract::require_masked(&c, self.delimiter)?;
        trace!(index = i, component = %c, "set component");

        let result = self.edited(|store| store.set(i, c.clone()))?;

        contract::ensure(result.no_components() == self.no_components(), || {
            "set_component changed the number of components".to_string()
        })?;
        contract::ensure(result.store.component(i).as_deref() == Some(c.as_str()), || {
            format!("set_component did not store {:?} at {}", c, i)
        })?;
        Ok(result)
    }

    pub fn insert(&self, i: usize, c: impl Into<String>) -> Result<Self> {
        let c = c.into();
        contract::require_insert_index(i, self.no_components())?;
        contract::require_masked(&c, self.delimiter)?;
        trace!(index = i, component = %c, "insert component");

        let result = self.edited(|store| store.insert(i, c.clone()))?;

        contract::ensure(result.no_components() == self.no_components() + 1, || {
            "insert did not increase number of components by 1".to_string()
        })?;
        contract::ensure(result.store.component(i).as_deref() == Some(c.as_str()), || {
            format!("insert did not place {:?} at {}", c, i)
        })?;
        Ok(result)
    }

    pub fn append(&self, c: impl Into<String>) -> Result<Self> {
        let c = c.into();
        contract::require_masked(&c, self.delimiter)?;
        trace!(component = %c, "append component");

        let result = self.edited(|store| store.push(c.clone()))?;

        let n = self.no_components();
        contract::ensure(result.no_components() == n + 1, || {
            "append did not increase number of components by 1".to_string()
        })?;
        contract::ensure(result.store.component(n).as_deref() == Some(c.as_str()), || {
            format!("append did not place {:?} at the end", c)
        })?;
        Ok(result)
    }

    pub fn remove(&self, i: usize) -> Result<Self> {
        contract::require_index(i, self.no_components())?;
        trace!(index = i, "remove component");

        let result = self.edited(|store| {
            store.remove(i);
        })?;

        contract::ensure(result.no_components() + 1 == self.no_components(), || {
            "remove did not decrease number of components by 1".to_string()
        })?;
        Ok(result)
    }

    /// Append every component of `other` to this name.
    ///
    /// Components of a name with a different delimiter are re-masked for
    /// this name's delimiter.
    pub fn concat(&self, other: &Name) -> Result<Self> {
        let incoming: Vec<String> = if other.delimiter == self.delimiter {
            other.components()
        } else {
            other
                .components()
                .iter()
                .map(|c| codec::mask(&codec::unmask(c), self.delimiter_char()))
                .collect()
        };
        trace!(left = %self, right = %other, "concat names");

        let result = self.edited(|store| {
            for c in incoming {
                store.push(c);
            }
        })?;

        contract::ensure(
            result.no_components() == self.no_components() + other.no_components(),
            || "concat did not add correct number of components".to_string(),
        )?;
        Ok(result)
    }

    fn edited(&self, edit: impl FnOnce(&mut Store)) -> Result<Self> {
        let mut store = self.store.clone();
        edit(&mut store);
        Self::from_store(store, self.delimiter)
    }

    // ------------------------------------------------------------------------
    // In-place edits
    // ------------------------------------------------------------------------

    pub fn set_component_mut(&mut self, i: usize, c: impl Into<String>) -> Result<()> {
        *self = self.set_component(i, c)?;
        Ok(())
    }

    pub fn insert_mut(&mut self, i: usize, c: impl Into<String>) -> Result<()> {
        *self = self.insert(i, c)?;
        Ok(())
    }

    pub fn append_mut(&mut self, c: impl Into<String>) -> Result<()> {
        *self = self.append(c)?;
        Ok(())
    }

    pub fn remove_mut(&mut self, i: usize) -> Result<()> {
        *self = self.remove(i)?;
        Ok(())
    }

    pub fn concat_mut(&mut self, other: &Name) -> Result<()> {
        *self = self.concat(other)?;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Renderings
    // ------------------------------------------------------------------------

    /// Human-readable form: unmasked components joined by the own delimiter
    pub fn as_string(&self) -> String {
        self.as_string_with(self.delimiter_char())
    }

    /// Human-readable form joined by `delimiter`. Not meant to be parsed.
    pub fn as_string_with(&self, delimiter: char) -> String {
        self.debug_check_invariants();
        self.store.display_string(delimiter)
    }

    /// Machine form: masked components joined by the canonical delimiter
    pub fn as_data_string(&self) -> String {
        self.debug_check_invariants();
        self.store.data_string()
    }

    pub fn is_equal(&self, other: &Name) -> bool {
        self.debug_check_invariants();
        other.debug_check_invariants();
        self.store.same_components(&other.store)
    }

    /// 32-bit string hash of [`as_data_string`](Self::as_data_string)
    pub fn get_hash_code(&self) -> i32 {
        self.as_data_string()
            .encode_utf16()
            .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(i32::from(c)))
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.components().hash(state);
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_data_string())
    }
}

impl FromStr for Name {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Name::parse(s, Delimiter::DEFAULT)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.as_data_string())
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NameFormat {
            Data(String),
            Components(Vec<String>),
            Structured {
                #[serde(default)]
                delimiter: Delimiter,
                components: Vec<String>,
                #[serde(default)]
                backing: Backing,
            },
        }

        let name = match NameFormat::deserialize(deserializer)? {
            NameFormat::Data(s) => Name::parse_with(&s, Delimiter::DEFAULT, Backing::Array),
            NameFormat::Components(components) => {
                Name::from_components(components, Delimiter::DEFAULT)
            }
            NameFormat::Structured {
                delimiter,
                components,
                backing,
            } => NameBuilder::new()
                .delimiter(delimiter)
                .backing(backing)
                .components(components)
                .build(),
        };
        name.map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for Name {
    fn schema_name() -> Cow<'static, str> {
        "Name".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "string",
            "description": format!(
                "Masked name components joined by '{}'. A literal '{}' or '\\' inside a component is preceded by '\\'.",
                DEFAULT_DELIMITER, DEFAULT_DELIMITER
            )
        })
    }
}

/// Builds a [`Name`] one component at a time, validating on `build`.
#[derive(Debug, Clone, Default)]
pub struct NameBuilder {
    delimiter: Delimiter,
    backing: Backing,
    components: Vec<String>,
}

impl NameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn backing(mut self, backing: Backing) -> Self {
        self.backing = backing;
        self
    }

    pub fn component(mut self, c: impl Into<String>) -> Self {
        self.components.push(c.into());
        self
    }

    pub fn components<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components
            .extend(components.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<Name> {
        for c in &self.components {
            contract::require_masked(c, self.delimiter)?;
        }
        trace!(
            delimiter = %self.delimiter,
            backing = %self.backing,
            count = self.components.len(),
            "build name"
        );
        let store = Store::from_components(self.backing, self.components, self.delimiter.as_char());
        Name::from_store(store, self.delimiter)
    }
}
