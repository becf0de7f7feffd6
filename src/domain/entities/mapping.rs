//! Mapping entities: a short code bound to a target URL.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A short code bound to the URL it redirects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub code: String,
    pub target: String,
}

impl Mapping {
    /// Creates a new mapping.
    pub fn new(code: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target: target.into(),
        }
    }
}

/// The complete set of mappings as read from storage.
///
/// Codes are unique. Iteration follows insertion order, which is also the
/// order of keys in the persisted document, so a load followed by a save
/// reproduces the same bytes.
///
/// Serializes as a flat JSON object of `code -> target` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingSet {
    entries: Vec<Mapping>,
    /// Position of each code in `entries`.
    index: HashMap<String, usize>,
}

impl MappingSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the target bound to `code`.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.index
            .get(code)
            .map(|&pos| self.entries[pos].target.as_str())
    }

    /// Returns true if `code` is already bound.
    pub fn contains_code(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Reverse lookup: the first code (in insertion order) bound to `target`.
    ///
    /// Matching is exact; no scheme, case, or trailing-slash normalization.
    pub fn find_code_for(&self, target: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|m| m.target == target)
            .map(|m| m.code.as_str())
    }

    /// Binds `code` to `target`.
    ///
    /// An existing binding for `code` keeps its position and has its target
    /// replaced; otherwise the mapping is appended. Returns the previous target.
    pub fn insert(&mut self, code: impl Into<String>, target: impl Into<String>) -> Option<String> {
        let code = code.into();
        let target = target.into();

        match self.index.get(&code) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].target, target)),
            None => {
                self.index.insert(code.clone(), self.entries.len());
                self.entries.push(Mapping { code, target });
                None
            }
        }
    }

    /// Removes the binding for `code`, returning its target if it existed.
    ///
    /// Later mappings shift down one position, keeping insertion order.
    pub fn remove(&mut self, code: &str) -> Option<String> {
        let pos = self.index.remove(code)?;
        let removed = self.entries.remove(pos);
        for mapping in &self.entries[pos..] {
            if let Some(p) = self.index.get_mut(&mapping.code) {
                *p -= 1;
            }
        }
        Some(removed.target)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mapping> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Mapping> for MappingSet {
    fn from_iter<I: IntoIterator<Item = Mapping>>(iter: I) -> Self {
        let mut set = MappingSet::new();
        for mapping in iter {
            set.insert(mapping.code, mapping.target);
        }
        set
    }
}

impl IntoIterator for MappingSet {
    type Item = Mapping;
    type IntoIter = std::vec::IntoIter<Mapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for MappingSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for mapping in &self.entries {
            map.serialize_entry(&mapping.code, &mapping.target)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MappingSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingSetVisitor;

        impl<'de> Visitor<'de> for MappingSetVisitor {
            type Value = MappingSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of short code to URL strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<MappingSet, A::Error> {
                let capacity = access.size_hint().unwrap_or(0);
                let mut set = MappingSet {
                    entries: Vec::with_capacity(capacity),
                    index: HashMap::with_capacity(capacity),
                };
                // Duplicate keys: last value wins, first position kept.
                while let Some((code, target)) = access.next_entry::<String, String>()? {
                    set.insert(code, target);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(MappingSetVisitor)
    }
}
