//! Applying coercion decisions to a live element's attribute table.
//!
//! Invariants:
//! - Names handed to the store are canonical (lowercase).
//! - `Remove` on an absent attribute is a no-op.
//! - `Write` overwrites unconditionally.
//! - Each call touches exactly one attribute name, so calls for distinct
//!   names commute.

use std::fmt;
use std::sync::Arc;

use crate::coerce::Decision;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeError {
    /// The host rejected the attribute name.
    InvalidName(String),
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeError::InvalidName(name) => write!(f, "invalid attribute name {name:?}"),
        }
    }
}

impl std::error::Error for AttributeError {}

/// Host attribute storage for one element.
pub trait AttributeStore {
    fn get_attribute(&self, name: &str) -> Option<&str>;
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AttributeError>;
    fn remove_attribute(&mut self, name: &str) -> Result<(), AttributeError>;

    fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }
}

/// Apply `decision` for `canonical_name` on `store`.
pub fn apply<S>(store: &mut S, canonical_name: &str, decision: &Decision) -> Result<(), AttributeError>
where
    S: AttributeStore + ?Sized,
{
    match decision {
        Decision::Write(value) => {
            log::trace!(target: "dom_attrs.writer", "set {canonical_name}={value:?}");
            store.set_attribute(canonical_name, value)
        }
        Decision::Remove => {
            if !store.has_attribute(canonical_name) {
                return Ok(());
            }
            log::trace!(target: "dom_attrs.writer", "remove {canonical_name}");
            store.remove_attribute(canonical_name)
        }
    }
}

/// In-memory element with an ordered attribute table.
///
/// Attribute names are matched exactly; callers pass canonical names.
/// The table keeps insertion order, so derived equality is order-sensitive.
/// Compare `sorted_attributes` when only the attribute set matters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    name: Arc<str>,
    attributes: Vec<(Arc<str>, String)>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name.to_ascii_lowercase()),
            attributes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(Arc<str>, String)] {
        &self.attributes
    }

    /// Attribute pairs sorted by name.
    pub fn sorted_attributes(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .attributes
            .iter()
            .map(|(k, v)| (k.as_ref(), v.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl AttributeStore for Element {
    fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AttributeError> {
        if !is_valid_attribute_name(name) {
            return Err(AttributeError::InvalidName(name.to_string()));
        }
        match self.attributes.iter_mut().find(|(k, _)| k.as_ref() == name) {
            Some((_, existing)) => {
                existing.clear();
                existing.push_str(value);
            }
            None => self.attributes.push((Arc::from(name), value.to_string())),
        }
        Ok(())
    }

    fn remove_attribute(&mut self, name: &str) -> Result<(), AttributeError> {
        self.attributes.retain(|(k, _)| k.as_ref() != name);
        Ok(())
    }
}

/// Attribute-name validity as enforced by the in-memory host.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|ch| {
            ch.is_ascii_whitespace()
                || ch.is_control()
                || matches!(ch, '"' | '\'' | '>' | '/' | '=')
        })
}
