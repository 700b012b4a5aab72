use crate::error::{Error, Result};
use crate::value::Value;

/// Free-form named attributes carried by rows, tables and workspaces.
///
/// A plain ordered name-to-value map. Reading an unknown name is an error;
/// use [`has`](AttributeBag::has) to probe first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeBag {
    entries: Vec<(String, Value)>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Result<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
            .ok_or_else(|| {
                Error::key_not_found(name, self.entries.iter().map(|(n, _)| n.clone()).collect())
            })
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Replace all attributes at once.
    pub fn set_all(&mut self, entries: Vec<(String, Value)>) {
        self.entries = entries;
    }

    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Attribute access, mirrored on every container that carries a bag.
pub trait Attributed {
    fn attribute_bag(&self) -> &AttributeBag;
    fn attribute_bag_mut(&mut self) -> &mut AttributeBag;

    /// Return the attribute with the given name.
    fn attribute(&self, name: &str) -> Result<&Value> {
        self.attribute_bag().get(name)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute_bag().has(name)
    }

    fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>)
    where
        Self: Sized,
    {
        self.attribute_bag_mut().set(name, value);
    }

    fn set_attributes(&mut self, entries: Vec<(String, Value)>) {
        self.attribute_bag_mut().set_all(entries);
    }

    fn attributes(&self) -> &[(String, Value)] {
        self.attribute_bag().entries()
    }
}
