//! In-memory configuration: sections of named options, both kept in
//! first-insertion order.
//!
//! The empty section name `""` is the default (global) section, i.e. options
//! that appear before any `[section]` header.
//!
//! Accessors ending in `_mut` are get-or-create: asking for a missing section
//! or option inserts a default one. Read-only queries (`option`, `section`,
//! `*_exists`) never create anything.

use indexmap::IndexMap;

use crate::value::Value;

/// Options of one section, in first-insertion order.
pub type Section = IndexMap<String, Value>;

/// All sections of a configuration, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    sections: IndexMap<String, Section>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an option, creating the section and/or the option if missing.
    ///
    /// New options start as [`Value::default`]: empty text, zero facets, no range.
    pub fn option_mut(&mut self, name: &str, section: &str) -> &mut Value {
        self.section_mut(section)
            .entry(name.to_string())
            .or_default()
    }

    /// Look an option up without creating anything.
    pub fn option(&self, name: &str, section: &str) -> Option<&Value> {
        self.sections.get(section).and_then(|s| s.get(name))
    }

    /// Get a section, creating it if missing.
    pub fn section_mut(&mut self, section: &str) -> &mut Section {
        self.sections.entry(section.to_string()).or_default()
    }

    pub fn section(&self, section: &str) -> Option<&Section> {
        self.sections.get(section)
    }

    pub fn option_exists(&self, name: &str, section: &str) -> bool {
        self.option(name, section).is_some()
    }

    pub fn section_exists(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Remove an option. Returns whether it existed.
    pub fn erase_option(&mut self, name: &str, section: &str) -> bool {
        self.sections
            .get_mut(section)
            .is_some_and(|s| s.shift_remove(name).is_some())
    }

    /// Remove a section with all its options. Returns whether it existed.
    pub fn erase_section(&mut self, section: &str) -> bool {
        self.sections.shift_remove(section).is_some()
    }

    /// Copy sections and options from `defaults` that are not present yet.
    ///
    /// Existing options are never overwritten, so this can run before or after
    /// parsing with the same result for keys the file defines.
    pub fn seed_defaults(&mut self, defaults: &Store) {
        for (section_name, section) in defaults {
            let target = self.section_mut(section_name);
            for (name, value) in section {
                target
                    .entry(name.clone())
                    .or_insert_with(|| value.clone());
            }
        }
    }

    /// Remove every section and option.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate `(section name, section)` pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Section> {
        self.sections.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Section> {
        self.sections.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = (&'a String, &'a Section);
    type IntoIter = indexmap::map::Iter<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

impl<'a> IntoIterator for &'a mut Store {
    type Item = (&'a String, &'a mut Section);
    type IntoIter = indexmap::map::IterMut<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter_mut()
    }
}

/// Build a store from `(section, name, value)` triples. Later duplicates win.
impl<S, N, V> FromIterator<(S, N, V)> for Store
where
    S: AsRef<str>,
    N: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (S, N, V)>>(iter: I) -> Self {
        let mut store = Store::new();
        for (section, name, value) in iter {
            store
                .section_mut(section.as_ref())
                .insert(name.into(), value.into());
        }
        store
    }
}
