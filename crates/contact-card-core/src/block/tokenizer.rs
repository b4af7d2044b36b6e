use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

const BIRTHDAY_KEY: &str = "birthday";

/// Field key to ordered values, as aggregated from the lines of one block.
///
/// Keys are trimmed and lower-cased. A key whose only line had an empty
/// value maps to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<String, Vec<String>>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Values for `key`, or an empty slice when the key never appeared.
    pub fn values(&self, key: &str) -> &[String] {
        self.get(key).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }

    /// Appends `values` to `key`, creating the entry when missing.
    pub fn append(&mut self, key: String, values: Vec<String>) {
        match self.0.entry(key) {
            btree_map::Entry::Occupied(mut entry) => entry.get_mut().extend(values),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(values);
            }
        }
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Aggregates `key: value` lines into a [`FieldMap`].
///
/// Lines are expected to be trimmed and non-empty already. Lines without a
/// colon are ignored. Repeated keys append to the values already collected.
pub fn tokenize<I, S>(lines: I) -> FieldMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = FieldMap::new();

    for line in lines {
        let Some((key_part, value_part)) = line.as_ref().split_once(':') else {
            continue;
        };

        let key = key_part.trim().to_lowercase();
        let value = strip_brackets(value_part.trim());
        let values = decode_values(&key, value);
        map.append(key, values);
    }

    map
}

fn strip_brackets(value: &str) -> &str {
    value
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(value)
}

fn decode_values(key: &str, value: &str) -> Vec<String> {
    if key == BIRTHDAY_KEY {
        return vec![value.to_string()];
    }

    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
