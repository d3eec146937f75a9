//! Core EXIF data structures
//!
//! `TagValue` is what the decoder produces for one directory entry, typed by
//! the entry's field type. `ExifValue` is the flattened form handed to
//! callers once a record has been resolved. Both are stored in a
//! `FieldMap`, an insertion-ordered map keyed by field name.

use std::collections::HashMap;
use std::fmt;

/// Decoded value of a single directory entry
///
/// Scalar variants are produced when the entry count is 1, sequence variants
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Byte(u8),
    Bytes(Vec<u8>),
    Ascii(String),
    Short(u16),
    Shorts(Vec<u16>),
    Long(u32),
    Longs(Vec<u32>),
    Rational(f64),
    Rationals(Vec<f64>),
    SLong(i32),
    SLongs(Vec<i32>),
    SRational(f64),
    SRationals(Vec<f64>),
}

impl TagValue {
    /// Returns the value if it is a single integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TagValue::Byte(v) => Some(*v as i64),
            TagValue::Short(v) => Some(*v as i64),
            TagValue::Long(v) => Some(*v as i64),
            TagValue::SLong(v) => Some(*v as i64),
            _ => None,
        }
    }

    /// Returns the elements if the value is a sequence of integers
    pub fn as_integers(&self) -> Option<Vec<i64>> {
        match self {
            TagValue::Bytes(v) => Some(v.iter().map(|&x| x as i64).collect()),
            TagValue::Shorts(v) => Some(v.iter().map(|&x| x as i64).collect()),
            TagValue::Longs(v) => Some(v.iter().map(|&x| x as i64).collect()),
            TagValue::SLongs(v) => Some(v.iter().map(|&x| x as i64).collect()),
            _ => None,
        }
    }

    /// Returns the bytes if the value is a byte sequence
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            TagValue::Bytes(v) => Some(v),
            _ => None,
        }
    }
}

/// A field value as exposed in the final record
#[derive(Debug, Clone, PartialEq)]
pub enum ExifValue {
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<ExifValue>),
}

impl ExifValue {
    fn list<T, F>(values: Vec<T>, f: F) -> ExifValue
    where
        F: Fn(T) -> ExifValue,
    {
        ExifValue::List(values.into_iter().map(f).collect())
    }

    /// Returns the value if it is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ExifValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value if it is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ExifValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value if it is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExifValue::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the elements if the value is a list
    pub fn as_list(&self) -> Option<&[ExifValue]> {
        match self {
            ExifValue::List(v) => Some(v),
            _ => None,
        }
    }
}

impl From<TagValue> for ExifValue {
    fn from(value: TagValue) -> Self {
        match value {
            TagValue::Byte(v) => ExifValue::Integer(v as i64),
            TagValue::Short(v) => ExifValue::Integer(v as i64),
            TagValue::Long(v) => ExifValue::Integer(v as i64),
            TagValue::SLong(v) => ExifValue::Integer(v as i64),
            TagValue::Rational(v) | TagValue::SRational(v) => ExifValue::Float(v),
            TagValue::Ascii(s) => ExifValue::Text(s),
            TagValue::Bytes(v) => ExifValue::list(v, |x| ExifValue::Integer(x as i64)),
            TagValue::Shorts(v) => ExifValue::list(v, |x| ExifValue::Integer(x as i64)),
            TagValue::Longs(v) => ExifValue::list(v, |x| ExifValue::Integer(x as i64)),
            TagValue::SLongs(v) => ExifValue::list(v, |x| ExifValue::Integer(x as i64)),
            TagValue::Rationals(v) | TagValue::SRationals(v) => ExifValue::list(v, ExifValue::Float),
        }
    }
}

impl fmt::Display for ExifValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifValue::Integer(v) => write!(f, "{}", v),
            ExifValue::Float(v) => write!(f, "{}", v),
            ExifValue::Text(s) => write!(f, "{}", s),
            ExifValue::List(values) => {
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                Ok(())
            }
        }
    }
}

/// Insertion-ordered map from field name to value
///
/// Inserting an existing name replaces the value but keeps the name at the
/// position of its first insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMap<V> {
    /// Fields in insertion order
    fields: Vec<(&'static str, V)>,
    /// Position of each name in `fields`
    positions: HashMap<&'static str, usize>,
}

impl<V> FieldMap<V> {
    /// Creates an empty map
    pub fn new() -> Self {
        FieldMap {
            fields: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Inserts a field, overwriting any earlier value under the same name
    pub fn insert(&mut self, name: &'static str, value: V) {
        match self.positions.get(name) {
            Some(&pos) => self.fields[pos].1 = value,
            None => {
                self.positions.insert(name, self.fields.len());
                self.fields.push((name, value));
            }
        }
    }

    /// Gets a field by name
    pub fn get(&self, name: &str) -> Option<&V> {
        self.positions.get(name).map(|&pos| &self.fields[pos].1)
    }

    /// Checks whether a field is present
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Iterates fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &V)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    /// Field names in insertion order
    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Merges `other` into this map; fields of `other` win on name clashes
    pub fn merge(&mut self, other: FieldMap<V>) {
        for (name, value) in other.fields {
            self.insert(name, value);
        }
    }
}

impl<V> Default for FieldMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(&'static str, V)> for FieldMap<V> {
    fn from_iter<I: IntoIterator<Item = (&'static str, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl<V> IntoIterator for FieldMap<V> {
    type Item = (&'static str, V);
    type IntoIter = std::vec::IntoIter<(&'static str, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Raw decoded fields of one directory
pub type TagMap = FieldMap<TagValue>;

/// Resolved metadata record: TIFF fields, then EXIF, then GPS
pub type ExifRecord = FieldMap<ExifValue>;

impl fmt::Display for FieldMap<ExifValue> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}
