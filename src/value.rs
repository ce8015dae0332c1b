use bytes::Bytes;
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write;

use super::error::BencodeError;

/// A bencode value.
///
/// Bencode has four data types: integers, byte strings, lists, and
/// dictionaries. This enum represents any bencode value and provides methods
/// for type-safe access.
///
/// Values are immutable once decoded. Decoded byte strings are owned copies
/// of the input bytes, so a decoded tree never borrows from (and may outlive)
/// the buffer it was parsed from.
///
/// # Examples
///
/// ```
/// use bencode::Value;
///
/// // Creating values directly
/// let int = Value::Integer(42);
/// let string = Value::string("hello");
/// let list = Value::List(vec![Value::Integer(1), Value::Integer(2)]);
///
/// // Using From implementations
/// let int: Value = 42i64.into();
/// let string: Value = "hello".into();
///
/// // Accessing values
/// assert_eq!(int.as_integer(), Some(42));
/// assert_eq!(string.as_str(), Some("hello"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    ///
    /// The wire format puts no bound on magnitude; an encoded integer that
    /// does not fit in an `i64` is rejected at decode time with
    /// [`BencodeError::MalformedInteger`] rather than wrapped.
    Integer(i64),
    /// A byte string (may or may not be valid UTF-8). Zero-length is valid.
    Bytes(Bytes),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary with byte string keys, kept sorted by raw key bytes so
    /// that encoding is canonical and lookup is `O(log n)`.
    Dict(BTreeMap<Bytes, Value>),
}

impl Value {
    /// Creates a byte string value from a UTF-8 string.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencode::Value;
    ///
    /// let value = Value::string("hello");
    /// assert_eq!(value.as_str(), Some("hello"));
    /// ```
    pub fn string(s: &str) -> Self {
        Value::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }

    /// Returns the value as an integer, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencode::Value;
    ///
    /// let int = Value::Integer(42);
    /// assert_eq!(int.as_integer(), Some(42));
    ///
    /// let string = Value::string("hello");
    /// assert_eq!(string.as_integer(), None);
    /// ```
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a byte string, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencode::Value;
    ///
    /// let value = Value::string("hello");
    /// assert_eq!(value.as_bytes().map(|b| b.as_ref()), Some(b"hello".as_slice()));
    /// ```
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a UTF-8 string, if it is a valid UTF-8 byte string.
    ///
    /// Returns `None` if the value is not a byte string or if the bytes are
    /// not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// Returns the value as a list, if it is one.
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the value as a dictionary reference, if it is one.
    pub fn as_dict(&self) -> Option<&BTreeMap<Bytes, Value>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes the value and returns the dictionary, if it is one.
    ///
    /// This avoids cloning the dictionary when you need ownership.
    pub fn into_dict(self) -> Option<BTreeMap<Bytes, Value>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key in this dictionary by exact byte match.
    ///
    /// Fails with [`BencodeError::KeyNotFound`] if the key is not present,
    /// or if this value is not a dictionary at all. There is no prefix or
    /// partial matching.
    ///
    /// # Examples
    ///
    /// ```
    /// use bencode::decode_one;
    ///
    /// let value = decode_one(b"d3:foo3:bare").unwrap();
    /// assert_eq!(value.get(b"foo").unwrap().as_str(), Some("bar"));
    /// assert!(value.get(b"missing").is_err());
    /// ```
    pub fn get(&self, key: &[u8]) -> Result<&Value, BencodeError> {
        match self {
            Value::Dict(d) => d.get(key).ok_or(BencodeError::KeyNotFound),
            _ => Err(BencodeError::KeyNotFound),
        }
    }
}

/// Human-readable rendering for diagnostics.
///
/// This is never the wire format and is not reversible. Integers render as
/// decimal; byte strings render each byte in the printable ASCII range
/// (32-126) as itself and every other byte as `.`; lists and dictionaries
/// render as braced, newline-joined renderings of their children.
///
/// # Examples
///
/// ```
/// use bencode::decode_one;
///
/// let value = decode_one(b"l3:abei43ee").unwrap();
/// assert_eq!(value.to_string(), "{\nabe\n43\n}");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Bytes(b) => fmt_bytes(b, f),
            Value::List(items) => {
                f.write_str("{\n")?;
                for item in items {
                    writeln!(f, "{}", item)?;
                }
                f.write_str("}")
            }
            Value::Dict(dict) => {
                f.write_str("{\n")?;
                for (key, value) in dict {
                    fmt_bytes(key, f)?;
                    f.write_str(" => ")?;
                    writeln!(f, "{}", value)?;
                }
                f.write_str("}")
            }
        }
    }
}

fn fmt_bytes(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for &byte in bytes {
        if (32..=126).contains(&byte) {
            f.write_char(byte as char)?;
        } else {
            f.write_char('.')?;
        }
    }
    Ok(())
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<BTreeMap<Bytes, Value>> for Value {
    fn from(d: BTreeMap<Bytes, Value>) -> Self {
        Value::Dict(d)
    }
}
