//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files and tracker
//! responses.
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use bencode::{decode, decode_one};
//!
//! // Decode an integer
//! let value = decode_one(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! // Decode a string
//! let value = decode_one(b"4:spam").unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//!
//! // Decode a list
//! let value = decode_one(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//!
//! // Decode a dictionary
//! let value = decode_one(b"d3:foo3:bare").unwrap();
//! let foo = value.get(b"foo").unwrap();
//! assert_eq!(foo.as_str(), Some("bar"));
//!
//! // Decode consecutive values by threading the offset through
//! let data = b"i1ei2e";
//! let (first, next) = decode(data, 0).unwrap();
//! let (second, end) = decode(data, next).unwrap();
//! assert_eq!(first.as_integer(), Some(1));
//! assert_eq!(second.as_integer(), Some(2));
//! assert_eq!(end, data.len());
//! ```
//!
//! ## Encoding bencode data
//!
//! ```
//! use bencode::{encode, Value};
//! use bytes::Bytes;
//! use std::collections::BTreeMap;
//!
//! // Encode an integer
//! assert_eq!(encode(&Value::Integer(42)), b"i42e");
//!
//! // Encode a string
//! assert_eq!(encode(&Value::string("hello")), b"5:hello");
//!
//! // Encode a list
//! let list = Value::List(vec![
//!     Value::Integer(1),
//!     Value::Integer(2),
//! ]);
//! assert_eq!(encode(&list), b"li1ei2ee");
//!
//! // Encode a dictionary; keys always come out sorted by raw byte value
//! let mut dict = BTreeMap::new();
//! dict.insert(Bytes::from_static(b"key"), Value::string("value"));
//! assert_eq!(encode(&Value::Dict(dict)), b"d3:key5:valuee");
//! ```
//!
//! ## Building complex structures
//!
//! ```
//! use bencode::Value;
//!
//! // Using From implementations for convenience
//! let int: Value = 42i64.into();
//! let string: Value = "hello".into();
//!
//! // Building a torrent-like structure
//! use std::collections::BTreeMap;
//! use bytes::Bytes;
//!
//! let mut info = BTreeMap::new();
//! info.insert(Bytes::from_static(b"name"), Value::string("example.txt"));
//! info.insert(Bytes::from_static(b"length"), Value::Integer(1024));
//! info.insert(Bytes::from_static(b"piece length"), Value::Integer(16384));
//!
//! let mut torrent = BTreeMap::new();
//! torrent.insert(Bytes::from_static(b"info"), Value::Dict(info));
//! torrent.insert(
//!     Bytes::from_static(b"announce"),
//!     Value::string("http://tracker.example.com/announce")
//! );
//! ```
//!
//! # Error Handling
//!
//! Decoding can fail for various reasons:
//!
//! - [`BencodeError::MissingData`] - Input ended where a value was expected
//! - [`BencodeError::InvalidFormat`] - Unknown type tag
//! - [`BencodeError::MalformedInteger`] - Bad integer body (e.g., leading zeros)
//! - [`BencodeError::DuplicateKey`] - Repeated dictionary key
//! - [`BencodeError::NestingTooDeep`] - Recursion limit exceeded (max 64 levels)
//!
//! Every failure is final for that decode call: no partial value is returned
//! and no recovery is attempted. Only [`BencodeError::KeyNotFound`], returned
//! by [`Value::get`], is an expected lookup miss rather than a format defect.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, decode_one};
pub use encode::encode;
pub use error::BencodeError;
pub use value::Value;

#[cfg(test)]
mod tests;
