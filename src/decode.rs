use super::error::BencodeError;
use super::value::Value;
use bytes::Bytes;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

const MAX_DEPTH: usize = 64;

/// Decodes the bencode value starting at `offset`.
///
/// Returns the decoded value together with the offset of the first byte past
/// it, so callers can decode several consecutive values from one buffer.
///
/// # Examples
///
/// ```
/// use bencode::{decode, Value};
///
/// let data = b"i42e4:spam";
/// let (value, next) = decode(data, 0).unwrap();
/// assert_eq!(value, Value::Integer(42));
/// let (value, next) = decode(data, next).unwrap();
/// assert_eq!(value.as_str(), Some("spam"));
/// assert_eq!(next, data.len());
/// ```
pub fn decode(data: &[u8], offset: usize) -> Result<(Value, usize), BencodeError> {
    let mut pos = offset;
    let value = decode_value(data, &mut pos, 0)?;
    Ok((value, pos))
}

/// Decodes a single value from the start of the buffer.
///
/// Bytes past the end of the first value are ignored; use [`decode`] and
/// compare the returned offset against the buffer length to detect them.
pub fn decode_one(data: &[u8]) -> Result<Value, BencodeError> {
    let (value, _) = decode(data, 0)?;
    Ok(value)
}

fn decode_value(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    if depth > MAX_DEPTH {
        return Err(BencodeError::NestingTooDeep);
    }

    if *pos >= data.len() {
        return Err(BencodeError::MissingData);
    }

    match data[*pos] {
        b'i' => decode_integer(data, pos),
        b'0'..=b'9' => decode_bytes(data, pos),
        b'l' => decode_list(data, pos, depth),
        b'd' => decode_dict(data, pos, depth),
        other => Err(BencodeError::InvalidFormat(other)),
    }
}

fn decode_integer(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    *pos += 1;

    let start = *pos;
    while *pos < data.len() && data[*pos] != b'e' {
        *pos += 1;
    }

    if *pos >= data.len() {
        return Err(BencodeError::MissingTerminator);
    }

    let text = std::str::from_utf8(&data[start..*pos])
        .map_err(|_| BencodeError::MalformedInteger("invalid utf-8".into()))?;
    *pos += 1;

    if text.is_empty() {
        return Err(BencodeError::MalformedInteger("empty".into()));
    }

    // Canonical form only: an optional '-' followed by digits, no leading
    // zero on a multi-digit magnitude, no -0.
    let magnitude = text.strip_prefix('-').unwrap_or(text);
    if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BencodeError::MalformedInteger(text.into()));
    }
    if magnitude.len() > 1 && magnitude.starts_with('0') {
        return Err(BencodeError::MalformedInteger("leading zero".into()));
    }
    if text == "-0" {
        return Err(BencodeError::MalformedInteger("negative zero".into()));
    }

    // Only overflow can fail here.
    let value: i64 = text
        .parse()
        .map_err(|_| BencodeError::MalformedInteger(text.into()))?;

    Ok(Value::Integer(value))
}

fn decode_bytes(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    let start = *pos;
    while *pos < data.len() && data[*pos] != b':' {
        *pos += 1;
    }

    if *pos >= data.len() {
        return Err(BencodeError::MissingLengthSeparator);
    }

    let len_str =
        std::str::from_utf8(&data[start..*pos]).map_err(|_| BencodeError::InvalidLength)?;

    let len: usize = len_str.parse().map_err(|_| BencodeError::InvalidLength)?;

    *pos += 1;

    if data.len() - *pos < len {
        return Err(BencodeError::TruncatedData);
    }

    let bytes = Bytes::copy_from_slice(&data[*pos..*pos + len]);
    *pos += len;

    Ok(Value::Bytes(bytes))
}

fn decode_list(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    *pos += 1;
    let mut items = Vec::new();

    while *pos < data.len() && data[*pos] != b'e' {
        items.push(decode_value(data, pos, depth + 1)?);
    }

    if *pos >= data.len() {
        return Err(BencodeError::TruncatedList);
    }

    *pos += 1;
    Ok(Value::List(items))
}

fn decode_dict(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    *pos += 1;
    let mut dict = BTreeMap::new();

    while *pos < data.len() && data[*pos] != b'e' {
        let key = match decode_value(data, pos, depth + 1)? {
            Value::Bytes(b) => b,
            _ => return Err(BencodeError::NonByteStringKey),
        };

        if *pos >= data.len() {
            return Err(BencodeError::TruncatedDictionary);
        }

        let value = decode_value(data, pos, depth + 1)?;
        match dict.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(slot) => {
                return Err(BencodeError::DuplicateKey(
                    String::from_utf8_lossy(slot.key()).into_owned(),
                ));
            }
        }
    }

    if *pos >= data.len() {
        return Err(BencodeError::TruncatedDictionary);
    }

    *pos += 1;
    Ok(Value::Dict(dict))
}
