use thiserror::Error;

/// Errors produced while decoding bencode data or looking up dictionary keys.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BencodeError {
    /// The buffer is empty, or ended where a value was expected.
    #[error("missing data")]
    MissingData,

    /// The next byte is not a valid type tag (`i`, `l`, `d`, or a digit).
    #[error("invalid format: unexpected byte 0x{0:02x}")]
    InvalidFormat(u8),

    /// An integer has no closing `e`.
    #[error("integer is missing its 'e' terminator")]
    MissingTerminator,

    /// An integer body is not a valid decimal numeral (empty, non-digit
    /// characters, a leading zero, `-0`, or a magnitude that overflows i64).
    #[error("malformed integer: {0}")]
    MalformedInteger(String),

    /// A byte string has no `:` between its length and its data.
    #[error("byte string is missing its ':' length separator")]
    MissingLengthSeparator,

    /// A byte string length prefix is not a valid non-negative decimal.
    #[error("invalid byte string length")]
    InvalidLength,

    /// A byte string declares more data than the buffer holds.
    #[error("byte string data truncated")]
    TruncatedData,

    /// The buffer ended before a list's closing `e`.
    #[error("list is missing its 'e' terminator")]
    TruncatedList,

    /// The buffer ended before a dictionary's closing `e`.
    #[error("dictionary is missing its 'e' terminator")]
    TruncatedDictionary,

    /// A dictionary key decoded to something other than a byte string.
    #[error("dictionary key is not a byte string")]
    NonByteStringKey,

    /// The same key appeared twice in one dictionary.
    #[error("duplicate dictionary key: {0}")]
    DuplicateKey(String),

    /// Nesting exceeded the maximum depth (64 levels).
    #[error("nesting too deep")]
    NestingTooDeep,

    /// A dictionary lookup found no entry for the requested key.
    ///
    /// Unlike the other kinds, this is an ordinary at-call-site condition
    /// rather than a format defect.
    #[error("key not found")]
    KeyNotFound,
}
