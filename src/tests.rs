use std::collections::BTreeMap;

use bytes::Bytes;

use super::*;

#[test]
fn test_decode_integer() {
    assert_eq!(decode_one(b"i42e").unwrap(), Value::Integer(42));
    assert_eq!(decode_one(b"i-42e").unwrap(), Value::Integer(-42));
    assert_eq!(decode_one(b"i0e").unwrap(), Value::Integer(0));
    assert_eq!(
        decode_one(b"i9223372036854775807e").unwrap(),
        Value::Integer(i64::MAX)
    );
    assert_eq!(
        decode_one(b"i-9223372036854775808e").unwrap(),
        Value::Integer(i64::MIN)
    );
}

#[test]
fn test_decode_integer_invalid() {
    for input in [
        b"ie".as_slice(),
        b"i-0e",
        b"i03e",
        b"i-e",
        b"i+5e",
        b"i4 2e",
        b"i12x3e",
    ] {
        assert!(matches!(
            decode_one(input),
            Err(BencodeError::MalformedInteger(_))
        ));
    }
}

#[test]
fn test_decode_integer_overflow_rejected() {
    // One past i64::MAX; must fail, never wrap.
    assert!(matches!(
        decode_one(b"i9223372036854775808e"),
        Err(BencodeError::MalformedInteger(_))
    ));
}

#[test]
fn test_decode_integer_missing_terminator() {
    assert_eq!(decode_one(b"i10"), Err(BencodeError::MissingTerminator));
}

#[test]
fn test_decode_bytes() {
    assert_eq!(
        decode_one(b"4:spam").unwrap(),
        Value::Bytes(Bytes::from_static(b"spam"))
    );
}

#[test]
fn test_decode_bytes_empty() {
    // Zero length is a valid, empty byte string consuming exactly two bytes.
    let (value, next) = decode(b"0:", 0).unwrap();
    assert_eq!(value, Value::Bytes(Bytes::from_static(b"")));
    assert_eq!(next, 2);
}

#[test]
fn test_decode_bytes_invalid() {
    assert_eq!(
        decode_one(b"4spam"),
        Err(BencodeError::MissingLengthSeparator)
    );
    assert_eq!(decode_one(b"5:ab"), Err(BencodeError::TruncatedData));
    // Length prefix overflows usize.
    assert_eq!(
        decode_one(b"99999999999999999999:a"),
        Err(BencodeError::InvalidLength)
    );
}

#[test]
fn test_decode_dispatch_errors() {
    assert_eq!(decode_one(b""), Err(BencodeError::MissingData));
    assert_eq!(decode_one(b"x"), Err(BencodeError::InvalidFormat(b'x')));
    assert_eq!(decode(b"i42e", 4), Err(BencodeError::MissingData));
}

#[test]
fn test_decode_list() {
    let result = decode_one(b"l3:abei43ee").unwrap();
    match result {
        Value::List(l) => {
            assert_eq!(l.len(), 2);
            assert_eq!(l[0], Value::Bytes(Bytes::from_static(b"abe")));
            assert_eq!(l[1], Value::Integer(43));
        }
        _ => panic!("expected list"),
    }
}

#[test]
fn test_decode_list_empty_and_truncated() {
    assert_eq!(decode_one(b"le").unwrap(), Value::List(vec![]));
    assert_eq!(decode_one(b"l"), Err(BencodeError::TruncatedList));
    assert_eq!(decode_one(b"l3:abe"), Err(BencodeError::TruncatedList));
}

#[test]
fn test_decode_dict() {
    let result = decode_one(b"d3:cow3:moo4:spam4:eggse").unwrap();
    match result {
        Value::Dict(d) => {
            assert_eq!(d.len(), 2);
            assert_eq!(
                d.get(b"cow".as_slice()),
                Some(&Value::Bytes(Bytes::from_static(b"moo")))
            );
        }
        _ => panic!("expected dict"),
    }
}

#[test]
fn test_decode_dict_empty_and_truncated() {
    assert_eq!(decode_one(b"de").unwrap(), Value::Dict(BTreeMap::new()));
    assert_eq!(decode_one(b"d"), Err(BencodeError::TruncatedDictionary));
    // Key present but the buffer ends before its value.
    assert_eq!(decode_one(b"d3:foo"), Err(BencodeError::TruncatedDictionary));
}

#[test]
fn test_decode_dict_non_bytestring_key() {
    assert_eq!(
        decode_one(b"di5ei10ee"),
        Err(BencodeError::NonByteStringKey)
    );
}

#[test]
fn test_decode_dict_duplicate_key() {
    assert_eq!(
        decode_one(b"d3:fooi1e3:fooi2ee"),
        Err(BencodeError::DuplicateKey("foo".into()))
    );
}

#[test]
fn test_decode_nesting_limit() {
    let shallow = b"llllllllll".iter().chain(b"eeeeeeeeee").copied().collect::<Vec<u8>>();
    assert!(decode_one(&shallow).is_ok());

    let deep = vec![b'l'; 100];
    assert_eq!(decode_one(&deep), Err(BencodeError::NestingTooDeep));
}

#[test]
fn test_decode_at_offset() {
    let data = b"i42e4:spam";
    let (value, next) = decode(data, 0).unwrap();
    assert_eq!(value, Value::Integer(42));
    assert_eq!(next, 4);
    let (value, next) = decode(data, next).unwrap();
    assert_eq!(value, Value::Bytes(Bytes::from_static(b"spam")));
    assert_eq!(next, data.len());
}

#[test]
fn test_decode_one_ignores_trailing_data() {
    assert_eq!(decode_one(b"i42eXtra").unwrap(), Value::Integer(42));
}

#[test]
fn test_encode_integer() {
    assert_eq!(encode(&Value::Integer(42)), b"i42e");
    assert_eq!(encode(&Value::Integer(-42)), b"i-42e");
    assert_eq!(encode(&Value::Integer(0)), b"i0e");
}

#[test]
fn test_encode_bytes() {
    assert_eq!(encode(&Value::Bytes(Bytes::from_static(b"spam"))), b"4:spam");
    assert_eq!(encode(&Value::Bytes(Bytes::from_static(b""))), b"0:");
}

#[test]
fn test_encode_list() {
    let list = Value::List(vec![
        Value::Bytes(Bytes::from_static(b"abe")),
        Value::Integer(43),
    ]);
    assert_eq!(encode(&list), b"l3:abei43ee");
    assert_eq!(encode(&Value::List(vec![])), b"le");
}

#[test]
fn test_encode_dict_sorts_keys() {
    // Insertion order must not leak into the output.
    let mut dict = BTreeMap::new();
    dict.insert(Bytes::from_static(b"b"), Value::Integer(2));
    dict.insert(Bytes::from_static(b"a"), Value::Integer(1));
    assert_eq!(encode(&Value::Dict(dict)), b"d1:ai1e1:bi2ee");
    assert_eq!(encode(&Value::Dict(BTreeMap::new())), b"de");
}

#[test]
fn test_roundtrip_torrent_shaped() {
    // Keys are already in canonical order, so the bytes round-trip exactly.
    let original = b"d8:announce15:http://test.com4:infod4:name4:test12:piece lengthi16384eee";
    let decoded = decode_one(original).unwrap();
    assert_eq!(encode(&decoded), original);
}

#[test]
fn test_roundtrip_constructed() {
    let mut info = BTreeMap::new();
    info.insert(Bytes::from_static(b"name"), Value::string("example.txt"));
    info.insert(Bytes::from_static(b"length"), Value::Integer(1024));

    let mut root = BTreeMap::new();
    root.insert(Bytes::from_static(b"info"), Value::Dict(info));
    root.insert(
        Bytes::from_static(b"nums"),
        Value::List(vec![Value::Integer(-1), Value::Integer(0), Value::string("")]),
    );

    let original = Value::Dict(root);
    assert_eq!(decode_one(&encode(&original)).unwrap(), original);
}

#[test]
fn test_get() {
    let dict = decode_one(b"d3:abe2:efe").unwrap();
    assert_eq!(
        dict.get(b"abe").unwrap(),
        &Value::Bytes(Bytes::from_static(b"ef"))
    );
    assert_eq!(dict.get(b"zzz"), Err(BencodeError::KeyNotFound));
    // No prefix matching.
    assert_eq!(dict.get(b"ab"), Err(BencodeError::KeyNotFound));
    // Lookup on a non-dictionary misses the same way.
    assert_eq!(Value::Integer(1).get(b"abe"), Err(BencodeError::KeyNotFound));
}

#[test]
fn test_value_accessors() {
    let value = Value::Integer(42);
    assert_eq!(value.as_integer(), Some(42));
    assert!(value.as_bytes().is_none());

    let value = Value::Bytes(Bytes::from_static(b"test"));
    assert_eq!(value.as_str(), Some("test"));
    assert!(value.as_integer().is_none());

    let value = Value::List(vec![]);
    assert!(value.as_list().is_some());
    assert!(value.as_dict().is_none());

    let value = decode_one(b"d3:foo3:bare").unwrap();
    assert!(value.as_dict().is_some());
    assert!(value.into_dict().unwrap().contains_key(b"foo".as_slice()));
}

#[test]
fn test_display_integer_and_bytes() {
    assert_eq!(Value::Integer(-7).to_string(), "-7");
    // Printable ASCII passes through; everything else becomes '.'.
    let bytes = Value::Bytes(Bytes::from_static(b"sp\x01am\xff"));
    assert_eq!(bytes.to_string(), "sp.am.");
}

#[test]
fn test_display_nested() {
    let list = decode_one(b"l3:abei43ee").unwrap();
    assert_eq!(list.to_string(), "{\nabe\n43\n}");

    let dict = decode_one(b"d1:ai1e1:bl2:xyee").unwrap();
    assert_eq!(dict.to_string(), "{\na => 1\nb => {\nxy\n}\n}");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        BencodeError::InvalidFormat(b'x').to_string(),
        "invalid format: unexpected byte 0x78"
    );
    assert_eq!(
        BencodeError::DuplicateKey("foo".into()).to_string(),
        "duplicate dictionary key: foo"
    );
}
