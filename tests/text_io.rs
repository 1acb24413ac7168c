//! Text input and output for bit fields and sets

use bitfield_set::{BitField, BitFieldError, ErrorKind, IntegerSet};
use std::io::{BufRead, BufReader, Cursor};

#[test]
fn test_bitfield_output_format() {
    let mut bf = BitField::new(5).unwrap();
    bf.set_bit(0).unwrap();
    bf.set_bit(3).unwrap();

    assert_eq!(bf.to_string(), "1 0 0 1 0 ");
}

#[test]
fn test_bitfield_input_across_lines() {
    let mut bf = BitField::new(6).unwrap();
    bf.read_from(Cursor::new("1 1\n0\n\t0 1 1\n")).unwrap();

    assert_eq!(bf.to_string(), "1 1 0 0 1 1 ");
}

#[test]
fn test_bitfield_input_rejects_other_tokens() {
    let mut bf = BitField::new(3).unwrap();
    let err = bf.read_from("0 1 5".as_bytes()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err, BitFieldError::invalid_token("5", 2));
}

#[test]
fn test_set_output_format() {
    let mut set = IntegerSet::new(10).unwrap();
    assert_eq!(set.to_string(), "{ }");

    set.insert_all([7, 2, 5]).unwrap();
    assert_eq!(set.to_string(), "{ 2, 5, 7, }");
}

#[test]
fn test_set_input_terminator_only() {
    let mut set = IntegerSet::new(4).unwrap();
    set.insert(1).unwrap();

    set.read_from("-1".as_bytes()).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.max_power(), 4);
}

#[test]
fn test_set_input_out_of_range_leaves_partial_state() {
    let mut set = IntegerSet::new(5).unwrap();
    let err = set.read_from("3 7 -1".as_bytes()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(err, BitFieldError::index_out_of_bounds(7, 5));
    assert!(set.is_member(3).unwrap());
    assert_eq!(set.len(), 1);
}

#[test]
fn test_sequential_reads_share_one_stream() {
    let text = "1 0 1 1\n2 0 -1\n0 0 0 0\n";
    let mut reader = BufReader::new(text.as_bytes());

    let mut first = BitField::new(4).unwrap();
    let mut set = IntegerSet::new(4).unwrap();
    let mut second = BitField::new(4).unwrap();

    first.read_from(&mut reader).unwrap();
    set.read_from(&mut reader).unwrap();
    second.read_from(&mut reader).unwrap();

    assert_eq!(first.to_string(), "1 0 1 1 ");
    assert_eq!(set.to_string(), "{ 0, 2, }");
    assert_eq!(second, BitField::new(4).unwrap());

    let mut rest = String::new();
    reader.read_line(&mut rest).unwrap();
    assert_eq!(rest, "\n");
}

#[test]
fn test_output_of_one_field_is_input_of_another() {
    let mut source = BitField::new(70).unwrap();
    for i in [0, 1, 63, 64, 69] {
        source.set_bit(i).unwrap();
    }

    let mut copy = BitField::new(70).unwrap();
    copy.read_from(source.to_string().as_bytes()).unwrap();
    assert_eq!(copy, source);
}
