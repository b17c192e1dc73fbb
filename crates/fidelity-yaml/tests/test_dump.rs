//! Dumping behavior: exact output shapes, quoting, styles, options.

use fidelity_yaml::{dump, dump_with, DumpOptions, LineBreak, Value};

fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Value {
    Value::mapping(entries)
}

fn seq(items: impl IntoIterator<Item = Value>) -> Value {
    Value::sequence(items)
}

#[test]
fn test_nested_lists_indent_compactly() {
    let doc = map([(
        Value::from("a"),
        seq([
            Value::Int(1),
            seq([
                Value::Int(2),
                Value::Int(3),
                seq([Value::Int(4), Value::Int(5)]),
            ]),
        ]),
    )]);

    assert_eq!(
        dump(&doc).unwrap(),
        "a:\n  - 1\n  - - 2\n    - 3\n    - - 4\n      - 5\n"
    );
}

#[test]
fn test_list_of_mappings_with_non_string_keys() {
    let doc = seq([
        Value::Null,
        map([
            (Value::Int(1), Value::Null),
            (Value::Float(123.34), Value::from("tha")),
        ]),
    ]);

    assert_eq!(dump(&doc).unwrap(), "-\n- 1:\n  '123.34': tha\n");
}

#[test]
fn test_bytes_dump_as_text() {
    let doc = map([(Value::Bytes(b"a".to_vec()), Value::Bytes(b"foo".to_vec()))]);
    assert_eq!(dump(&doc).unwrap(), "a: foo\n");

    let err = dump(&Value::Bytes(vec![0xff, 0xfe])).unwrap_err();
    assert!(err.to_string().contains("UTF-8"));
}

#[test]
fn test_booleans_dump_as_yes_and_no() {
    let doc = map([
        (Value::from("on"), Value::Bool(true)),
        (Value::from("off"), Value::Bool(false)),
    ]);
    assert_eq!(dump(&doc).unwrap(), "'on': yes\n'off': no\n");
}

#[test]
fn test_floats_are_always_quoted() {
    let doc = map([
        (Value::from("a"), Value::Float(1.0)),
        (Value::from("b"), Value::Float(123.34)),
    ]);
    assert_eq!(dump(&doc).unwrap(), "a: '1.0'\nb: '123.34'\n");
}

#[test]
fn test_typed_looking_strings_are_quoted() {
    let doc = map([
        (Value::from("a"), Value::from("yes")),
        (Value::from("b"), Value::from("null")),
        (Value::from("c"), Value::from("2019-01-01")),
        (Value::from("d"), Value::from("007")),
        (Value::from("e"), Value::from("plain text")),
    ]);
    assert_eq!(
        dump(&doc).unwrap(),
        "a: 'yes'\nb: 'null'\nc: '2019-01-01'\nd: '007'\ne: plain text\n"
    );
}

#[test]
fn test_single_letter_booleans_are_quoted() {
    // YAML 1.1 resolves bare y/n as booleans, so they get the same
    // protective quoting as the longer forms.
    let doc = map([
        (Value::from("a"), Value::from("y")),
        (Value::from("b"), Value::from("N")),
        (Value::from("c"), Value::from("yn")),
    ]);
    assert_eq!(dump(&doc).unwrap(), "a: 'y'\nb: 'N'\nc: yn\n");
}

#[test]
fn test_canonical_integer_strings_stay_plain() {
    let doc = map([
        (Value::from("a"), Value::from("42")),
        (Value::from("b"), Value::Int(-3)),
    ]);
    assert_eq!(dump(&doc).unwrap(), "a: 42\nb: '-3'\n");
}

#[test]
fn test_multiline_text_uses_literal_blocks() {
    let doc = map([(Value::from("text"), Value::from("line1\nline2\n"))]);
    assert_eq!(dump(&doc).unwrap(), "text: |\n  line1\n  line2\n");

    let unterminated = map([(Value::from("text"), Value::from("line1\nline2"))]);
    assert_eq!(dump(&unterminated).unwrap(), "text: |-\n  line1\n  line2\n");
}

#[test]
fn test_null_and_empty_containers() {
    assert_eq!(dump(&Value::Null).unwrap(), "\n");
    assert_eq!(dump(&seq([])).unwrap(), "[]\n");
    assert_eq!(dump(&map([])).unwrap(), "{}\n");

    let doc = map([
        (Value::from("nothing"), Value::Null),
        (Value::from("empty_list"), seq([])),
        (Value::from("empty_map"), map([])),
    ]);
    assert_eq!(
        dump(&doc).unwrap(),
        "nothing:\nempty_list: []\nempty_map: {}\n"
    );
}

#[test]
fn test_empty_string_dumps_quoted() {
    assert_eq!(dump(&Value::from("")).unwrap(), "''\n");
}

#[test]
fn test_unicode_passes_through_unescaped() {
    let doc = map([(Value::from("héllo"), Value::from("çà et là"))]);
    assert_eq!(dump(&doc).unwrap(), "héllo: çà et là\n");
}

#[test]
fn test_key_order_is_preserved() {
    let doc = map([
        (Value::from("zebra"), Value::from("1")),
        (Value::from("apple"), Value::from("2")),
        (Value::from("mango"), Value::from("3")),
    ]);
    assert_eq!(dump(&doc).unwrap(), "zebra: 1\napple: 2\nmango: 3\n");
}

#[test]
fn test_dump_is_deterministic() {
    let doc = map([
        (Value::from("a"), seq([Value::from("x"), Value::Null])),
        (Value::from("b"), Value::Float(2.5)),
    ]);
    assert_eq!(dump(&doc).unwrap(), dump(&doc).unwrap());
}

#[test]
fn test_indent_option_widens_uniformly() {
    let doc = map([(Value::from("a"), seq([Value::from("x"), Value::from("y")]))]);
    let options = DumpOptions {
        indent: 4,
        ..Default::default()
    };
    assert_eq!(
        dump_with(&doc, &options).unwrap(),
        "a:\n    - x\n    - 'y'\n"
    );
}

#[test]
fn test_out_of_range_indent_falls_back() {
    let doc = map([(Value::from("a"), seq([Value::from("x")]))]);
    let options = DumpOptions {
        indent: 0,
        ..Default::default()
    };
    assert_eq!(dump_with(&doc, &options).unwrap(), "a:\n  - x\n");
}

#[test]
fn test_crlf_line_break_option() {
    let doc = map([(Value::from("a"), Value::from("1"))]);
    let options = DumpOptions {
        line_break: LineBreak::CrLf,
        ..Default::default()
    };
    assert_eq!(dump_with(&doc, &options).unwrap(), "a: 1\r\n");
}

#[test]
fn test_shared_values_are_expanded_not_anchored() {
    let shared = seq([Value::from("x"), Value::from("y")]);
    let doc = map([
        (Value::from("a"), shared.clone()),
        (Value::from("b"), shared),
    ]);
    let out = dump(&doc).unwrap();
    assert_eq!(out, "a:\n  - x\n  - 'y'\nb:\n  - x\n  - 'y'\n");
    assert!(!out.contains('&'));
    assert!(!out.contains('*'));
}

#[test]
fn test_control_characters_force_double_quotes() {
    let doc = map([(Value::from("bell"), Value::from("ding\u{7}"))]);
    assert_eq!(dump(&doc).unwrap(), "bell: \"ding\\x07\"\n");
}

#[test]
fn test_mapping_under_list_item_is_compact() {
    let doc = seq([
        map([
            (Value::from("name"), Value::from("first")),
            (Value::from("rank"), Value::from("1")),
        ]),
        map([(Value::from("name"), Value::from("second"))]),
    ]);
    assert_eq!(
        dump(&doc).unwrap(),
        "- name: first\n  rank: 1\n- name: second\n"
    );
}
