//! Property and boundary tests for the round-trip contract between the parse
//! and print directions.

use bidicomb::backtracking::BacktrackingExt;
use bidicomb::cursor::Cursor;
use bidicomb::cursors::ByteCursor;
use bidicomb::fail::{Fail, fail};
use bidicomb::int::{int, int_radix};
use bidicomb::float::float;
use bidicomb::literal::literal;
use bidicomb::many::many;
use bidicomb::map::MapExt;
use bidicomb::or::OrExt;
use bidicomb::parser::Parser;
use bidicomb::printer::Printer;
use bidicomb::then::ThenExt;
use bidicomb::uuid::{Uuid, uuid};
use proptest::prelude::*;

proptest! {
    #[test]
    fn int_i64_round_trips(value: i64) {
        let parser = int::<i64>();
        let printed = parser.print_all(&value).unwrap();
        prop_assert_eq!(parser.parse_all(&printed).unwrap(), value);
    }

    #[test]
    fn int_i8_round_trips(value: i8) {
        let parser = int::<i8>();
        let printed = parser.print_all(&value).unwrap();
        prop_assert_eq!(parser.parse_all(&printed).unwrap(), value);
    }

    #[test]
    fn int_u128_round_trips(value: u128) {
        let parser = int::<u128>();
        let printed = parser.print_all(&value).unwrap();
        prop_assert_eq!(parser.parse_all(&printed).unwrap(), value);
    }

    #[test]
    fn int_hex_round_trips(value: u64) {
        let parser = int_radix::<u64>(16);
        let printed = parser.print_all(&value).unwrap();
        prop_assert_eq!(parser.parse_all(&printed).unwrap(), value);
    }

    #[test]
    fn int_base_36_round_trips(value: i32) {
        let parser = int_radix::<i32>(36);
        let printed = parser.print_all(&value).unwrap();
        prop_assert_eq!(parser.parse_all(&printed).unwrap(), value);
    }

    #[test]
    fn float_round_trips(value: f64) {
        prop_assume!(!value.is_nan());
        let parser = float::<f64>();
        let printed = parser.print_all(&value).unwrap();
        prop_assert_eq!(parser.parse_all(&printed).unwrap(), value);
    }

    #[test]
    fn uuid_round_trips(bytes: [u8; 16]) {
        let value = Uuid::from_bytes(bytes);
        let parser = uuid();
        let printed = parser.print_all(&value).unwrap();
        prop_assert_eq!(parser.parse_all(&printed).unwrap(), value);
    }

    #[test]
    fn literal_repetition_round_trips(count in 0usize..32) {
        let parser = many(literal("ab"));
        let outputs = vec![(); count];
        let printed = parser.print_all(&outputs).unwrap();
        prop_assert_eq!(printed.len(), count * 2);
        prop_assert_eq!(parser.parse_all(&printed).unwrap().len(), count);
    }
}

#[test]
fn alternation_is_deterministic() {
    // Both orderings must pick the branch that matches, regardless of which
    // is declared first.
    let input = b"New York, Hello!";
    let forward = literal("Berlin").or(literal("New York"));
    let backward = literal("New York").or(literal("Berlin"));

    let ((), rest) = forward.parse(ByteCursor::new(input)).unwrap();
    assert_eq!(rest.position(), 8);
    let ((), rest) = backward.parse(ByteCursor::new(input)).unwrap();
    assert_eq!(rest.position(), 8);
}

#[test]
fn alternation_prefers_earlier_branch_on_overlap() {
    let parser = literal("New").map(|()| "short").or(literal("New York").map(|()| "long"));
    let (choice, _) = parser.parse(ByteCursor::new(b"New York")).unwrap();
    assert_eq!(choice, "short");
}

#[test]
fn repetition_over_failing_child_is_empty_success() {
    let parser: bidicomb::many::Many<Fail<u8>> = many(fail());
    let (outputs, rest) = parser.parse(ByteCursor::new(b"anything")).unwrap();
    assert!(outputs.is_empty());
    assert_eq!(rest.position(), 0);
}

#[test]
fn overflow_boundary_i8() {
    assert_eq!(int::<i8>().parse_all(b"127").unwrap(), 127);
    assert_eq!(int::<i8>().parse_all(b"-128").unwrap(), -128);

    let error = int::<i8>().parse_all(b"128").unwrap_err();
    assert!(error.to_string().contains("overflowed 127"));
}

#[test]
fn overflow_boundary_i64() {
    assert_eq!(
        int::<i64>().parse_all(b"9223372036854775807").unwrap(),
        i64::MAX
    );
    let error = int::<i64>().parse_all(b"9223372036854775808").unwrap_err();
    assert!(error.to_string().contains("overflowed 9223372036854775807"));
}

#[test]
fn uuid_consumes_exactly_36_bytes() {
    let cursor = ByteCursor::new(b"deadbeef-dead-beef-dead-beefdeadbeef,tail");
    let (_, rest) = uuid().parse(cursor).unwrap();
    assert_eq!(rest.position(), 36);
}

#[test]
fn backtracking_failed_sequence_leaves_no_trace() {
    // Without restoration the partial match of the first branch would
    // poison the second.
    let parser = literal("item=")
        .skip_then(int::<i64>())
        .backtracking()
        .or(literal("item").map(|()| 0).backtracking());

    let (value, _) = parser.parse(ByteCursor::new(b"item=42")).unwrap();
    assert_eq!(value, 42);
    let (value, _) = parser.parse(ByteCursor::new(b"item!")).unwrap();
    assert_eq!(value, 0);
}

#[test]
fn sequencing_round_trips_through_void_legs() {
    let parser = literal("(")
        .skip_then(int::<i64>())
        .then(literal(",").skip_then(int::<i64>()))
        .then_skip(literal(")"));

    let printed = parser.print_all(&(3, -4)).unwrap();
    assert_eq!(printed, b"(3,-4)".to_vec());
    assert_eq!(parser.parse_all(&printed).unwrap(), (3, -4));
}
