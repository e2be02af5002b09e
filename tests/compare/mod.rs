use error_detail::{
    contains, detail, is, is_not, join, join_to_err, not_contains, Detail, PlainError,
};
use std::error::Error;

fn some(err: &dyn Error) -> Option<&dyn Error> {
    Some(err)
}

#[test]
fn is_cases() {
    let e1 = detail!("test error");
    let e2 = detail!("test error");
    let other = detail!("test error 2");

    let cases: [(&str, Option<&dyn Error>, Option<&dyn Error>, bool); 5] = [
        ("err is none", None, some(&e1), false),
        ("target is none", some(&e1), None, false),
        ("both none", None, None, false),
        ("same message", some(&e1), some(&e2), true),
        ("different message", some(&e1), some(&other), false),
    ];

    for (name, err, target, want) in cases {
        assert_eq!(is(err, target), want, "is: {name}");
        assert_eq!(is_not(err, target), !want, "is_not: {name}");
    }
}

#[test]
fn is_compares_detailed_with_plain() {
    let detailed = detail!("timeout");
    let plain = PlainError::new("timeout");

    assert!(is(Some(&detailed), Some(&plain)));
    assert!(is(Some(&plain), Some(&detailed)));
    assert!(is(Some(&plain), Some(&PlainError::new("timeout"))));
}

#[test]
fn is_ignores_location_differences() {
    let a = Detail::from_parts("a.rs", 1, "f", "same", "s1");
    let b = Detail::from_parts("b.rs", 2, "g", "same", "s2");

    assert!(is(Some(&a), Some(&b)));
}

#[test]
fn contains_cases() {
    let haystack = detail!("test error target");
    let plain_haystack = detail!("test error");
    let needle = detail!("target");

    let cases: [(&str, Option<&dyn Error>, Option<&dyn Error>, bool); 5] = [
        ("target contained", some(&haystack), some(&needle), true),
        ("target not contained", some(&plain_haystack), some(&needle), false),
        ("err is none", None, some(&needle), false),
        ("target is none", some(&haystack), None, false),
        ("both none", None, None, false),
    ];

    for (name, err, target, want) in cases {
        assert_eq!(contains(err, target), want, "contains: {name}");
        assert_eq!(not_contains(err, target), !want, "not_contains: {name}");
    }
}

#[test]
fn contains_does_not_see_the_wire_form() {
    let err = detail!("disk full");
    let marker = PlainError::new("[STACK]");

    assert!(!contains(Some(&err), Some(&marker)));
}

#[test]
fn join_uses_messages_and_separator() {
    let e1 = Detail::from_parts("a.rs", 1, "f", "a", "s");
    let e2 = Detail::from_parts("b.rs", 2, "g", "b", "s");

    assert_eq!(join([&e1, &e2], ", "), "a, b");
}

#[test]
fn join_mixes_detailed_and_plain() {
    let errs: Vec<Box<dyn Error>> =
        vec![Box::new(detail!("first")), Box::new(PlainError::new("second\nline"))];

    assert_eq!(join(&errs, " | "), "first | second line");
}

#[test]
fn join_edge_cases() {
    let empty: [Detail; 0] = [];
    assert_eq!(join(&empty, ", "), "");
    assert_eq!(join([detail!("only")], ", "), "only");
}

#[test]
fn join_to_err_returns_plain_error() {
    let err = join_to_err([detail!("a"), detail!("b")], "; ");

    assert_eq!(err.to_string(), "a; b");
    assert!(!error_detail::is_detailed(Some(&err)));
}
