use error_detail::{detail, Detail};

fn sample() -> Detail {
    Detail::from_parts("file.rs", 10, "function", "message", "stack trace ")
}

#[test]
fn display_renders_wire_form() {
    assert_eq!(
        sample().to_string(),
        "[CAUSE]: (file.rs:10) function: message [STACK]: stack trace "
    );
}

#[test]
fn cause_omits_stack() {
    let detail = Detail::from_parts("a.rs", 10, "f", "m", "s");
    assert_eq!(detail.cause(), "(a.rs:10) f: m");
}

#[test]
fn accessors_return_stored_fields() {
    let detail = sample();

    assert_eq!(detail.message(), "message");
    assert_eq!(detail.file(), "file.rs");
    assert_eq!(detail.line(), 10);
    assert_eq!(detail.func(), "function");
    assert_eq!(detail.stack(), "stack trace ");
}

#[test]
fn from_parts_cleans_message() {
    let detail = Detail::from_parts("a.rs", 1, "f", "bad [CAUSE]token\nand [STACK]line\r\nbreaks", "s");
    assert_eq!(detail.message(), "bad token and line breaks");
}

#[test]
fn from_parts_strips_nested_markers() {
    let stack = Detail::from_parts("a.rs", 1, "f", "a [[STACK]STACK]: b", "s");
    let cause = Detail::from_parts("a.rs", 1, "f", "x [[CAUSE]CAUSE] y", "s");

    assert_eq!(stack.message(), "a : b");
    assert_eq!(cause.message(), "x  y");
    assert_eq!(error_detail::details(Some(&stack)).unwrap(), stack);
}

#[test]
fn from_parts_normalizes_location_fields() {
    let detail = Detail::from_parts("C:/src/a.rs", 0, "app::load", "m", "  \n");

    assert_eq!(detail.file(), "C/src/a.rs");
    assert_eq!(detail.line(), 1);
    assert_eq!(detail.func(), "appload");
    assert_eq!(detail.stack(), "<unavailable>");
    assert_eq!(error_detail::details(Some(&detail)).unwrap(), detail);
}

#[test]
fn from_parts_fills_empty_names_and_trims_stack_start() {
    let detail = Detail::from_parts("", 7, "::", "m", "   0: main");

    assert_eq!(detail.file(), "unknown");
    assert_eq!(detail.func(), "unknown");
    assert_eq!(detail.stack(), "0: main");
    assert_eq!(error_detail::details(Some(&detail)).unwrap(), detail);
}

#[test]
fn line_is_zero_when_stored_line_overflows() {
    let text = "[CAUSE]: (a.rs:99999999999999) f: m [STACK]: s";
    let detail = error_detail::details(Some(&error_detail::PlainError::new(text))).unwrap();

    assert_eq!(detail.line(), 0);
    assert!(detail.cause().contains(":99999999999999)"));
}

#[test]
fn new_records_calling_function_file_and_line() {
    let (err, line) = (detail!("boom"), line!());

    assert_eq!(err.func(), "new_records_calling_function_file_and_line");
    assert_eq!(err.file(), "types/detail.rs");
    assert_eq!(err.line(), line);
    assert!(!err.stack().trim().is_empty());
}

#[test]
fn new_message_survives_round_trip() {
    let err = detail!("file not found");
    let parsed = error_detail::details(Some(&err)).unwrap();

    assert_eq!(parsed.message(), "file not found");
    assert_eq!(parsed.file(), err.file());
    assert_eq!(parsed.line(), err.line());
    assert_eq!(parsed.func(), err.func());
}

#[test]
fn new_survives_round_trip_unchanged() {
    let err = detail!("x");
    let parsed = error_detail::details(Some(&err)).unwrap();

    assert!(!err.stack().starts_with(char::is_whitespace));
    assert_eq!(parsed, err);
}

#[test]
fn new_strips_markers_from_arguments() {
    let err = detail!("a [CAUSE] b", "c\nd");
    assert_eq!(err.message(), "a  b c d");
}

#[test]
fn nested_detail_contributes_its_message_only() {
    let inner = detail!("disk full");
    let outer = detail!("save failed:", inner);

    assert_eq!(outer.message(), "save failed: disk full");
    assert!(!outer.message().contains("[CAUSE]"));
}

#[test]
fn print_methods_write_without_panicking() {
    let err = detail!("test");
    err.print_cause();
    err.print_stack_trace();
}

#[test]
fn detail_is_usable_as_boxed_error() {
    fn fails() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(detail!("boxed"))?
    }

    let err = fails().unwrap_err();
    assert!(err.to_string().starts_with("[CAUSE]: ("));
    assert!(err.to_string().contains(") fails: boxed [STACK]: "));
}

#[test]
fn clone_and_eq_compare_all_fields() {
    let err = sample();
    assert_eq!(err.clone(), err);
    assert_ne!(Detail::from_parts("file.rs", 11, "function", "message", "stack trace "), err);
}

#[cfg(feature = "serde")]
#[test]
fn serde_keeps_every_field() {
    let err = sample();
    let json = serde_json::to_string(&err).unwrap();
    let back: Detail = serde_json::from_str(&json).unwrap();

    assert_eq!(back, err);
    assert!(json.contains(r#""func":"function""#));
}
