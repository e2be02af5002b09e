use error_detail::traits::ResultExt;
use error_detail::{detail, Detail, DetailResult, PlainError};

#[test]
fn ok_passes_through() {
    let result: Result<u8, PlainError> = Ok(3);
    assert_eq!(result.detailed(), Ok(3));
}

#[test]
fn plain_error_is_attributed_to_call_site() {
    let result: Result<(), PlainError> = Err(PlainError::new("refused"));
    let err = result.detailed().unwrap_err();

    assert_eq!(err.message(), "refused");
    assert_eq!(err.func(), "plain_error_is_attributed_to_call_site");
    assert_eq!(err.file(), "traits/result_ext.rs");
}

#[test]
fn detailed_error_keeps_original_site() {
    let original = Detail::from_parts("src/db.rs", 88, "connect", "refused", "stack");
    let result: Result<(), Detail> = Err(original.clone());

    assert_eq!(result.detailed().unwrap_err(), original);
}

#[test]
fn none_becomes_nil_detail() {
    let missing: Option<u8> = None;
    let err = missing.detailed().unwrap_err();

    assert_eq!(err.message(), "<nil>");
    assert_eq!(Some(4).detailed(), Ok(4));
}

#[test]
fn question_mark_propagates_details() {
    fn parse_port(raw: &str) -> DetailResult<u16> {
        let port = raw.parse::<u16>().detailed()?;
        if port == 0 {
            return Err(detail!("port must be non-zero"));
        }
        Ok(port)
    }

    assert_eq!(parse_port("8080"), Ok(8080));
    assert_eq!(parse_port("0").unwrap_err().message(), "port must be non-zero");

    let err = parse_port("http").unwrap_err();
    assert_eq!(err.message(), "invalid digit found in string");
    assert_eq!(err.func(), "parse_port");
}
