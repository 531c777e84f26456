use shelf_track_catalog::validate::MAX_ID;
use shelf_track_catalog::*;

#[test]
fn accepts_four_digit_ids() {
    let id = BookId::parse("3001").unwrap();
    assert_eq!(id.value(), 3001);
    assert_eq!(id.to_string(), "3001");
}

#[test]
fn keeps_leading_zeros_in_display() {
    let id = AuthorId::parse("0042").unwrap();
    assert_eq!(id.value(), 42);
    assert_eq!(id.to_string(), "0042");
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(BookId::parse(" 3001\n").unwrap().value(), 3001);
}

#[test]
fn rejects_wrong_length_ids() {
    for input in ["", "123", "12345", "   "] {
        assert!(BookId::parse(input).is_err(), "'{}' should be rejected", input);
    }
}

#[test]
fn rejects_non_digit_ids() {
    for input in ["12a4", "-123", "+123", "1.23", "١٢٣٤"] {
        assert!(AuthorId::parse(input).is_err(), "'{}' should be rejected", input);
    }
}

#[test]
fn id_error_names_the_kind() {
    let err = AuthorId::parse("abc").unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidId {
            kind: "Author",
            value: "abc".to_string(),
        }
    );
    assert!(err.to_string().contains("Author ID"));
}

#[test]
fn new_caps_at_four_digits() {
    assert_eq!(BookId::new(MAX_ID).map(|id| id.value()), Some(9999));
    assert!(BookId::new(10_000).is_none());
}

#[test]
fn ids_parse_via_from_str() {
    let id: BookId = "3005".parse().unwrap();
    assert_eq!(id, BookId::new(3005).unwrap());
}

#[test]
fn quantity_accepts_zero_and_positive() {
    assert_eq!(parse_quantity("0").unwrap(), 0);
    assert_eq!(parse_quantity(" 40 ").unwrap(), 40);
}

#[test]
fn quantity_rejects_negative_and_non_numeric() {
    for input in ["-1", "ten", "", "4.5", "+3", "99999999999"] {
        assert!(
            matches!(
                parse_quantity(input),
                Err(ValidationError::InvalidQuantity { .. })
            ),
            "'{}' should be rejected",
            input
        );
    }
}

#[test]
fn text_is_trimmed() {
    assert_eq!(validate_text("Book title", "  Dune ").unwrap(), "Dune");
}

#[test]
fn blank_text_is_rejected() {
    let err = validate_text("Book title", " \t ").unwrap_err();
    assert_eq!(err, ValidationError::EmptyField { field: "Book title" });
    assert_eq!(err.to_string(), "Book title cannot be empty");
}
