use shelf_track_catalog::*;

#[test]
fn new_book_parses_valid_input() {
    let book = NewBook::parse("3001", " A Tale of Two Cities ", "1290", "30").unwrap();
    assert_eq!(book.id.value(), 3001);
    assert_eq!(book.title, "A Tale of Two Cities");
    assert_eq!(book.author_id.value(), 1290);
    assert_eq!(book.quantity, 30);
}

#[test]
fn new_book_reports_first_invalid_field() {
    let err = NewBook::parse("30", "", "abcd", "-1").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidId { kind: "Book", .. }));

    let err = NewBook::parse("3001", "  ", "abcd", "-1").unwrap_err();
    assert_eq!(err, ValidationError::EmptyField { field: "Book title" });

    let err = NewBook::parse("3001", "Title", "abcd", "-1").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidId { kind: "Author", .. }));

    let err = NewBook::parse("3001", "Title", "1290", "-1").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidQuantity { .. }));
}

#[test]
fn author_requires_name_and_country() {
    let id = AuthorId::parse("1290").unwrap();
    assert!(Author::new(id, "Charles Dickens", "England").is_ok());
    assert_eq!(
        Author::new(id, "", "England").unwrap_err(),
        ValidationError::EmptyField { field: "Author name" }
    );
    assert_eq!(
        Author::new(id, "Charles Dickens", " ").unwrap_err(),
        ValidationError::EmptyField { field: "Author country" }
    );
}

#[test]
fn field_from_menu_choice() {
    assert_eq!(BookField::from_choice("1"), Some(BookField::Title));
    assert_eq!(BookField::from_choice("2"), Some(BookField::Quantity));
    assert_eq!(BookField::from_choice(" 3 "), Some(BookField::AuthorName));
    assert_eq!(BookField::from_choice("4"), Some(BookField::AuthorCountry));
    assert_eq!(BookField::from_choice("5"), None);
    assert_eq!(BookField::from_choice("title"), None);
}

#[test]
fn only_author_fields_target_author() {
    let targets: Vec<_> = BookField::ALL
        .iter()
        .filter(|f| f.targets_author())
        .collect();
    assert_eq!(targets, [&BookField::AuthorName, &BookField::AuthorCountry]);
}

#[test]
fn update_parse_validates_per_field() {
    assert_eq!(
        BookUpdate::parse(BookField::Quantity, "12").unwrap(),
        BookUpdate::Quantity(12)
    );
    assert!(BookUpdate::parse(BookField::Quantity, "-3").is_err());
    assert!(BookUpdate::parse(BookField::Quantity, "lots").is_err());
    assert!(BookUpdate::parse(BookField::Title, "").is_err());

    let update = BookUpdate::parse(BookField::AuthorCountry, " Wales ").unwrap();
    assert_eq!(update, BookUpdate::AuthorCountry("Wales".to_string()));
    assert_eq!(update.field(), BookField::AuthorCountry);
}

#[test]
fn details_display_matches_listing_format() {
    let row = BookDetails {
        id: BookId::parse("3001").unwrap(),
        title: "A Tale of Two Cities".to_string(),
        author_name: "Charles Dickens".to_string(),
        author_country: "England".to_string(),
        quantity: 30,
    };
    assert_eq!(
        row.to_string(),
        "Book ID: 3001, Title: A Tale of Two Cities, Author: Charles Dickens, Country: England, Quantity: 30"
    );
}
