use shelf_track_catalog::*;
use shelf_track_db::*;

fn seeded() -> rusqlite::Connection {
    let conn = open_memory().unwrap();
    seed_initial_data(&conn).unwrap();
    conn
}

fn book_id(s: &str) -> BookId {
    BookId::parse(s).unwrap()
}

#[test]
fn search_finds_exactly_matching_title() {
    let conn = seeded();
    let results = search_books(&conn, "Potter").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, book_id("3002"));
    assert_eq!(results[0].title, "Harry Potter and the Philosopher's Stone");
    assert_eq!(results[0].author_id, AuthorId::parse("8937").unwrap());
    assert_eq!(results[0].quantity, 40);
}

#[test]
fn search_without_match_is_empty_not_error() {
    let conn = seeded();
    assert!(search_books(&conn, "zzz").unwrap().is_empty());
}

#[test]
fn search_is_case_insensitive() {
    let conn = seeded();
    let results = search_books(&conn, "LORD OF").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, book_id("3004"));
}

#[test]
fn search_returns_rows_in_id_order() {
    let conn = seeded();
    let ids: Vec<_> = search_books(&conn, "the")
        .unwrap()
        .into_iter()
        .map(|b| b.id.value())
        .collect();
    assert_eq!(ids, [3002, 3003, 3004]);
}

#[test]
fn search_wildcards_match_literally() {
    let conn = seeded();
    assert!(search_books(&conn, "%").unwrap().is_empty());
    assert!(search_books(&conn, "Lord_of").unwrap().is_empty());

    add_book(
        &conn,
        &NewBook::parse("3010", "100% Dickens", "1290", "1").unwrap(),
    )
    .unwrap();
    let results = search_books(&conn, "0% D").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, book_id("3010"));
}

#[test]
fn empty_fragment_matches_everything() {
    let conn = seeded();
    assert_eq!(search_books(&conn, "").unwrap().len(), 5);
}

#[test]
fn list_all_on_empty_catalog() {
    let conn = open_memory().unwrap();
    assert!(list_all(&conn).unwrap().is_empty());
    assert_eq!(catalog_stats(&conn).unwrap(), CatalogStats::default());
}

#[test]
fn list_all_yields_seeded_dickens_row() {
    let conn = seeded();
    let rows = list_all(&conn).unwrap();
    let first = &rows[0];
    assert_eq!(
        (
            first.id.value(),
            first.title.as_str(),
            first.author_name.as_str(),
            first.author_country.as_str(),
            first.quantity,
        ),
        (3001, "A Tale of Two Cities", "Charles Dickens", "England", 30)
    );
}

#[test]
fn resolve_author_for_existing_and_missing_book() {
    let conn = seeded();
    assert_eq!(
        resolve_author_for_book(&conn, book_id("3005")).unwrap(),
        Some(AuthorId::parse("5620").unwrap())
    );
    assert_eq!(resolve_author_for_book(&conn, book_id("1234")).unwrap(), None);
}

#[test]
fn book_details_for_update_prompt() {
    let conn = seeded();
    let details = book_details(&conn, book_id("3003")).unwrap().unwrap();
    assert_eq!(details.title, "The Lion, the Witch and the Wardrobe");
    assert_eq!(details.author_name, "C.S. Lewis");
    assert_eq!(details.author_country, "Ireland");
    assert!(book_details(&conn, book_id("1234")).unwrap().is_none());
}

#[test]
fn find_author_by_id() {
    let conn = seeded();
    let author = find_author(&conn, AuthorId::parse("6380").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(author.name, "J.R.R. Tolkien");
    assert_eq!(author.country, "South Africa");
}
