//! Integration tests for the public address book API.
//!
//! These tests walk through the documented contact scenarios end to end:
//! building records, validating phones, and managing records in the book.

use address_book::{AddressBook, PhoneNumber, Record, ValidationError};

fn phones(record: &Record) -> Vec<&str> {
    record.phones().iter().map(PhoneNumber::as_str).collect()
}

/// A formatted phone is stored as its bare digits.
#[test]
fn test_add_formatted_phone() {
    let mut alice = Record::new("Alice").unwrap();
    alice.add_phone("123-456-7890").unwrap();

    assert_eq!(phones(&alice), vec!["1234567890"]);
}

/// Short numbers are rejected with InvalidPhoneFormat.
#[test]
fn test_add_short_phone_fails() {
    let mut record = Record::new("Alice").unwrap();
    let result = record.add_phone("12345");

    assert!(matches!(
        result,
        Err(ValidationError::InvalidPhoneFormat { .. })
    ));
    assert!(record.phones().is_empty());
}

/// Every input with exactly ten digits after stripping is accepted as those digits.
#[test]
fn test_valid_inputs_store_stripped_digits() {
    let cases = [
        ("5551234567", "5551234567"),
        ("(555) 123-4567", "5551234567"),
        ("555.123.4567", "5551234567"),
        ("tel: 555 123 4567", "5551234567"),
        ("0-0-0-0-0-0-0-0-0-0", "0000000000"),
    ];

    for (input, expected) in cases {
        let phone = PhoneNumber::new(input)
            .unwrap_or_else(|e| panic!("{:?} should be valid: {}", input, e));
        assert_eq!(phone.as_str(), expected, "input: {:?}", input);
    }
}

/// Any other digit count is rejected.
#[test]
fn test_invalid_digit_counts_rejected() {
    for input in ["", "abc", "123456789", "12345678901", "+1 (555) 123-4567"] {
        assert!(
            matches!(
                PhoneNumber::new(input),
                Err(ValidationError::InvalidPhoneFormat { .. })
            ),
            "{:?} should be rejected",
            input
        );
    }
}

/// Editing swaps the number and keeps its position.
#[test]
fn test_edit_phone_replaces_value() {
    let mut record = Record::new("Alice").unwrap();
    record.add_phone("1234567890").unwrap();

    assert!(record.edit_phone("1234567890", "0987654321").unwrap());
    assert_eq!(phones(&record), vec!["0987654321"]);
}

/// Editing keeps the sequence length and the order of the other phones.
#[test]
fn test_edit_phone_keeps_length_and_order() {
    let mut record = Record::new("Alice").unwrap();
    for phone in ["1111111111", "2222222222", "3333333333"] {
        record.add_phone(phone).unwrap();
    }

    assert!(record.edit_phone("333-333-3333", "4444444444").unwrap());
    assert_eq!(
        phones(&record),
        vec!["1111111111", "2222222222", "4444444444"]
    );
}

/// Removing a number that is not there reports false and changes nothing.
#[test]
fn test_remove_missing_phone() {
    let mut record = Record::new("Alice").unwrap();
    record.add_phone("1234567890").unwrap();

    assert!(!record.remove_phone("0000000000"));
    assert_eq!(phones(&record), vec!["1234567890"]);
}

/// A found phone can be removed, and exactly one occurrence goes away.
#[test]
fn test_find_then_remove_drops_one_occurrence() {
    let mut record = Record::new("Alice").unwrap();
    for phone in ["1234567890", "5555555555", "1234567890"] {
        record.add_phone(phone).unwrap();
    }
    let before = record.phones().len();

    let found = record.find_phone("(123) 456-7890").cloned().unwrap();
    assert!(record.remove_phone(found.as_str()));

    assert_eq!(record.phones().len(), before - 1);
    assert_eq!(phones(&record), vec!["5555555555", "1234567890"]);
}

/// Add, find and delete a record through the book.
#[test]
fn test_book_lifecycle() {
    let mut book = AddressBook::new();
    let mut bob = Record::new("Bob").unwrap();
    bob.add_phone("1111111111").unwrap();
    let expected = bob.clone();

    book.add_record(bob);
    assert_eq!(book.find("Bob"), Some(&expected));

    assert!(book.delete("Bob"));
    assert!(book.find("Bob").is_none());
}

/// A second record with the same name replaces the first entirely.
#[test]
fn test_same_name_overwrites_without_merge() {
    let mut book = AddressBook::new();

    let mut first = Record::new("Bob").unwrap();
    first.add_phone("1111111111").unwrap();
    book.add_record(first);

    let mut second = Record::new("Bob").unwrap();
    second.add_phone("2222222222").unwrap();
    book.add_record(second);

    assert_eq!(book.len(), 1);
    assert_eq!(phones(book.find("Bob").unwrap()), vec!["2222222222"]);
}

/// Deleting an absent name is a no-op that returns false.
#[test]
fn test_delete_absent_name() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Alice").unwrap());
    let snapshot = book.clone();

    assert!(!book.delete("Zed"));
    assert_eq!(book, snapshot);
}

/// Records stored in the book can be edited through find_mut.
#[test]
fn test_edit_stored_record() {
    let mut book = AddressBook::new();
    let mut john = Record::new("John").unwrap();
    john.add_phone("1234567890").unwrap();
    john.add_phone("5555555555").unwrap();
    book.add_record(john);

    let mut john = book.find_mut("John").unwrap();
    assert!(john.edit_phone("1234567890", "1112223333").unwrap());
    assert!(john.remove_phone("5555555555"));

    assert_eq!(
        book.find("John").unwrap().to_string(),
        "Contact name: John, phones: 1112223333"
    );
}

/// A book survives a JSON round trip with its records intact.
#[test]
fn test_book_json_round_trip() {
    let mut book = AddressBook::new();
    for (name, phone) in [("Alice", "1234567890"), ("Bob", "0987654321")] {
        let mut record = Record::new(name).unwrap();
        record.add_phone(phone).unwrap();
        book.add_record(record);
    }

    let json = serde_json::to_string(&book).unwrap();
    let restored: AddressBook = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, book);
}
