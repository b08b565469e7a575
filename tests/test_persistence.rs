//! File persistence of the address book.

use contact_book::{AddressBook, Birthday, BookStore, Bot, JsonFileStore, Record};

fn sample_book() -> AddressBook {
    let mut alice = Record::new("Alice").unwrap();
    alice.add_phone("1234567890").unwrap();
    alice.add_phone("1234567890").unwrap();
    alice.add_phone("0987654321").unwrap();
    alice.add_birthday(Birthday::new("15.03.1990").unwrap());

    let mut bob = Record::new("Bob").unwrap();
    bob.add_phone("5555555555").unwrap();

    let nobody = Record::new("Nobody").unwrap();

    vec![alice, bob, nobody].into()
}

#[tokio::test]
async fn test_round_trip_preserves_every_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("book.json"));
    let book = sample_book();

    store.save(&book).await.unwrap();
    let loaded = store.load().await.unwrap();

    assert_eq!(loaded.len(), book.len());
    for (name, record) in &book {
        let restored = loaded.find(name).unwrap();
        assert_eq!(restored.phones(), record.phones());
        assert_eq!(restored.birthday(), record.birthday());
    }
}

#[tokio::test]
async fn test_stored_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let store = JsonFileStore::new(&path);

    let mut record = Record::new("Alice").unwrap();
    record.add_phone("1234567890").unwrap();
    record.add_birthday(Birthday::new("05.06.1977").unwrap());
    store.save(&vec![record].into()).await.unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"name": "Alice", "phones": ["1234567890"], "birthday": "05.06.1977"}
        ])
    );
}

#[tokio::test]
async fn test_sessions_share_the_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");

    let mut first = Bot::load(JsonFileStore::new(&path)).await.unwrap();
    let mut output = Vec::new();
    first
        .run(
            "add Frank 1231231234\nadd-birthday Frank 02.02.1992\nexit\n".as_bytes(),
            &mut output,
        )
        .await
        .unwrap();

    let mut second = Bot::load(JsonFileStore::new(&path)).await.unwrap();
    let mut output = Vec::new();
    second
        .run("show-birthday Frank\nexit\n".as_bytes(), &mut output)
        .await
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("The birthday for Frank is 02.02.1992."));
}
