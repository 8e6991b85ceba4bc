use mockito::{Matcher, Server};
use phonebook::prompt::AutoAnswer;
use phonebook::{ApiClient, DeleteOutcome, NoticeKind, Phonebook, SubmitOutcome};
use serde_json::json;

const SEED: &str = r#"[
    {"id": "1", "name": "Arto Hellas", "number": "040-123456"},
    {"id": "2", "name": "Ada Lovelace", "number": "39-44-5323523"}
]"#;

async fn seeded(server: &mut Server) -> Phonebook<ApiClient, AutoAnswer> {
    let _list = server
        .mock("GET", "/persons")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEED)
        .create_async()
        .await;
    let client = ApiClient::new(&server.url(), "persons").unwrap();
    let book = Phonebook::new(client, AutoAnswer(true));
    assert_eq!(book.load().await.unwrap(), 2);
    book
}

#[tokio::test]
async fn create_appends_server_record() {
    let mut server = Server::new_async().await;
    let book = seeded(&mut server).await;

    let create = server
        .mock("POST", "/persons")
        .match_body(Matcher::Json(json!({"name": "Dan Abramov", "number": "12-43-234345"})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "b7e1", "name": "Dan Abramov", "number": "12-43-234345"}"#)
        .expect(1)
        .create_async()
        .await;

    let outcome = book.submit("Dan Abramov", "12-43-234345").await;
    create.assert_async().await;
    assert!(matches!(outcome, SubmitOutcome::Created(_)));

    let ids: Vec<_> = book.contacts().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, ["1", "2", "b7e1"]);
}

#[tokio::test]
async fn update_on_removed_contact_reports_failure() {
    let mut server = Server::new_async().await;
    let book = seeded(&mut server).await;
    let update = server.mock("PUT", "/persons/1").with_status(404).expect(1).create_async().await;

    let outcome = book.submit("Arto Hellas", "050-999").await;
    update.assert_async().await;
    assert!(matches!(outcome, SubmitOutcome::Failed(ref e) if e.is_not_found()));
    assert_eq!(book.contacts()[0].number, "040-123456");
    assert_eq!(
        book.notice(NoticeKind::Failure).map(|n| n.message),
        Some("Information of Arto Hellas has already been removed from the server".to_string())
    );
}

#[tokio::test]
async fn duplicate_number_never_reaches_server() {
    let mut server = Server::new_async().await;
    let book = seeded(&mut server).await;
    let create = server.mock("POST", "/persons").expect(0).create_async().await;

    let outcome = book.submit("Someone Else", "39-44-5323523").await;
    assert!(matches!(outcome, SubmitOutcome::DuplicateNumber));
    create.assert_async().await;
    assert_eq!(book.contacts().len(), 2);
}

#[tokio::test]
async fn delete_removes_after_server_confirms() {
    let mut server = Server::new_async().await;
    let book = seeded(&mut server).await;
    let remove = server.mock("DELETE", "/persons/2").with_status(200).with_body("{}").create_async().await;

    assert!(matches!(book.delete("2").await, DeleteOutcome::Deleted(_)));
    remove.assert_async().await;
    assert_eq!(book.contacts().len(), 1);
}
