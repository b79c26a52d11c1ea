//! Service orchestration over a real in-memory store.
//!
//! The store is wrapped in the call-tracking decorator so each flow can
//! assert which store operations the request reached.

use std::sync::Arc;

use msgboard::board::{
    adapters::{
        instrumented::{InstrumentedStore, StoreOperation},
        memory::InMemoryStore,
    },
    domain::{MessageId, Tag},
    error::StoreError,
    services::{BoardServiceError, MessageBoardService},
    transport::{NewMessageRequest, NewUserRequest},
};
use rstest::{fixture, rstest};

type TestService = MessageBoardService<InstrumentedStore<InMemoryStore>>;

#[fixture]
fn service() -> TestService {
    MessageBoardService::new(Arc::new(InstrumentedStore::new(InMemoryStore::new())))
}

fn register_alice(service: &TestService) {
    service
        .register_user(NewUserRequest::new("Alice"))
        .expect("registration should succeed");
    service.store().reset();
}

#[rstest]
fn registration_checks_name_before_saving(service: TestService) {
    service
        .register_user(NewUserRequest::new("Alice"))
        .expect("registration should succeed");

    assert!(service.store().was_called(StoreOperation::FindUserByName));
    assert!(service.store().was_called(StoreOperation::SaveUser));
    assert_eq!(service.store().inner().user_count(), 1);
}

#[rstest]
fn second_registration_with_same_name_is_rejected(service: TestService) {
    register_alice(&service);

    let result = service.register_user(NewUserRequest::new("Alice"));

    assert_eq!(
        result,
        Err(BoardServiceError::DuplicateUserName("Alice".to_owned()))
    );
    assert!(!service.store().was_called(StoreOperation::SaveUser));
    assert_eq!(service.store().inner().user_count(), 1);
}

#[rstest]
fn invalid_registration_never_reaches_store(service: TestService) {
    let result = service.register_user(NewUserRequest::default());

    assert!(matches!(result, Err(BoardServiceError::Validation(_))));
    for operation in StoreOperation::ALL {
        assert!(!service.store().was_called(operation), "{operation}");
    }
}

#[rstest]
fn failing_user_save_surfaces_as_store_error(service: TestService) {
    service
        .store()
        .fail_with(StoreOperation::SaveUser, StoreError::IdentifierMissing);

    let result = service.register_user(NewUserRequest::new("Alice"));

    assert_eq!(
        result,
        Err(BoardServiceError::Store(StoreError::IdentifierMissing))
    );
    assert!(service.store().inner().is_empty());
}

#[rstest]
fn posted_message_is_readable_and_tagged(service: TestService) {
    register_alice(&service);

    let posted = service
        .post_message(NewMessageRequest::new("hi", "Alice", Tag::new("greet")))
        .expect("posting should succeed");
    let read = service
        .read_message(posted.id())
        .expect("message should be readable");
    let tagged = service
        .find_messages_by_tag(&Tag::new("greet"))
        .expect("tag should be indexed");

    assert_eq!(read.author, "Alice");
    assert_eq!(read.body, "hi");
    assert_eq!(tagged, vec![read]);
}

#[rstest]
fn posting_for_unknown_author_saves_nothing(service: TestService) {
    let result = service.post_message(NewMessageRequest::new("hi", "Nobody", Tag::new("greet")));

    assert_eq!(
        result,
        Err(BoardServiceError::UnknownAuthor("Nobody".to_owned()))
    );
    assert!(!service.store().was_called(StoreOperation::SaveMessage));
    assert_eq!(service.store().inner().message_count(), 0);
}

#[rstest]
fn reading_unknown_message_is_not_found(service: TestService) {
    let result = service.read_message(&MessageId::new("missing"));

    assert_eq!(result, Err(BoardServiceError::NotFound));
    assert!(!service.store().was_called(StoreOperation::LoadUser));
}

#[rstest]
fn finding_unknown_tag_is_not_found(service: TestService) {
    let result = service.find_messages_by_tag(&Tag::new("tagC"));

    assert_eq!(result, Err(BoardServiceError::NotFound));
    assert!(!service.store().was_called(StoreOperation::LoadMessage));
}

#[rstest]
fn failing_message_load_aborts_tag_listing(service: TestService) {
    register_alice(&service);
    service
        .post_message(NewMessageRequest::new("hi", "Alice", Tag::new("greet")))
        .expect("posting should succeed");
    service
        .store()
        .fail_with(StoreOperation::LoadMessage, StoreError::NotFound);

    let result = service.find_messages_by_tag(&Tag::new("greet"));

    assert_eq!(result, Err(BoardServiceError::Store(StoreError::NotFound)));
}
