//! Service layer behind the HTTP endpoints.
//!
//! Provides [`MessageBoardService`], which validates inbound payloads,
//! assigns identifiers, enforces name uniqueness and resolves author names
//! before handing records to the store.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::board::{
    domain::{Message, MessageId, Tag, User, UserId},
    error::{StoreError, ValidationError},
    ports::{
        store::Store,
        validator::{Validate, ValidationConfig},
    },
    transport::{MessageView, NewMessageRequest, NewUserRequest},
};

/// Service-level errors for board operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardServiceError {
    /// The request payload failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A user with the requested name is already registered.
    #[error("user name already taken: {0}")]
    DuplicateUserName(String),

    /// The message names an author that is not registered.
    #[error("unknown author: {0}")]
    UnknownAuthor(String),

    /// The requested message or tag does not exist.
    #[error("not found")]
    NotFound,

    /// The store failed an operation the request depends on.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

impl BoardServiceError {
    /// Returns `true` when the failure was caused by the request itself
    /// rather than by the store.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::DuplicateUserName(_) | Self::UnknownAuthor(_)
        )
    }
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Orchestrates user registration, posting and message retrieval.
#[derive(Debug)]
pub struct MessageBoardService<S>
where
    S: Store,
{
    store: Arc<S>,
    config: ValidationConfig,
}

impl<S> Clone for MessageBoardService<S>
where
    S: Store,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}

impl<S> MessageBoardService<S>
where
    S: Store,
{
    /// Creates a service with the default validation configuration.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, ValidationConfig::default())
    }

    /// Creates a service with an explicit validation configuration.
    #[must_use]
    pub const fn with_config(store: Arc<S>, config: ValidationConfig) -> Self {
        Self { store, config }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Registers a new user under a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Validation`] for an invalid payload,
    /// [`BoardServiceError::DuplicateUserName`] when the name is taken, or
    /// [`BoardServiceError::Store`] when the store rejects the lookup or
    /// save.
    pub fn register_user(&self, request: NewUserRequest) -> BoardServiceResult<User> {
        request.validate(&self.config)?;

        match self.store.find_user_by_name(&request.name) {
            Ok(_) => return Err(BoardServiceError::DuplicateUserName(request.name)),
            Err(StoreError::NotFound) => {}
            Err(err) => return Err(err.into()),
        }

        let user = User::new(UserId::generate(), request.name);
        self.store.save_user(&user)?;
        info!(user_id = %user.id(), name = user.name(), "user registered");
        Ok(user)
    }

    /// Posts a message on behalf of the named author.
    ///
    /// The returned message carries its new identifier; its
    /// [`location`](Message::location) is the path to read it back.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Validation`] for an invalid payload,
    /// [`BoardServiceError::UnknownAuthor`] when no user has the author
    /// name, or [`BoardServiceError::Store`] when the store fails.
    pub fn post_message(&self, request: NewMessageRequest) -> BoardServiceResult<Message> {
        request.validate(&self.config)?;

        let NewMessageRequest { body, author, tag } = request;
        let author_user = match self.store.find_user_by_name(&author) {
            Ok(user) => user,
            Err(StoreError::NotFound) => return Err(BoardServiceError::UnknownAuthor(author)),
            Err(err) => return Err(err.into()),
        };

        let message = Message::new(MessageId::generate(), body, author_user.id().clone(), tag);
        self.store.save_message(&message)?;
        info!(
            message_id = %message.id(),
            author_id = %message.author_id(),
            tag = %message.tag(),
            "message posted"
        );
        Ok(message)
    }

    /// Reads a single message with its author's name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] when no message has this ID
    /// or [`BoardServiceError::Store`] when the message or its author
    /// cannot be loaded.
    pub fn read_message(&self, id: &MessageId) -> BoardServiceResult<MessageView> {
        let message = match self.store.load_message(id) {
            Ok(message) => message,
            Err(StoreError::NotFound) => return Err(BoardServiceError::NotFound),
            Err(err) => return Err(err.into()),
        };
        self.view(&message)
    }

    /// Returns every message filed under `tag`, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::NotFound`] when no message was ever
    /// posted under the tag, or [`BoardServiceError::Store`] when an indexed
    /// message or its author cannot be loaded.
    pub fn find_messages_by_tag(&self, tag: &Tag) -> BoardServiceResult<Vec<MessageView>> {
        let ids = match self.store.find_message_ids_by_tag(tag) {
            Ok(ids) => ids,
            Err(StoreError::NotFound) => return Err(BoardServiceError::NotFound),
            Err(err) => return Err(err.into()),
        };

        ids.iter()
            .map(|id| {
                let message = self.store.load_message(id)?;
                self.view(&message)
            })
            .collect()
    }

    fn view(&self, message: &Message) -> BoardServiceResult<MessageView> {
        let author = self.store.load_user(message.author_id()).map_err(|err| {
            warn!(
                message_id = %message.id(),
                author_id = %message.author_id(),
                "message author cannot be loaded"
            );
            BoardServiceError::Store(err)
        })?;
        Ok(MessageView::new(message, &author))
    }
}
