//! Application services for the message board.

mod board;

pub use board::{BoardServiceError, BoardServiceResult, MessageBoardService};
