//! Streaming side of the drinkmap interpretation engine.
//!
//! [`aggregate`] folds incremental text fragments into a growing buffer and
//! reports live snapshots; [`interpret_turn`] runs it to completion and hands
//! the final text to [`drinkmap_parser::extract`].

pub mod aggregator;
pub mod cancel;
pub mod error;
pub mod failure;
pub mod fragment;
pub mod turn;

pub use aggregator::{aggregate, Aggregated};
pub use cancel::CancelHandle;
pub use error::StreamError;
pub use failure::failure_message;
pub use fragment::Fragment;
pub use turn::{interpret_turn, TurnOutcome};
