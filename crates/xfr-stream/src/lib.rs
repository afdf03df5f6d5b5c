#![warn(clippy::pedantic)]

//! Progress-tracked collection of an asynchronous byte source.
//!
//! [`StreamCollector`] drains an `AsyncRead` source into one in-memory
//! buffer, recomputing a percentage estimate on every chunk and feeding
//! a caller-supplied [`ProgressSink`] at start / update / end. Errors
//! pass through unchanged; a failed collection yields no buffer.

pub mod collect;
pub mod progress;

pub use collect::{StreamCollector, stream_to_buffer};
pub use progress::{ProgressSink, TaskStage, TransferTask, estimate};
