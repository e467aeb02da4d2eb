//! Calendar event ingestion: fetch, normalize, retry, fall back.

pub mod board;
pub mod fallback;
pub mod normalize;
pub mod pipeline;
pub mod source;

pub use board::{BoardSnapshot, EventBoard, LoadError};
pub use pipeline::{EventOrigin, EventPipeline, LoadPhase, RetryPolicy};
pub use source::{EventSource, FetchError, HttpEventSource};
