//! Text scanning utilities behind [`ExportParser`](crate::parser::ExportParser).
//!
//! - [`header`] - 12-hour header normalization and canonical header splitting
//! - [`sender`] - `"<name>: "` prefix attribution

pub mod header;
pub mod sender;

pub use header::{Chunk, Unconverted, normalize_headers, parse_canonical_timestamp, split_messages};
pub use sender::split_sender;
