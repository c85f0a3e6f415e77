//! Configuration records handed to the engine, and their decoding from
//! JSON-shaped documents.

mod decode;
mod types;

pub use decode::{DecodeError, decode_record, decode_records};
pub use types::*;
