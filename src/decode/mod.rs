//! Remote vehicle decoding for validated VINs.

mod client;
mod record;

pub use client::{DEFAULT_DECODE_URL, DecodeError, VehicleDecoder, parse_decode_body};
pub use record::{DecodeResponse, DecodedField, VehicleRecord};
