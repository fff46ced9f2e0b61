//! Spans entered by decoding and formatting
//!
//! Inside them, `trace!` events record unit selection and each pipeline
//! step, and `debug!` events record why a decode was rejected. Run with
//! `RUST_LOG=bigamount=trace` to see them.

pub(crate) mod spans;
