//! Codec module - payload serialization.
//!
//! The framing layer carries opaque text; consumers typically exchange
//! JSON. [`JsonCodec`] is a marker struct with static methods rather than
//! a trait object, so codec selection happens at compile time.

mod json;

pub use json::JsonCodec;
