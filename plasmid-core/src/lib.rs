//! Shared primitives, traits, and utilities for the plasmid sequence toolkit.
//!
//! `plasmid-core` provides the foundation the sequence crate builds on:
//!
//! - **Error types**: [`PlasmidError`] and [`Result`] for structured error handling
//! - **Traits**: core abstractions like [`Sequence`], [`ContentAddressable`], [`Annotated`]
//! - **Hashing**: SHA-256 content addressing for sequence identity
//! - **Compressed input**: gzip/zstd detection and streaming decoders (`compress` feature)

pub mod error;
pub mod hash;
pub mod traits;

#[cfg(feature = "compress")]
pub mod compress;

pub use error::{PlasmidError, Result};
pub use traits::*;
