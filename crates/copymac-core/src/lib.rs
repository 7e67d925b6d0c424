//! # copymac
//!
//! Core library for copying source files between a host checkout and the
//! shared folder of a classic Mac OS guest.
//!
//! This library provides the sync engine (text conversion, `FinderInfo`
//! tagging, stale-file cleanup) and the header constant extractor used to
//! generate script and encoding tables.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Core error types for the copymac library
pub mod error;

/// Sync layout, file type rules and config file loading
pub mod config;

/// Text and binary content conversion
pub mod convert;

/// `FinderInfo` metadata blocks and the tagging capability
pub mod tagging;

/// Enum constant extraction from Mac OS headers
pub mod headers;

/// Tracing subscriber setup shared by the binaries
pub mod logging;

/// One-pass directory synchronization engine
pub mod sync;
