//! Domain entities for the editor configuration.
//!
//! This module contains pure logic with no infrastructure dependencies.
//!
//! # What belongs here?
//!
//! Anything that can be decided by looking only at values already in memory:
//! default values, URL concatenation, staging-host detection, the fallback
//! cascade for bootstrap inputs.  Reading environment variables, touching
//! the file system, and spawning locale loads are infrastructure concerns
//! and live in the `editor-config` crate.

/// Bootstrap inputs and their fallback rules.
pub mod bootstrap;

/// REST API contexts for the instance and the cloud API.
pub mod context;

/// Per-session push reference generation.
pub mod push_ref;

/// The configuration record, the core domain type.
///
/// See [`record::ConfigRecord`] for the main type.
pub mod record;

/// URL normalisation and derived URLs.
pub mod urls;
