//! # sbox-core
//!
//! Core types, ID normalization, and error types for the suggestion box.
//!
//! This crate provides the foundational types shared across all sbox crates:
//! - The `Suggestion` entity and its creation input
//! - The status vocabulary with its (permissive) state machine
//! - Suggestion ID normalization and lenient field readers for stored data
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod lenient;
pub mod responses;
