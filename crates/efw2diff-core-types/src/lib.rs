//! Core types shared across efw2diff facilities
//!
//! This crate provides the canonical vocabulary used by both the error
//! and logging facilities:
//!
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
