//! Core use-case services.
//!
//! # Responsibility
//! - Compose repository primitives into the query operations callers need.
//! - Keep HTTP/host layers decoupled from storage details.

pub mod trivia_service;
