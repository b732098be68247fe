//! Command-line interface for Reggy.
//!
//! This crate runs intake conversations on stdin/stdout, replays scripted
//! sessions, exposes the individual extractors for inspection and manages
//! the configuration file.

#![deny(missing_docs, unsafe_code)]

/// CLI command definitions and parsing.
pub mod commands;

/// CLI application entry point and configuration.
pub mod app;

/// Error types for CLI operations.
pub mod error;
