//! # Taskline Architecture
//!
//! Taskline is a **UI-agnostic task-tracking library** with a thin CLI client.
//! The binary reads one command per line from stdin; everything from the
//! session inward takes plain Rust arguments and returns plain Rust types.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - stdin read loop, terminal output, exit codes             │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs)                                 │
//! │  - One input line in, one CmdResult (or error) out          │
//! │  - Splits free-text command syntax with parser primitives   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per command family                        │
//! │  - Mutates the TaskList, persists through the store         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract TaskStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `session.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. The same core could
//! serve a GUI or a test harness (and does, in the integration tests).
//!
//! ## Module Overview
//!
//! - [`session`]: The command dispatcher — entry point for all operations
//! - [`commands`]: Business logic and result payloads for each command
//! - [`model`]: Core data types (`Task`, `TaskKind`) and rendering
//! - [`tasklist`]: The ordered, exclusively-owned task collection
//! - [`parser`]: Pure free-text parsing primitives
//! - [`store`]: Storage abstraction, line codec, and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod session;
pub mod store;
pub mod tasklist;
