//! # Contactbook Architecture
//!
//! Contactbook is a personal address book: contacts with validated phone
//! numbers and optional birthdays, kept in a single file between sessions.
//! The library holds everything except terminal I/O, which lives in the
//! binary's `cli` module.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Interactive prompt and one-shot mode, colours, logging   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Matches an input line against the command table          │
//! │  - Turns input errors into user messages                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One `run` per command, returns `Result<Outcome>`         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (fields.rs, record.rs, book.rs, pages.rs)            │
//! │  - Validated fields, records, the keyed book, pagination    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookBackend trait: JSON file (production), memory (test) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Failures are [`error::BookError`] values. Only the JSON
//! backend logs, through `tracing`.
//!
//! ## Module Overview
//!
//! - [`fields`]: `Name`, `Phone`, `Birthday`
//! - [`record`]: `Record`, birthday countdown
//! - [`book`]: `AddressBook`, the keyed and ordered collection
//! - [`pages`]: lazy page iterator used by listing and search
//! - [`store`]: persistence backends
//! - [`commands`]: command handlers and the command table
//! - [`api`]: line dispatch and user messages
//! - [`config`]: configuration file
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod pages;
pub mod record;
pub mod store;
