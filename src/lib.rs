//! # Daybook Architecture
//!
//! Daybook is a **UI-agnostic notebook engine**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a terminal client.
//!
//! The user writes one flat stream of text; the engine lays it out over the
//! fixed-size page spreads of a virtual paper notebook. Pages are views, not
//! containers: text, cursor and selection live in flat character space and
//! are projected into page space on demand, which is what makes editing feel
//! seamless across page boundaries.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, reads keys, draws the notebook         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Save, pack, results, config                              │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Capabilities (store/, workflow/, clipboard.rs)             │
//! │  - ContentStore: FileStore (production), InMemoryStore      │
//! │  - WorkflowTrigger: WebhookTrigger, scripted stubs          │
//! │  - Clipboard: SystemClipboard, MemoryClipboard              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The editing core ([`engine`]) sits beside this stack rather than inside
//! it: pure state and arithmetic with no I/O at all, driven by the CLI layer
//! and touching the outside world only through the injected clipboard.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, capabilities behind traits), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! ## Testing Strategy
//!
//! 1. **Engine** (`engine/*.rs`): Thorough unit tests of the editing model.
//!    This is where the lion's share of testing lives.
//!
//! 2. **Commands** (`commands/*.rs`): Unit tests against `InMemoryStore` and
//!    scripted workflow triggers.
//!
//! 3. **API** (`api.rs`): Mock tests verifying correct dispatch.
//!
//! 4. **CLI** (`cli/` + thin `main.rs`): Key mapping and frame layout tests,
//!    plus end-to-end binary tests under `tests/`.
//!
//! ## Module Overview
//!
//! - [`engine`]: Pagination, positions, the draft, and the edit session
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`workflow`]: Webhook submission and report normalization
//! - [`model`]: Core data types (`Note`, `Metadata`, `NoteKind`)
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types
//! - `cli`: Key input, notebook rendering, and printing for the binary (not
//!   part of the lib API)

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod store;
pub mod workflow;
