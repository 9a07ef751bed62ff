//! # CLI Behavior
//!
//! This is **one possible UI client** for daybook—not the application itself.
//! The CLI is the only place that knows about terminal I/O, key events, and
//! output formatting.
//!
//! For the overall architecture, see the crate-level documentation in
//! [`daybook`].
//!
//! ## Naked Execution (`daybook`)
//!
//! Running `daybook` with no arguments opens the notebook. Writing is 90% of
//! usage—it should be the path of least resistance.
//!
//! ## The Notebook Screen
//!
//! The interactive screen renders the current page spread (left and right
//! page side by side), a dot strip marking which spread is open, and a status
//! line. All editing state lives in [`daybook::engine::Session`]; this module
//! only translates key presses into commands and paints the result.
//!
//! ## Module Structure
//!
//! - `keys`: Key event → session input translation
//! - `screen`: Spread layout and frame drawing
//! - `print`: Output formatting for the non-interactive commands
//! - `session`: The interactive event loop

pub(crate) mod keys;
pub(crate) mod print;
pub(crate) mod screen;
pub(crate) mod session;
