//! Terminal Connections (workspace facade crate).
//!
//! This package keeps a stable `tui_connections::{core,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_connections_core as core;
pub use tui_connections_input as input;
pub use tui_connections_term as term;
pub use tui_connections_types as types;
