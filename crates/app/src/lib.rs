//! `coletor-app`
//!
//! **Responsibility:** the terminal application shell.
//!
//! This crate wires the pure catalog domain to local persistence:
//! - `controller` — explicit application state (catalog + session) behind a
//!   single owner; no ambient globals
//! - `repl` — the interactive line-oriented surface

pub mod controller;
pub mod repl;

pub use controller::AppController;
