//! Terminal frontend for the `gemini_api` transport crate.
//!
//! The binary is thin I/O glue: flag parsing, an interactive REPL, and exit
//! code handling. Everything that talks to the network lives in
//! `gemini_api` and is consumed through its `ask(message)` contract.

pub mod cli;
pub mod commands;
pub mod progress;
pub mod repl;
