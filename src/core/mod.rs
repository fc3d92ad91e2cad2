//! Core library components.
//!
//! Identity files, the vault protocol, and the pull state machine. Nothing
//! here prints to the terminal; user-facing lines go through [`flow::Reporter`].

pub mod config;
pub mod constants;
pub mod domain;
pub mod flow;
pub mod remote;
