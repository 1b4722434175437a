//! Subcommand handlers

pub mod account;
pub mod client;
pub mod demo;
