//! Transport catalogue CLI library.
//!
//! Holds the output formatting shared by the `transport-catalogue` binary's
//! subcommands so it can be unit tested without spawning the process.

pub mod output;
