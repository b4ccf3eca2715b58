//! SwissArmyBar command line front end.
//!
//! `bootstrap` assembles the `sab-*` crates; `cli` describes the commands.

pub mod bootstrap;
pub mod cli;
pub mod console;
