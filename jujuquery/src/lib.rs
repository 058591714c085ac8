//! Command-line front end for the charmstore query library.
//!
//! Provides the two executables `juju-search` and `juju-info`.

pub mod commands;
pub mod context;
pub mod format;
