/// `juju-info` handlers and logic
pub mod info;

/// `juju-search` handlers and logic
pub mod search;
