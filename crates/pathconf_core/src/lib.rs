//! Schema-driven configuration trees with an INI-like text format.

/// Entry trees, value codecs, path resolution, and the load/save API.
pub mod conf;
