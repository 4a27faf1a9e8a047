//! Port implementations. Only in-memory backends live here; durable
//! persistence belongs to whoever embeds the crate.

pub mod in_memory;
