//! Integration suite: end-to-end indexing of realistic C# sources, address
//! round-trips over every node, and query-text properties.

mod end_to_end;
mod path_roundtrip;
