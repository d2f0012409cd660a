//! Hand-written persistence gateway over SQLite.
//!
//! Every function takes a `&mut SqliteConnection` so the same calls work on a
//! pooled connection or inside an open transaction (`&mut *tx`).

pub mod product;
