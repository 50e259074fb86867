// Test Helper Modules
//
// In-memory repositories and a pinned clock so checkout and settings flows
// can be exercised over HTTP without a WordPress database.
//
// Usage (from tests/<kind>/<name>.rs):
//   #[path = "../helpers/mod.rs"]
//   mod helpers;

#![allow(dead_code)]


pub use repositories::*;
pub use test_app::*;
pub use test_data::*;
