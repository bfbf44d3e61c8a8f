// Shared builders and assertions for the unit and contract test targets.
//
// Usage (from a test file):
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;
#![allow(dead_code)]

pub mod test_data;

pub use assertions::*;
pub use test_data::*;
