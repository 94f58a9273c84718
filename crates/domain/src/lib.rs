//! Bestiary domain - monster records and the name-matching rules.
//!
//! Pure types and functions shared by the client. No I/O here: the types
//! mirror the wire shape of the reference API, and the matching functions
//! implement the two comparison rules the UI is built around.

pub mod matching;
pub mod monster;

pub use matching::{find_exact, prefix_filter};
pub use monster::{ArmorClassEntry, MonsterDetail, MonsterSummary, SpeedProfile};
