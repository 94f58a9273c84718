//! Monster records as served by the D&D 5e reference API.
//!
//! Field names follow the wire format. Records that only exist inside an
//! API envelope (e.g. the collection's `results` wrapper) live in the
//! client's infrastructure layer, not here.

use serde::{Deserialize, Serialize};

/// Minimal monster record used for listing and searching.
///
/// `url` is the opaque relative path of the full detail record. Names are
/// assumed unique within a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonsterSummary {
    pub name: String,
    pub url: String,
}

/// One armor class entry, e.g. value `15` with type `"natural armor"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmorClassEntry {
    pub value: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Sparse movement rates attached to a monster.
///
/// Values are opaque display strings such as `"30 ft."`; no numeric
/// parsing is performed anywhere.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeedProfile {
    pub walk: Option<String>,
    pub swim: Option<String>,
    pub fly: Option<String>,
    pub burrow: Option<String>,
    pub climb: Option<String>,
}

/// Full monster stat block fetched on demand.
///
/// Transient: created per search and discarded after rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonsterDetail {
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub alignment: String,
    #[serde(default)]
    pub armor_class: Vec<ArmorClassEntry>,
    pub hit_points: u32,
    pub hit_points_roll: String,
    #[serde(default)]
    pub speed: SpeedProfile,
    #[serde(default)]
    pub image: Option<String>,
}
