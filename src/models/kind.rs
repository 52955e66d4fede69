// file: src/models/kind.rs
// description: division level tag used to select layout and cache rules
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Planet,
    Country,
    State,
    City,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Planet,
        EntityKind::Country,
        EntityKind::State,
        EntityKind::City,
    ];

    /// Lower-case kind name, used as translation cache key and directory name.
    pub fn key(self) -> &'static str {
        match self {
            EntityKind::Planet => "planet",
            EntityKind::Country => "country",
            EntityKind::State => "state",
            EntityKind::City => "city",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.key() == lowered)
            .ok_or_else(|| format!("unknown entity kind: {}", s))
    }
}
