//! # Modality: Edge Relation Types
//!
//! Defines the `Modality` enum: the three independent relation types an
//! edge can represent. Every `match` on `Modality` is exhaustive, so adding
//! a relation type forces every consumer to handle it.
//!
//! `ModalitySet` is a small copyable set used by classification queries.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdentityError;

/// The relation type of an edge.
///
/// Declaration order is the canonical order (land < sea < air) used for
/// edge keys and tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    /// Shared land border between region boundaries.
    Land,
    /// Sea route between two ports closer than the sea threshold.
    Sea,
    /// Air route between two airports closer than the air threshold.
    Air,
}

/// Number of modalities.
pub const MODALITY_COUNT: usize = 3;

impl Modality {
    /// All modalities in canonical order.
    pub fn all() -> &'static [Modality] {
        &[Self::Land, Self::Sea, Self::Air]
    }

    /// Modalities synthesized from hub registries.
    pub fn routed() -> &'static [Modality] {
        &[Self::Sea, Self::Air]
    }

    /// Returns the snake_case identifier, matching serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Land => "land",
            Self::Sea => "sea",
            Self::Air => "air",
        }
    }

    /// True for modalities whose edges come from hub registries.
    pub fn is_routed(&self) -> bool {
        match self {
            Self::Land => false,
            Self::Sea | Self::Air => true,
        }
    }

    fn bit(&self) -> u8 {
        match self {
            Self::Land => 0b001,
            Self::Sea => 0b010,
            Self::Air => 0b100,
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modality {
    type Err = IdentityError;

    /// Parse from the identifiers produced by [`Modality::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "land" => Ok(Self::Land),
            "sea" => Ok(Self::Sea),
            "air" => Ok(Self::Air),
            other => Err(IdentityError::UnknownModality(other.to_string())),
        }
    }
}

/// A set of modalities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModalitySet(u8);

impl ModalitySet {
    /// The empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// All three modalities.
    pub fn all() -> Self {
        Modality::all().iter().copied().collect()
    }

    /// A set holding exactly one modality.
    pub fn only(modality: Modality) -> Self {
        Self(modality.bit())
    }

    /// Add a modality. Returns true if it was not already present.
    pub fn insert(&mut self, modality: Modality) -> bool {
        let absent = !self.contains(modality);
        self.0 |= modality.bit();
        absent
    }

    /// Remove a modality. Returns true if it was present.
    pub fn remove(&mut self, modality: Modality) -> bool {
        let present = self.contains(modality);
        self.0 &= !modality.bit();
        present
    }

    /// Flip membership of a modality, like a display toggle.
    pub fn toggle(&mut self, modality: Modality) {
        self.0 ^= modality.bit();
    }

    pub fn contains(&self, modality: Modality) -> bool {
        self.0 & modality.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Modality> + '_ {
        Modality::all().iter().copied().filter(|m| self.contains(*m))
    }
}

impl FromIterator<Modality> for ModalitySet {
    fn from_iter<I: IntoIterator<Item = Modality>>(iter: I) -> Self {
        let mut set = Self::empty();
        for m in iter {
            set.insert(m);
        }
        set
    }
}

impl FromStr for ModalitySet {
    type Err = IdentityError;

    /// Parse a comma-separated list such as `"land,sea"`. The keywords
    /// `all` and `none` (and the empty string) are also accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => return Ok(Self::empty()),
            "all" => return Ok(Self::all()),
            _ => {}
        }
        s.split(',')
            .map(|part| part.trim().parse::<Modality>())
            .collect()
    }
}

impl std::fmt::Display for ModalitySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(|m| m.as_str()).collect();
        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join(","))
        }
    }
}
