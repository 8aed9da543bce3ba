//! # regnet-core: Foundational Types for the Connectivity Graph
//!
//! This crate is the leaf of the regnet workspace. It defines the primitive
//! types every other crate builds on and depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Validated newtypes.** `Coordinate`, `RegionName` and `Kilometers`
//!    are constructed through checked constructors. An out-of-range
//!    latitude cannot reach the distance calculator because it cannot be
//!    represented.
//!
//! 2. **Single `Modality` enum.** Land, sea and air are one definition with
//!    exhaustive `match` everywhere. `ModalitySet` is the only way to name a
//!    subset of them.
//!
//! 3. **Pluggable earth model.** Distance flows through the [`DistanceModel`]
//!    trait. The default is a spherical earth of radius 6371.0 km; a WGS-84
//!    ellipsoid is available for callers that need geodesic accuracy.
//!
//! 4. **Float-free digests.** Graph snapshots are hashed through
//!    `CanonicalBytes`, which rejects floats. Weights enter digests as integer
//!    decikilometres.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `regnet-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod coordinate;
pub mod digest;
pub mod distance;
pub mod error;
pub mod identity;
pub mod modality;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use coordinate::{Coordinate, Kilometers};
pub use digest::{sha256_digest, ContentDigest};
pub use distance::{
    distance_between, great_circle_distance, DistanceModel, EarthModel, Haversine, Vincenty,
    MEAN_EARTH_RADIUS_KM,
};
pub use error::{CanonicalizationError, CoordinateError, IdentityError};
pub use identity::RegionName;
pub use modality::{Modality, ModalitySet, MODALITY_COUNT};
