#![forbid(unsafe_code)]
//! galaxy_forge: deterministic procedural galaxy synthesis.
//!
//! Modules:
//! - rng/distributions: seeded 32-bit generation, sub-seed derivation, and sampling primitives
//! - physics: closed-form orbital and stellar formulas
//! - density: continuous disk + bulge + spiral stellar density field
//! - spectra: weighted stellar classification and physical properties
//! - sector: cheap per-sector star catalogs (the catalog half of catalog/expand)
//! - forge: full star-system expansion (stars, planets, belts, minor bodies)
//!
//! Everything is a pure mapping from (seed, parameters) to values: the same
//! inputs produce bit-identical entity graphs in any process, order, or
//! thread, so sectors and systems can be generated lazily and in parallel
//! with no shared state.
pub mod config;
pub mod density;
pub mod distributions;
pub mod error;
pub mod forge;
pub mod model;
pub mod physics;
pub mod rng;
pub mod sector;
pub mod spectra;

/// Convenient re-exports for common types. Import with `use galaxy_forge::prelude::*;`.
pub mod prelude {
    pub use crate::config::{GalaxyParams, GenerationParams};
    pub use crate::density::local_star_density_per_pc3;
    pub use crate::error::{Error, Result};
    pub use crate::forge::{classify_planet, SystemForge};
    pub use crate::model::{
        Atmosphere, Belt, BeltType, Biome, Composition, Hazard, MinorBody, MinorBodyClass,
        OrbitType, Planet, PlanetClass, RingSystem, Sector, SectorKey, StarComponent, StarHeader,
        StarSystem,
    };
    pub use crate::rng::{derive_seed, Mulberry32};
    pub use crate::sector::SectorSampler;
    pub use crate::spectra::SpectralType;
}
