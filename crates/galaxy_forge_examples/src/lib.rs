#![forbid(unsafe_code)]

use glam::DVec3;
use tracing_subscriber::EnvFilter;

/// Initialize tracing for example binaries. Respects `RUST_LOG`, defaults
/// to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Galaxy configuration shared by the examples: sectors near the lattice
/// origin sit 8 kpc out in the disk, solar-neighborhood style, with a
/// normalization that keeps sector catalogs readable.
pub fn demo_galaxy() -> galaxy_forge::config::GalaxyParams {
    galaxy_forge::config::GalaxyParams {
        origin_pc: DVec3::new(8000.0, 0.0, 20.0),
        ..galaxy_forge::config::GalaxyParams::default()
    }
    .with_local_normalization(4e-4)
}
