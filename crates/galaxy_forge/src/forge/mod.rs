//! System forge: expands a star header's seed into a full star system.
//!
//! Expansion is all-or-nothing and pure: the seed, name, position, and
//! validated [`GenerationParams`] fully determine the result. Branches that
//! must not perturb each other (each star component, belts, minor bodies,
//! per-planet terrain) run on independent sub-streams derived from the
//! system seed and a fixed salt.
mod belts;
mod minor;
mod planets;
mod stars;

use glam::DVec3;
use rand::RngCore;
use tracing::debug;

pub use planets::classify_planet;

use crate::config::GenerationParams;
use crate::distributions::log_uniform;
use crate::error::Result;
use crate::model::{StarHeader, StarSystem};
use crate::physics::{habitable_zone_au, snow_line_au, system_total_mass_msun};
use crate::rng::{derive_seed, rand01, rand_range, Mulberry32};

/// Salt base for the i-th star component's sub-stream.
const COMPONENT_SALT_BASE: u32 = 100;

/// Salt for the belt sub-stream.
const BELT_SALT: u32 = 0xB17;

/// Salt for the minor-body sub-stream.
const MINOR_BODY_SALT: u32 = 0xDEAD;

/// Salt base for per-planet terrain seeds.
const TERRAIN_SALT_BASE: u32 = 0xCAFE_0000;

/// Innermost lane distance range for the first planet, in AU.
const FIRST_LANE_MIN_AU: f64 = 0.03;
const FIRST_LANE_MAX_AU: f64 = 0.3;

/// Multiplier range between successive planet lanes. Strictly above one, so
/// semimajor axes increase monotonically by construction.
const LANE_SCALE_MIN: f64 = 1.3;
const LANE_SCALE_MAX: f64 = 2.1;

/// Expands star headers into full star systems.
///
/// Construction validates the configuration once; forging is infallible
/// afterwards. One forge may drive many expansions, from any thread.
#[derive(Clone, Debug)]
pub struct SystemForge {
    params: GenerationParams,
}

impl SystemForge {
    pub fn try_new(params: GenerationParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The validated configuration this forge was built from.
    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Expand a catalog header into a full system. The header id is the
    /// system seed, so expansion and cataloging agree without shared state.
    pub fn expand(&self, header: &StarHeader) -> StarSystem {
        self.forge(header.id, &header.system_name, header.position_pc)
    }

    /// Forge a system directly from the configured base seed, without a
    /// catalog header.
    pub fn forge_standalone(&self, name: &str, position_pc: DVec3) -> StarSystem {
        self.forge(self.params.seed, name, position_pc)
    }

    /// Forge the full system for a seed.
    pub fn forge(&self, seed: u32, name: &str, position_pc: DVec3) -> StarSystem {
        let params = &self.params;
        let mut rng = Mulberry32::new(seed);

        let multiplicity_roll = rand01(&mut rng);
        let star_count = if multiplicity_roll < params.trinary_fraction {
            3
        } else if multiplicity_roll < params.trinary_fraction + params.binary_fraction {
            2
        } else {
            1
        };

        let mut components = Vec::with_capacity(star_count);
        for index in 0..star_count {
            let mut component_rng =
                Mulberry32::new(derive_seed(seed, COMPONENT_SALT_BASE + index as u32));
            components.push(stars::forge_star_component(
                &mut component_rng,
                params.include_exotics,
                params.ringed_star_fraction,
            ));
        }

        let system_plane = random_unit_vector(&mut rng);

        let total_mass_msun = system_total_mass_msun(&components);
        let primary_luminosity_lsun = components
            .first()
            .map(|c| c.luminosity_lsun)
            .unwrap_or(1.0);
        let habitable_zone = habitable_zone_au(primary_luminosity_lsun);
        let snow_line = snow_line_au(primary_luminosity_lsun);

        let belts = belts::forge_belts(
            &mut Mulberry32::new(derive_seed(seed, BELT_SALT)),
            0,
            primary_luminosity_lsun,
            params.belt_probability,
        );

        let mut planets = Vec::with_capacity(params.planet_count as usize);
        let mut semimajor_axis_au = log_uniform(&mut rng, FIRST_LANE_MIN_AU, FIRST_LANE_MAX_AU);
        for index in 0..params.planet_count {
            let lane_scale = rand_range(&mut rng, LANE_SCALE_MIN, LANE_SCALE_MAX);
            if index > 0 {
                semimajor_axis_au *= lane_scale;
            }
            let context = planets::LaneContext {
                seed,
                system_name: name,
                index,
                semimajor_axis_au,
                snow_line_au: snow_line,
                habitable_zone_au: habitable_zone,
                total_mass_msun,
                primary_luminosity_lsun,
            };
            planets.push(planets::forge_planet(&mut rng, params, &context));
        }

        let notables = minor::forge_minor_bodies(
            &mut Mulberry32::new(derive_seed(seed, MINOR_BODY_SALT)),
            params.notable_bodies_mean,
            total_mass_msun,
        );

        debug!(
            "system {:#010x} '{}': {} stars, {} planets, {} belts, {} notables",
            seed,
            name,
            components.len(),
            planets.len(),
            belts.len(),
            notables.len()
        );

        StarSystem {
            id: seed,
            name: name.to_owned(),
            position_pc,
            components,
            system_plane,
            planets,
            belts,
            notables,
            notes: Vec::new(),
        }
    }
}

/// Uniform unit vector on the sphere via z in [-1, 1] and a free azimuth.
fn random_unit_vector<R: RngCore + ?Sized>(rng: &mut R) -> DVec3 {
    let z = rand_range(rng, -1.0, 1.0);
    let azimuth = rand_range(rng, 0.0, std::f64::consts::TAU);
    let radial = (1.0 - z * z).sqrt();
    DVec3::new(radial * azimuth.cos(), radial * azimuth.sin(), z)
}

/// Short base-36 id, up to six digits.
pub(crate) fn short_id<R: RngCore + ?Sized>(rng: &mut R) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    // 36^6
    let mut value = (rand01(rng) * 2_176_782_336.0) as u64;
    if value == 0 {
        return "0".to_owned();
    }
    let mut out = Vec::with_capacity(6);
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
