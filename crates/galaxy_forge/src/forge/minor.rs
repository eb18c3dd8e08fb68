//! Minor-body forge: comets, asteroids, and dwarf planets.
use rand::RngCore;

use crate::distributions::{log_uniform, poisson};
use crate::forge::short_id;
use crate::model::{Composition, MinorBody, MinorBodyClass, OrbitType};
use crate::physics::kepler_period_years;
use crate::rng::{chance, normal, pick, rand01, rand_range};

/// Diameter above which a body counts as a dwarf planet, in kilometers.
const DWARF_PLANET_DIAMETER_KM: f64 = 800.0;

/// Chance that a sub-dwarf body is a comet rather than an asteroid.
const COMET_FRACTION: f64 = 0.4;

/// Semimajor-axis range for minor bodies, in AU.
const AXIS_MIN_AU: f64 = 0.1;
const AXIS_MAX_AU: f64 = 60.0;

const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";
const VOWELS: &[u8] = b"aeiouy";

/// Forge the notable minor-body population on its own sub-stream.
pub(crate) fn forge_minor_bodies<R: RngCore + ?Sized>(
    rng: &mut R,
    mean_count: f64,
    total_mass_msun: f64,
) -> Vec<MinorBody> {
    let count = poisson(rng, mean_count);
    let mut bodies = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let semimajor_axis_au = log_uniform(rng, AXIS_MIN_AU, AXIS_MAX_AU);
        let eccentricity = normal(rng, 0.2, 0.15).abs().clamp(0.0, 0.97);
        let inclination_deg = normal(rng, 10.0, 8.0).abs().clamp(0.0, 60.0);
        let diameter_km = normal(rng, 80.0, 120.0).abs().max(5.0);
        let mass_earth = if diameter_km < 1000.0 {
            rand_range(rng, 1e-9, 1e-7)
        } else {
            rand_range(rng, 1e-6, 5e-4)
        };
        let kind = if diameter_km > DWARF_PLANET_DIAMETER_KM {
            MinorBodyClass::DwarfPlanet
        } else if chance(rng, COMET_FRACTION) {
            MinorBodyClass::Comet
        } else {
            MinorBodyClass::Asteroid
        };
        let composition = match kind {
            MinorBodyClass::Comet => vec![Composition::Icy, Composition::Volatile],
            _ => {
                if chance(rng, 0.5) {
                    vec![Composition::Rock, Composition::Metal]
                } else {
                    vec![Composition::Carbonaceous]
                }
            }
        };

        bodies.push(MinorBody {
            id: short_id(rng),
            name: body_name(rng, kind),
            kind,
            composition,
            orbit_type: OrbitType::Primary,
            parent_index: 0,
            semimajor_axis_au,
            eccentricity,
            inclination_deg,
            longitude_asc_node_deg: rand_range(rng, 0.0, 360.0),
            arg_periapsis_deg: rand_range(rng, 0.0, 360.0),
            orbital_period_years: kepler_period_years(semimajor_axis_au, total_mass_msun),
            rotation_hours: normal(rng, 12.0, 8.0).abs().max(3.0),
            diameter_km,
            mass_earth,
            // negligible
            gravity_gee: 0.0,
            landable: true,
        });
    }
    bodies
}

/// Comets get a year-coded designation; everything else a short word.
fn body_name<R: RngCore + ?Sized>(rng: &mut R, kind: MinorBodyClass) -> String {
    match kind {
        MinorBodyClass::Comet => {
            let year = discovery_year(rng);
            format!("C/{} {}", year, word(rng, 2))
        }
        _ => word(rng, 1),
    }
}

/// Capitalized consonant-vowel word with the given syllable count.
fn word<R: RngCore + ?Sized>(rng: &mut R, syllables: usize) -> String {
    let mut name = String::with_capacity(syllables * 2);
    for i in 0..syllables {
        let consonant = char::from(*pick(rng, CONSONANTS));
        if i == 0 {
            name.push(consonant.to_ascii_uppercase());
        } else {
            name.push(consonant);
        }
        name.push(char::from(*pick(rng, VOWELS)));
    }
    name
}

fn discovery_year<R: RngCore + ?Sized>(rng: &mut R) -> u32 {
    1900 + (rand01(rng) * 200.0) as u32
}
