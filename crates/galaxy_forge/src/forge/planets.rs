//! Per-lane planet generation and the classification decision tables.
//!
//! Classification and atmosphere selection are ordered guard clauses over
//! numeric thresholds; the boundary inequalities are part of the contract
//! and covered by tests.
use rand::RngCore;

use crate::config::GenerationParams;
use crate::forge::{short_id, TERRAIN_SALT_BASE};
use crate::model::{Atmosphere, Biome, Hazard, OrbitType, Planet, PlanetClass};
use crate::physics::{earth_gravity_gee, equilibrium_temp_k, kepler_period_years, EARTH_RADIUS_KM};
use crate::rng::{chance, derive_seed, normal, rand_range};

/// Chance that an ordinary orbit is a satellite rather than a primary.
const SATELLITE_FRACTION: f64 = 0.07;

/// Giant-planet mass threshold, in Earth masses.
const GIANT_MASS_EARTH: f64 = 60.0;

/// Super-Earth / ice-giant mass threshold, in Earth masses.
const SUPER_EARTH_MASS_EARTH: f64 = 10.0;

/// Below this the body is a dwarf regardless of temperature.
const DWARF_MASS_EARTH: f64 = 0.1;

/// Temperature cuts for the classification table, in kelvin.
const COLD_CUT_K: f64 = 200.0;
const HOT_CUT_K: f64 = 800.0;
const ICE_WORLD_CUT_K: f64 = 230.0;
const TERRESTRIAL_HOT_CUT_K: f64 = 330.0;

/// Everything the lane loop has already fixed for one planet.
pub(crate) struct LaneContext<'a> {
    pub seed: u32,
    pub system_name: &'a str,
    pub index: u32,
    pub semimajor_axis_au: f64,
    pub snow_line_au: f64,
    pub habitable_zone_au: (f64, f64),
    pub total_mass_msun: f64,
    pub primary_luminosity_lsun: f64,
}

/// Classify a planet by mass and equilibrium temperature.
///
/// Fixed decision table; boundary semantics matter (60 Earth masses at
/// exactly 800 K is a Gas Giant, above 800 K a Hot Jupiter).
pub fn classify_planet(mass_earth: f64, equilibrium_temp_k: f64) -> PlanetClass {
    let cold = equilibrium_temp_k < COLD_CUT_K;
    let hot = equilibrium_temp_k > HOT_CUT_K;
    if mass_earth >= GIANT_MASS_EARTH {
        return if hot {
            PlanetClass::HotJupiter
        } else {
            PlanetClass::GasGiant
        };
    }
    if mass_earth >= SUPER_EARTH_MASS_EARTH {
        return if cold {
            PlanetClass::IceGiant
        } else {
            PlanetClass::SuperEarth
        };
    }
    if mass_earth >= DWARF_MASS_EARTH {
        if hot {
            return PlanetClass::Dwarf;
        }
        if equilibrium_temp_k < ICE_WORLD_CUT_K {
            return PlanetClass::IceWorld;
        }
        if equilibrium_temp_k > TERRESTRIAL_HOT_CUT_K {
            return PlanetClass::Dwarf;
        }
        return PlanetClass::Terrestrial;
    }
    PlanetClass::Dwarf
}

/// Choose an atmosphere kind and surface pressure in bar.
///
/// Ordered guard clauses conditioned on class, mass, and temperature. The
/// narrow 260-320 K, 0.5-5 Earth-mass band has a 35% chance of being
/// breathable.
fn choose_atmosphere<R: RngCore + ?Sized>(
    rng: &mut R,
    kind: PlanetClass,
    mass_earth: f64,
    equilibrium_temp_k: f64,
) -> (Atmosphere, f64) {
    if kind.is_giant() {
        return (Atmosphere::HydrogenHelium, rand_range(rng, 100.0, 1000.0));
    }
    if mass_earth < 0.2 || equilibrium_temp_k > 700.0 {
        return (Atmosphere::None, 0.0);
    }
    if equilibrium_temp_k > 350.0 {
        return (Atmosphere::Toxic, rand_range(rng, 1.0, 20.0));
    }
    if (260.0..=320.0).contains(&equilibrium_temp_k) && (0.5..=5.0).contains(&mass_earth) {
        return if chance(rng, 0.35) {
            (Atmosphere::Breathable, rand_range(rng, 0.6, 1.8))
        } else {
            (Atmosphere::Thin, rand_range(rng, 0.1, 0.8))
        };
    }
    let kind = if chance(rng, 0.5) {
        Atmosphere::Thin
    } else {
        Atmosphere::Thick
    };
    (kind, rand_range(rng, 0.2, 5.0))
}

/// Scan the fixed environmental thresholds for hazards.
fn planet_hazards(planet: &Planet) -> Vec<Hazard> {
    let mut hazards = Vec::new();
    if planet.atmosphere == Atmosphere::None {
        hazards.push(Hazard::Vacuum);
    }
    if planet.atmosphere == Atmosphere::Toxic {
        hazards.push(Hazard::ToxicAtmosphere);
    }
    if planet.equilibrium_temp_k < 180.0 {
        hazards.push(Hazard::Cryogenic);
    }
    if planet.equilibrium_temp_k > 380.0 {
        hazards.push(Hazard::ExtremeHeat);
    }
    if planet.tidal_locked {
        hazards.push(Hazard::TidalLock);
    }
    if planet.atmosphere == Atmosphere::HydrogenHelium && planet.kind == PlanetClass::HotJupiter {
        hazards.push(Hazard::RadiationBelts);
    }
    if planet.eccentricity > 0.4 {
        hazards.push(Hazard::ClimateExtremes);
    }
    if planet.gravity_gee > 1.8 {
        hazards.push(Hazard::HighGravity);
    }
    if planet.gravity_gee < 0.3 {
        hazards.push(Hazard::LowGravity);
    }
    hazards
}

/// Orbit type from the configured exotic-orbit fractions.
fn pick_orbit_type<R: RngCore + ?Sized>(rng: &mut R, params: &GenerationParams) -> OrbitType {
    if chance(rng, params.wandering_fraction) {
        return OrbitType::Wandering;
    }
    if chance(rng, params.crazy_orbit_fraction) {
        return OrbitType::Crazy;
    }
    if chance(rng, SATELLITE_FRACTION) {
        OrbitType::Satellite
    } else {
        OrbitType::Primary
    }
}

/// Class-conditioned diameter draw, in kilometers.
fn planet_diameter_km<R: RngCore + ?Sized>(rng: &mut R, kind: PlanetClass) -> f64 {
    let radius_re = match kind {
        PlanetClass::GasGiant | PlanetClass::HotJupiter | PlanetClass::IceGiant => {
            (3.0 + normal(rng, 0.0, 0.5)).clamp(2.0, 12.0)
        }
        PlanetClass::SuperEarth => (1.5 + normal(rng, 0.0, 0.3)).clamp(1.2, 2.2),
        PlanetClass::Terrestrial | PlanetClass::OceanWorld | PlanetClass::IceWorld => {
            (1.0 + normal(rng, 0.0, 0.25)).clamp(0.5, 1.8)
        }
        PlanetClass::Dwarf => (0.3 + normal(rng, 0.0, 0.15)).clamp(0.1, 0.8),
    };
    radius_re * 2.0 * EARTH_RADIUS_KM
}

/// Planet letter suffix: "<system> a", "<system> b", ...
fn planet_name(system_name: &str, index: u32) -> String {
    let suffix = char::from(b'a' + (index % 26) as u8);
    format!("{} {}", system_name, suffix)
}

/// Forge one planet on the system's main stream.
pub(crate) fn forge_planet<R: RngCore + ?Sized>(
    rng: &mut R,
    params: &GenerationParams,
    context: &LaneContext<'_>,
) -> Planet {
    let a = context.semimajor_axis_au;
    let inside_snow_line = a < context.snow_line_au;

    let eccentricity = normal(rng, 0.05, 0.08).abs().clamp(0.0, 0.8);
    let inclination_deg = normal(rng, 2.0, 3.0).abs().clamp(0.0, 60.0);
    let orbit_type = pick_orbit_type(rng, params);

    // Small and rocky inside the snow line, giants beyond.
    let mass_earth = if inside_snow_line {
        normal(rng, 0.8, 0.6).max(0.02)
    } else {
        normal(rng, 50.0, 40.0).max(1.0)
    };
    let albedo_mean = if inside_snow_line { 0.25 } else { 0.45 };
    let albedo = normal(rng, albedo_mean, 0.1).clamp(0.02, 0.9);
    let equilibrium = equilibrium_temp_k(context.primary_luminosity_lsun, a, albedo);
    let kind = classify_planet(mass_earth, equilibrium);

    let diameter_km = planet_diameter_km(rng, kind);
    let gravity_gee = earth_gravity_gee(mass_earth, diameter_km);
    let (atmosphere, surface_pressure_bar) =
        choose_atmosphere(rng, kind, mass_earth, equilibrium);
    let orbital_period_years = kepler_period_years(a, context.total_mass_msun);
    let rotation_draw_hours = normal(rng, 18.0, 10.0).abs().max(4.0);

    let rocky_lock_candidate = matches!(
        kind,
        PlanetClass::Terrestrial | PlanetClass::Dwarf | PlanetClass::OceanWorld
    );
    let tidal_locked = (a < 0.08 && rocky_lock_candidate) || orbital_period_years < 0.1;
    let rotation_hours = if tidal_locked {
        orbital_period_years * 365.25 * 24.0
    } else {
        rotation_draw_hours
    };

    let (hz_inner, hz_outer) = context.habitable_zone_au;
    let in_habitable_zone = a >= hz_inner && a <= hz_outer;

    let mut planet = Planet {
        id: short_id(rng),
        name: planet_name(context.system_name, context.index),
        kind,
        orbit_type,
        parent_index: 0,
        semimajor_axis_au: a,
        eccentricity,
        inclination_deg,
        longitude_asc_node_deg: rand_range(rng, 0.0, 360.0),
        arg_periapsis_deg: rand_range(rng, 0.0, 360.0),
        orbital_period_years,
        rotation_hours,
        tidal_locked,
        axial_tilt_deg: normal(rng, 23.0, 12.0).abs().clamp(0.0, 175.0),
        diameter_km,
        mass_earth,
        gravity_gee,
        atmosphere,
        surface_pressure_bar,
        albedo,
        equilibrium_temp_k: equilibrium,
        landable: !kind.is_giant(),
        hazards: Vec::new(),
        in_habitable_zone,
        terrain_seed: derive_seed(context.seed, TERRAIN_SALT_BASE + context.index),
        biome_hint: None,
    };

    planet.biome_hint = if in_habitable_zone && atmosphere == Atmosphere::Breathable {
        Some(Biome::Temperate)
    } else if equilibrium < 200.0 {
        Some(Biome::Frozen)
    } else if equilibrium > 400.0 {
        Some(Biome::Desert)
    } else {
        None
    };
    planet.hazards = planet_hazards(&planet);
    planet
}
