//! Produced entity model: catalog headers, expanded systems, and their parts.
//!
//! Everything here is a plain, self-describing value type. The sector
//! sampler emits [`StarHeader`]s; expanding one creates a new [`StarSystem`]
//! and never mutates the header. With the `serde` feature enabled all
//! entities serialize directly, so exporters need no access to generation
//! internals.
use std::fmt;

use glam::DVec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::spectra::SpectralType;

/// Integer lattice coordinates of a cubical region of space.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorKey {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    /// Edge length of the cube, in parsecs.
    pub size_pc: f64,
}

impl SectorKey {
    pub fn new(x: i32, y: i32, z: i32, size_pc: f64) -> Self {
        Self { x, y, z, size_pc }
    }

    /// World-space corner of the sector cube nearest the lattice origin, in
    /// parsecs.
    pub fn origin_pc(&self) -> DVec3 {
        DVec3::new(
            f64::from(self.x) * self.size_pc,
            f64::from(self.y) * self.size_pc,
            f64::from(self.z) * self.size_pc,
        )
    }

    /// Geometric center of the sector cube, in parsecs.
    pub fn center_pc(&self) -> DVec3 {
        DVec3::new(
            (f64::from(self.x) + 0.5) * self.size_pc,
            (f64::from(self.y) + 0.5) * self.size_pc,
            (f64::from(self.z) + 0.5) * self.size_pc,
        )
    }

    /// Cube volume in cubic parsecs.
    pub fn volume_pc3(&self) -> f64 {
        self.size_pc.powi(3)
    }
}

/// A sampled region: the key plus its lightweight star catalog.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
    pub key: SectorKey,
    pub star_headers: Vec<StarHeader>,
}

/// A catalog entry for one star system.
///
/// The id doubles as the deterministic seed for full expansion. The
/// component list stays empty until a [`StarSystem`] is forged from the
/// header.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct StarHeader {
    pub id: u32,
    pub system_name: String,
    pub position_pc: DVec3,
    pub components: Vec<StarComponent>,
}

/// A fully expanded star system.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct StarSystem {
    pub id: u32,
    pub name: String,
    pub position_pc: DVec3,
    pub components: Vec<StarComponent>,
    /// Unit normal of the mean orbital plane.
    pub system_plane: DVec3,
    pub planets: Vec<Planet>,
    pub belts: Vec<Belt>,
    pub notables: Vec<MinorBody>,
    pub notes: Vec<String>,
}

/// One star in a (possibly multi-star) system, in solar units.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct StarComponent {
    pub spectral_type: SpectralType,
    pub mass_msun: f64,
    pub radius_rsun: f64,
    pub luminosity_lsun: f64,
    pub rings: Option<RingSystem>,
}

/// An annular ring system around a star component.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSystem {
    pub inner_au: f64,
    pub outer_au: f64,
    pub opacity: f64,
    pub inclination_deg: f64,
}

/// Orbit family of a planet or minor body.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitType {
    Satellite,
    Primary,
    Crazy,
    Wandering,
}

impl fmt::Display for OrbitType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            OrbitType::Satellite => "S",
            OrbitType::Primary => "P",
            OrbitType::Crazy => "Crazy",
            OrbitType::Wandering => "Wandering",
        };
        write!(f, "{}", s)
    }
}

/// Classification of a planet by mass and equilibrium temperature.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanetClass {
    Terrestrial,
    SuperEarth,
    Dwarf,
    IceGiant,
    GasGiant,
    HotJupiter,
    IceWorld,
    OceanWorld,
}

impl PlanetClass {
    /// True for the classes without a solid surface.
    pub fn is_giant(self) -> bool {
        matches!(
            self,
            PlanetClass::GasGiant | PlanetClass::HotJupiter | PlanetClass::IceGiant
        )
    }
}

impl fmt::Display for PlanetClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            PlanetClass::Terrestrial => "Terrestrial",
            PlanetClass::SuperEarth => "Super-Earth",
            PlanetClass::Dwarf => "Dwarf",
            PlanetClass::IceGiant => "Ice Giant",
            PlanetClass::GasGiant => "Gas Giant",
            PlanetClass::HotJupiter => "Hot Jupiter",
            PlanetClass::IceWorld => "Ice World",
            PlanetClass::OceanWorld => "Ocean World",
        };
        write!(f, "{}", s)
    }
}

/// Kind of atmosphere a planet retains.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Atmosphere {
    None,
    Thin,
    Breathable,
    Thick,
    Toxic,
    HydrogenHelium,
}

impl fmt::Display for Atmosphere {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Atmosphere::None => "None",
            Atmosphere::Thin => "Thin",
            Atmosphere::Breathable => "Breathable",
            Atmosphere::Thick => "Thick",
            Atmosphere::Toxic => "Toxic",
            Atmosphere::HydrogenHelium => "Hydrogen-Helium",
        };
        write!(f, "{}", s)
    }
}

/// Environmental hazards flagged on a planet.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hazard {
    Vacuum,
    ToxicAtmosphere,
    Cryogenic,
    ExtremeHeat,
    TidalLock,
    RadiationBelts,
    ClimateExtremes,
    HighGravity,
    LowGravity,
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Hazard::Vacuum => "Vacuum",
            Hazard::ToxicAtmosphere => "Toxic Atmosphere",
            Hazard::Cryogenic => "Cryogenic",
            Hazard::ExtremeHeat => "Extreme Heat",
            Hazard::TidalLock => "Tidal Lock",
            Hazard::RadiationBelts => "Radiation Belts",
            Hazard::ClimateExtremes => "Climate Extremes",
            Hazard::HighGravity => "High Gravity",
            Hazard::LowGravity => "Low Gravity",
        };
        write!(f, "{}", s)
    }
}

/// Coarse surface-climate hint for downstream terrain generation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Biome {
    Temperate,
    Frozen,
    Desert,
}

/// A planet with its orbit, physical attributes, and environment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    pub id: String,
    pub name: String,
    pub kind: PlanetClass,
    pub orbit_type: OrbitType,
    /// Index of the star component this orbit is referenced to.
    pub parent_index: usize,
    pub semimajor_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub longitude_asc_node_deg: f64,
    pub arg_periapsis_deg: f64,
    pub orbital_period_years: f64,
    pub rotation_hours: f64,
    pub tidal_locked: bool,
    pub axial_tilt_deg: f64,
    pub diameter_km: f64,
    pub mass_earth: f64,
    pub gravity_gee: f64,
    pub atmosphere: Atmosphere,
    pub surface_pressure_bar: f64,
    pub albedo: f64,
    pub equilibrium_temp_k: f64,
    pub landable: bool,
    pub hazards: Vec<Hazard>,
    pub in_habitable_zone: bool,
    /// Seed for out-of-scope surface generation.
    pub terrain_seed: u32,
    pub biome_hint: Option<Biome>,
}

/// Category of a belt.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeltType {
    Asteroid,
    Debris,
    Kuiper,
    FallbackDisk,
    AccretionDisk,
}

impl fmt::Display for BeltType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            BeltType::Asteroid => "Asteroid",
            BeltType::Debris => "Debris",
            BeltType::Kuiper => "Kuiper",
            BeltType::FallbackDisk => "FallbackDisk",
            BeltType::AccretionDisk => "AccretionDisk",
        };
        write!(f, "{}", s)
    }
}

/// An annular belt of small bodies around a star component.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Belt {
    pub id: String,
    pub name: String,
    pub kind: BeltType,
    pub parent_index: usize,
    pub inner_au: f64,
    pub outer_au: f64,
    pub mass_earth: f64,
    pub inclination_deg: f64,
    pub eccentricity: f64,
}

/// Classification of a notable minor body.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinorBodyClass {
    Asteroid,
    Comet,
    DwarfPlanet,
}

impl fmt::Display for MinorBodyClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            MinorBodyClass::Asteroid => "Asteroid",
            MinorBodyClass::Comet => "Comet",
            MinorBodyClass::DwarfPlanet => "DwarfPlanet",
        };
        write!(f, "{}", s)
    }
}

/// Bulk composition tags for a minor body.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composition {
    Rock,
    Metal,
    Carbonaceous,
    Icy,
    Volatile,
}

/// A comet, asteroid, or dwarf planet worth cataloging.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MinorBody {
    pub id: String,
    pub name: String,
    pub kind: MinorBodyClass,
    pub composition: Vec<Composition>,
    pub orbit_type: OrbitType,
    pub parent_index: usize,
    pub semimajor_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub longitude_asc_node_deg: f64,
    pub arg_periapsis_deg: f64,
    pub orbital_period_years: f64,
    pub rotation_hours: f64,
    pub diameter_km: f64,
    pub mass_earth: f64,
    pub gravity_gee: f64,
    pub landable: bool,
}
