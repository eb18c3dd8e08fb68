//! Immutable configuration for the density field and system generation.
//!
//! Both parameter structs are validated once, when a sampler or forge is
//! constructed from them; generation itself never re-checks or fails.
use glam::DVec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Galaxy-wide shape and normalization parameters for the stellar density
/// field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct GalaxyParams {
    /// Seed for the whole galaxy; every sector seed derives from it.
    pub galaxy_seed: u32,
    /// Edge length of a cubical sector, in parsecs.
    pub sector_size_pc: f64,
    /// Galactocentric origin offset, in parsecs.
    pub origin_pc: DVec3,
    /// Exponential disk scale length, in kiloparsecs.
    pub disk_scale_len_kpc: f64,
    /// Exponential disk scale height, in kiloparsecs.
    pub disk_scale_height_kpc: f64,
    /// Exponential bulge scale, in kiloparsecs.
    pub bulge_scale_kpc: f64,
    /// Number of logarithmic spiral arms.
    pub spiral_arms: u32,
    /// Amplitude of the spiral density modulation.
    pub spiral_amplitude: f64,
    /// Pitch constant of the logarithmic spiral.
    pub spiral_k: f64,
    /// Local density normalization, in stars per cubic parsec.
    pub local_normalization: f64,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            galaxy_seed: 12345,
            sector_size_pc: 100.0,
            origin_pc: DVec3::ZERO,
            disk_scale_len_kpc: 3.0,
            disk_scale_height_kpc: 0.3,
            bulge_scale_kpc: 1.0,
            spiral_arms: 4,
            spiral_amplitude: 0.3,
            spiral_k: 5.0,
            local_normalization: 1.0,
        }
    }
}

impl GalaxyParams {
    /// Set the galaxy seed.
    pub fn with_seed(mut self, galaxy_seed: u32) -> Self {
        self.galaxy_seed = galaxy_seed;
        self
    }

    /// Set the sector edge length in parsecs.
    pub fn with_sector_size_pc(mut self, sector_size_pc: f64) -> Self {
        self.sector_size_pc = sector_size_pc;
        self
    }

    /// Set the local density normalization in stars per cubic parsec.
    pub fn with_local_normalization(mut self, local_normalization: f64) -> Self {
        self.local_normalization = local_normalization;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.sector_size_pc > 0.0 && self.sector_size_pc.is_finite()) {
            return Err(Error::InvalidConfig(
                "sector_size_pc must be > 0 and finite".into(),
            ));
        }
        if self.spiral_arms < 1 {
            return Err(Error::InvalidConfig("spiral_arms must be >= 1".into()));
        }
        for (name, value) in [
            ("disk_scale_len_kpc", self.disk_scale_len_kpc),
            ("disk_scale_height_kpc", self.disk_scale_height_kpc),
            ("bulge_scale_kpc", self.bulge_scale_kpc),
            ("spiral_amplitude", self.spiral_amplitude),
            ("spiral_k", self.spiral_k),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidConfig(format!("{name} must be finite")));
            }
        }
        if !(self.local_normalization >= 0.0 && self.local_normalization.is_finite()) {
            return Err(Error::InvalidConfig(
                "local_normalization must be >= 0 and finite".into(),
            ));
        }
        Ok(())
    }
}

/// Per-system generation knobs. One instance may drive many expansions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationParams {
    /// Base seed for systems forged without a catalog header.
    pub seed: u32,
    /// Number of planet lanes per system.
    pub planet_count: u32,
    /// Fraction of systems with two stars.
    pub binary_fraction: f64,
    /// Fraction of systems with three stars.
    pub trinary_fraction: f64,
    /// Fraction of planets on eccentric "crazy" orbits.
    pub crazy_orbit_fraction: f64,
    /// Fraction of planets on wandering orbits.
    pub wandering_fraction: f64,
    /// Whether the exotic spectral table (white dwarfs, neutron stars, ...)
    /// is consulted.
    pub include_exotics: bool,
    /// Fraction of star components carrying a ring system.
    pub ringed_star_fraction: f64,
    /// Probability of each belt slot being occupied.
    pub belt_probability: f64,
    /// Mean of the Poisson-distributed minor-body count.
    pub notable_bodies_mean: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            seed: 12345,
            planet_count: 5,
            binary_fraction: 0.2,
            trinary_fraction: 0.1,
            crazy_orbit_fraction: 0.05,
            wandering_fraction: 0.05,
            include_exotics: false,
            ringed_star_fraction: 0.0,
            belt_probability: 0.5,
            notable_bodies_mean: 3.0,
        }
    }
}

impl GenerationParams {
    /// Set the base seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of planet lanes per system.
    pub fn with_planet_count(mut self, planet_count: u32) -> Self {
        self.planet_count = planet_count;
        self
    }

    /// Enable or disable the exotic spectral table.
    pub fn with_include_exotics(mut self, include_exotics: bool) -> Self {
        self.include_exotics = include_exotics;
        self
    }

    /// Set the per-slot belt probability.
    pub fn with_belt_probability(mut self, belt_probability: f64) -> Self {
        self.belt_probability = belt_probability;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("binary_fraction", self.binary_fraction),
            ("trinary_fraction", self.trinary_fraction),
            ("crazy_orbit_fraction", self.crazy_orbit_fraction),
            ("wandering_fraction", self.wandering_fraction),
            ("ringed_star_fraction", self.ringed_star_fraction),
            ("belt_probability", self.belt_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be within [0, 1]"
                )));
            }
        }
        if self.binary_fraction + self.trinary_fraction > 1.0 {
            return Err(Error::InvalidConfig(
                "binary_fraction + trinary_fraction must not exceed 1".into(),
            ));
        }
        if !(self.notable_bodies_mean >= 0.0 && self.notable_bodies_mean.is_finite()) {
            return Err(Error::InvalidConfig(
                "notable_bodies_mean must be >= 0 and finite".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GalaxyParams::default().validate().is_ok());
        assert!(GenerationParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_sector_size() {
        let params = GalaxyParams::default().with_sector_size_pc(0.0);
        assert!(params.validate().is_err());
        let params = GalaxyParams::default().with_sector_size_pc(-50.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_zero_spiral_arms() {
        let params = GalaxyParams {
            spiral_arms: 0,
            ..GalaxyParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_negative_normalization() {
        let params = GalaxyParams::default().with_local_normalization(-1.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_fraction_outside_unit_interval() {
        let params = GenerationParams {
            wandering_fraction: 1.5,
            ..GenerationParams::default()
        };
        assert!(params.validate().is_err());

        let params = GenerationParams {
            belt_probability: -0.1,
            ..GenerationParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_overlapping_multiplicity_fractions() {
        let params = GenerationParams {
            binary_fraction: 0.7,
            trinary_fraction: 0.5,
            ..GenerationParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_invalid_minor_body_mean() {
        let params = GenerationParams {
            notable_bodies_mean: f64::NAN,
            ..GenerationParams::default()
        };
        assert!(params.validate().is_err());

        let params = GenerationParams {
            notable_bodies_mean: -2.0,
            ..GenerationParams::default()
        };
        assert!(params.validate().is_err());
    }
}
