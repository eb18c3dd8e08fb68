//! Weighted stellar classification and per-class physical properties.
//!
//! Spectral types are drawn from two weight tables: the main sequence
//! (M-dominant) and, with a small chance when enabled, an exotic table of
//! stellar remnants and oddities. Physical properties come from
//! type-specific ranges, or from power-law approximations of a sampled mass
//! for ordinary main-sequence stars.
use std::fmt;

use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rng::{chance, rand_range, weighted};

/// Spectral classification of a star component.
#[allow(clippy::upper_case_acronyms)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    /// Carbon star.
    C,
    /// Wolf-Rayet star.
    WR,
    /// White dwarf.
    WD,
    /// Neutron star.
    NS,
    /// Brown dwarf.
    BD,
    /// Black hole.
    BH,
}

impl SpectralType {
    /// True for the ordinary main-sequence classes O through M.
    pub fn is_main_sequence(self) -> bool {
        matches!(
            self,
            SpectralType::O
                | SpectralType::B
                | SpectralType::A
                | SpectralType::F
                | SpectralType::G
                | SpectralType::K
                | SpectralType::M
        )
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
            SpectralType::C => "C",
            SpectralType::WR => "WR",
            SpectralType::WD => "WD",
            SpectralType::NS => "NS",
            SpectralType::BD => "BD",
            SpectralType::BH => "BH",
        };
        write!(f, "{}", s)
    }
}

/// Main-sequence selection weights, M dwarfs dominant.
pub const MAIN_SEQUENCE_WEIGHTS: [(SpectralType, f64); 7] = [
    (SpectralType::M, 76.0),
    (SpectralType::K, 12.0),
    (SpectralType::G, 7.0),
    (SpectralType::F, 3.0),
    (SpectralType::A, 1.5),
    (SpectralType::B, 0.4),
    (SpectralType::O, 0.1),
];

/// Exotic selection weights, consulted with [`EXOTIC_FRACTION`] probability.
pub const EXOTIC_WEIGHTS: [(SpectralType, f64); 6] = [
    (SpectralType::WD, 1.2),
    (SpectralType::WR, 0.2),
    (SpectralType::NS, 0.2),
    (SpectralType::BD, 1.5),
    (SpectralType::BH, 0.05),
    (SpectralType::C, 0.05),
];

/// Chance that a star is drawn from the exotic table when exotics are
/// enabled.
pub const EXOTIC_FRACTION: f64 = 0.03;

/// Solar radius in kilometers.
const SOLAR_RADIUS_KM: f64 = 695_700.0;

/// Schwarzschild radius per solar mass, in kilometers.
const SCHWARZSCHILD_KM_PER_MSUN: f64 = 2.95;

/// Mass, radius, and luminosity of a star component, in solar units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StellarProperties {
    pub mass_msun: f64,
    pub radius_rsun: f64,
    pub luminosity_lsun: f64,
}

/// Draw a spectral type.
///
/// The exotic-table roll always consumes one draw, even when exotics are
/// disabled, so the draw sequence does not depend on the flag.
pub fn pick_spectral_type<R: RngCore + ?Sized>(rng: &mut R, include_exotics: bool) -> SpectralType {
    let exotic_chance = if include_exotics { EXOTIC_FRACTION } else { 0.0 };
    if chance(rng, exotic_chance) {
        *weighted(rng, &EXOTIC_WEIGHTS)
    } else {
        *weighted(rng, &MAIN_SEQUENCE_WEIGHTS)
    }
}

/// Sample a main-sequence mass in solar masses from the type's range.
pub fn sample_main_sequence_mass<R: RngCore + ?Sized>(
    rng: &mut R,
    spectral_type: SpectralType,
) -> f64 {
    match spectral_type {
        SpectralType::O => rand_range(rng, 16.0, 60.0),
        SpectralType::B => rand_range(rng, 2.1, 16.0),
        SpectralType::A => rand_range(rng, 1.4, 2.1),
        SpectralType::F => rand_range(rng, 1.04, 1.4),
        SpectralType::G => rand_range(rng, 0.8, 1.04),
        SpectralType::K => rand_range(rng, 0.45, 0.8),
        SpectralType::M => rand_range(rng, 0.08, 0.45),
        _ => rand_range(rng, 0.8, 1.04),
    }
}

/// Approximate physical properties for a spectral type.
///
/// Exotic classes use type-specific ranges; the main sequence derives radius
/// and luminosity from a sampled mass via `m^0.8` and `m^3.5`.
pub fn star_physical_properties<R: RngCore + ?Sized>(
    rng: &mut R,
    spectral_type: SpectralType,
) -> StellarProperties {
    match spectral_type {
        SpectralType::WD => StellarProperties {
            mass_msun: rand_range(rng, 0.5, 1.1),
            radius_rsun: rand_range(rng, 0.012, 0.015),
            luminosity_lsun: rand_range(rng, 0.0001, 0.01),
        },
        SpectralType::NS => StellarProperties {
            mass_msun: rand_range(rng, 1.1, 2.2),
            // ~10 km
            radius_rsun: 2e-5,
            luminosity_lsun: rand_range(rng, 1e-6, 1e-4),
        },
        SpectralType::BH => {
            let mass_msun = rand_range(rng, 3.0, 20.0);
            StellarProperties {
                mass_msun,
                radius_rsun: mass_msun * SCHWARZSCHILD_KM_PER_MSUN / SOLAR_RADIUS_KM,
                // dark unless accreting
                luminosity_lsun: 0.0,
            }
        }
        SpectralType::BD => StellarProperties {
            mass_msun: rand_range(rng, 0.01, 0.08),
            radius_rsun: rand_range(rng, 0.09, 0.12),
            luminosity_lsun: rand_range(rng, 1e-5, 5e-4),
        },
        SpectralType::WR => StellarProperties {
            mass_msun: rand_range(rng, 10.0, 25.0),
            radius_rsun: rand_range(rng, 1.0, 5.0),
            luminosity_lsun: rand_range(rng, 1e4, 5e5),
        },
        SpectralType::C => StellarProperties {
            mass_msun: rand_range(rng, 1.5, 4.0),
            radius_rsun: rand_range(rng, 50.0, 300.0),
            luminosity_lsun: rand_range(rng, 1e3, 1e4),
        },
        _ => {
            let mass_msun = sample_main_sequence_mass(rng, spectral_type);
            StellarProperties {
                mass_msun,
                radius_rsun: mass_msun.powf(0.8),
                luminosity_lsun: mass_msun.powf(3.5),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;

    #[test]
    fn weight_tables_hold_reference_values() {
        let main_total: f64 = MAIN_SEQUENCE_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((main_total - 100.0).abs() < 1e-9);
        assert_eq!(MAIN_SEQUENCE_WEIGHTS[0], (SpectralType::M, 76.0));
        assert_eq!(EXOTIC_WEIGHTS[0], (SpectralType::WD, 1.2));
        assert_eq!(EXOTIC_FRACTION, 0.03);
    }

    #[test]
    fn disabled_exotics_never_appear() {
        let mut rng = Mulberry32::new(31);
        for _ in 0..10_000 {
            let spectral_type = pick_spectral_type(&mut rng, false);
            assert!(spectral_type.is_main_sequence(), "{spectral_type} drawn");
        }
    }

    #[test]
    fn m_dwarfs_dominate_the_main_sequence() {
        let mut rng = Mulberry32::new(47);
        let n = 50_000;
        let m_count = (0..n)
            .filter(|_| pick_spectral_type(&mut rng, false) == SpectralType::M)
            .count();
        let freq = m_count as f64 / f64::from(n);
        assert!((freq - 0.76).abs() < 0.02, "M frequency {freq}");
    }

    #[test]
    fn exotics_appear_at_the_configured_rate() {
        let mut rng = Mulberry32::new(59);
        let n = 100_000;
        let exotic = (0..n)
            .filter(|_| !pick_spectral_type(&mut rng, true).is_main_sequence())
            .count();
        let freq = exotic as f64 / f64::from(n);
        assert!((freq - EXOTIC_FRACTION).abs() < 0.005, "exotic frequency {freq}");
    }

    #[test]
    fn main_sequence_masses_stay_in_range() {
        let mut rng = Mulberry32::new(61);
        let ranges = [
            (SpectralType::O, 16.0, 60.0),
            (SpectralType::B, 2.1, 16.0),
            (SpectralType::A, 1.4, 2.1),
            (SpectralType::F, 1.04, 1.4),
            (SpectralType::G, 0.8, 1.04),
            (SpectralType::K, 0.45, 0.8),
            (SpectralType::M, 0.08, 0.45),
        ];
        for (spectral_type, lo, hi) in ranges {
            for _ in 0..200 {
                let mass = sample_main_sequence_mass(&mut rng, spectral_type);
                assert!((lo..hi).contains(&mass), "{spectral_type} mass {mass}");
            }
        }
    }

    #[test]
    fn main_sequence_follows_power_laws() {
        let mut rng = Mulberry32::new(71);
        for _ in 0..100 {
            let props = star_physical_properties(&mut rng, SpectralType::G);
            assert!((props.radius_rsun - props.mass_msun.powf(0.8)).abs() < 1e-12);
            assert!((props.luminosity_lsun - props.mass_msun.powf(3.5)).abs() < 1e-12);
        }
    }

    #[test]
    fn black_holes_are_dark_and_compact() {
        let mut rng = Mulberry32::new(83);
        for _ in 0..100 {
            let props = star_physical_properties(&mut rng, SpectralType::BH);
            assert_eq!(props.luminosity_lsun, 0.0);
            assert!((3.0..20.0).contains(&props.mass_msun));
            assert!(props.radius_rsun < 1e-3);
        }
    }

    #[test]
    fn neutron_star_radius_is_fixed() {
        let mut rng = Mulberry32::new(89);
        let props = star_physical_properties(&mut rng, SpectralType::NS);
        assert_eq!(props.radius_rsun, 2e-5);
        assert!((1.1..2.2).contains(&props.mass_msun));
    }

    #[test]
    fn display_uses_catalog_codes() {
        assert_eq!(SpectralType::G.to_string(), "G");
        assert_eq!(SpectralType::WR.to_string(), "WR");
        assert_eq!(SpectralType::BH.to_string(), "BH");
    }
}
