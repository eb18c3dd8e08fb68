//! Star component generation.
use rand::RngCore;

use crate::model::{RingSystem, StarComponent};
use crate::rng::{chance, normal, rand_range};
use crate::spectra::{pick_spectral_type, star_physical_properties};

/// Forge one star component on its own sub-stream.
///
/// Ring draws only happen when the fraction is non-zero, so a ring-free
/// configuration leaves the component stream untouched past the physical
/// properties.
pub(crate) fn forge_star_component<R: RngCore + ?Sized>(
    rng: &mut R,
    include_exotics: bool,
    ringed_star_fraction: f64,
) -> StarComponent {
    let spectral_type = pick_spectral_type(rng, include_exotics);
    let props = star_physical_properties(rng, spectral_type);

    let rings = if ringed_star_fraction > 0.0 && chance(rng, ringed_star_fraction) {
        let inner_au = rand_range(rng, 0.01, 0.3);
        let outer_au = inner_au + rand_range(rng, 0.05, 0.5);
        Some(RingSystem {
            inner_au,
            outer_au,
            opacity: normal(rng, 0.5, 0.2).clamp(0.05, 0.95),
            inclination_deg: rand_range(rng, 0.0, 30.0),
        })
    } else {
        None
    };

    StarComponent {
        spectral_type,
        mass_msun: props.mass_msun,
        radius_rsun: props.radius_rsun,
        luminosity_lsun: props.luminosity_lsun,
        rings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;

    #[test]
    fn component_is_deterministic_per_stream() {
        let mut a = Mulberry32::new(404);
        let mut b = Mulberry32::new(404);
        assert_eq!(
            forge_star_component(&mut a, true, 0.5),
            forge_star_component(&mut b, true, 0.5)
        );
    }

    #[test]
    fn properties_are_physical() {
        let mut rng = Mulberry32::new(2024);
        for _ in 0..500 {
            let component = forge_star_component(&mut rng, true, 0.3);
            assert!(component.mass_msun > 0.0);
            assert!(component.radius_rsun > 0.0);
            assert!(component.luminosity_lsun >= 0.0);
        }
    }

    #[test]
    fn ring_annulus_is_ordered() {
        let mut rng = Mulberry32::new(9);
        let mut ringed = 0;
        for _ in 0..200 {
            let component = forge_star_component(&mut rng, false, 1.0);
            let rings = component.rings.expect("fraction 1.0 always rings");
            assert!(rings.inner_au >= 0.01);
            assert!(rings.outer_au > rings.inner_au);
            ringed += 1;
        }
        assert_eq!(ringed, 200);
    }

    #[test]
    fn zero_fraction_draws_no_ring() {
        let mut rng = Mulberry32::new(9);
        for _ in 0..200 {
            assert!(forge_star_component(&mut rng, false, 0.0).rings.is_none());
        }
    }
}
