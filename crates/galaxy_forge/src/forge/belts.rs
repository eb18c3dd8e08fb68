//! Belt generation, positioned relative to the snow line.
use rand::RngCore;

use crate::forge::short_id;
use crate::model::{Belt, BeltType};
use crate::physics::snow_line_au;
use crate::rng::{chance, rand_range};

/// Kuiper-analog slot probability relative to the main-belt slot.
const KUIPER_PROBABILITY_FACTOR: f64 = 0.7;

/// Forge the belt population on its own sub-stream.
///
/// Two independent slots: an asteroid-analog belt just inside the snow
/// line and a Kuiper-analog belt well outside it. Zero probability skips
/// the stream entirely.
pub(crate) fn forge_belts<R: RngCore + ?Sized>(
    rng: &mut R,
    parent_index: usize,
    luminosity_lsun: f64,
    belt_probability: f64,
) -> Vec<Belt> {
    let mut belts = Vec::new();
    if belt_probability <= 0.0 {
        return belts;
    }
    let frost = snow_line_au(luminosity_lsun);

    if chance(rng, belt_probability) {
        let inner_au = rand_range(rng, frost * 0.6, frost * 0.9);
        let outer_au = inner_au + rand_range(rng, 0.2, 1.0);
        belts.push(Belt {
            id: short_id(rng),
            name: "Main Belt".to_owned(),
            kind: BeltType::Asteroid,
            parent_index,
            inner_au,
            outer_au,
            mass_earth: rand_range(rng, 0.0001, 0.05),
            inclination_deg: rand_range(rng, 0.0, 10.0),
            eccentricity: rand_range(rng, 0.0, 0.2),
        });
    }

    if chance(rng, belt_probability * KUIPER_PROBABILITY_FACTOR) {
        let inner_au = rand_range(rng, frost * 2.5, frost * 4.5);
        let outer_au = inner_au + rand_range(rng, 5.0, 20.0);
        belts.push(Belt {
            id: short_id(rng),
            name: "Kuiper Belt".to_owned(),
            kind: BeltType::Kuiper,
            parent_index,
            inner_au,
            outer_au,
            mass_earth: rand_range(rng, 0.01, 0.2),
            inclination_deg: rand_range(rng, 0.0, 20.0),
            eccentricity: rand_range(rng, 0.0, 0.3),
        });
    }

    belts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;

    #[test]
    fn zero_probability_yields_no_belts() {
        let mut rng = Mulberry32::new(1);
        assert!(forge_belts(&mut rng, 0, 1.0, 0.0).is_empty());
    }

    #[test]
    fn certain_probability_fills_both_slots() {
        let mut rng = Mulberry32::new(2);
        let belts = forge_belts(&mut rng, 0, 1.0, 1.0);
        assert_eq!(belts.len(), 2);
        assert_eq!(belts[0].kind, BeltType::Asteroid);
        assert_eq!(belts[1].kind, BeltType::Kuiper);
    }

    #[test]
    fn belts_straddle_the_snow_line() {
        let frost = snow_line_au(1.0);
        let mut rng = Mulberry32::new(3);
        for _ in 0..100 {
            let belts = forge_belts(&mut rng, 0, 1.0, 1.0);
            let main = &belts[0];
            assert!(main.inner_au >= frost * 0.6 && main.inner_au < frost * 0.9);
            assert!(main.outer_au > main.inner_au);

            let kuiper = &belts[1];
            assert!(kuiper.inner_au >= frost * 2.5 && kuiper.inner_au < frost * 4.5);
            assert!(kuiper.outer_au > kuiper.inner_au);
            assert!(kuiper.inner_au > main.outer_au);
        }
    }

    #[test]
    fn belt_generation_is_deterministic() {
        let mut a = Mulberry32::new(2901);
        let mut b = Mulberry32::new(2901);
        assert_eq!(
            forge_belts(&mut a, 0, 0.8, 0.5),
            forge_belts(&mut b, 0, 0.8, 0.5)
        );
    }
}
