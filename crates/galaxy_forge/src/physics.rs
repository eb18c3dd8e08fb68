//! Closed-form orbital and stellar formulas.
//!
//! Pure functions of numeric inputs, floored so that dependent formulas never
//! see zero or negative denominators. Distances are in AU, masses in solar or
//! Earth units as named, temperatures in kelvin.
use crate::model::StarComponent;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Equilibrium temperature of an Earth-like reference at 1 AU around a
/// 1 L-sun star with albedo 0.3.
pub const EARTH_REFERENCE_TEMP_K: f64 = 278.5;

/// Habitable-zone inner and outer radii in AU, scaling with the square root
/// of luminosity.
pub fn habitable_zone_au(luminosity_lsun: f64) -> (f64, f64) {
    let root_l = luminosity_lsun.max(0.0).sqrt();
    (0.95 * root_l, 1.67 * root_l)
}

/// Snow line distance in AU, beyond which volatiles condense.
pub fn snow_line_au(luminosity_lsun: f64) -> f64 {
    2.7 * luminosity_lsun.max(0.0).sqrt()
}

/// Orbital period in years from Kepler's third law.
///
/// Total system mass is floored near zero so the division cannot blow up.
pub fn kepler_period_years(semimajor_axis_au: f64, total_mass_msun: f64) -> f64 {
    (semimajor_axis_au.powi(3) / total_mass_msun.max(1e-6)).sqrt()
}

/// Blackbody equilibrium temperature in kelvin, normalized to the Earth
/// reference point.
pub fn equilibrium_temp_k(luminosity_lsun: f64, semimajor_axis_au: f64, albedo: f64) -> f64 {
    let l_quarter = luminosity_lsun.max(0.0).powf(0.25);
    let inv_root_r = 1.0 / semimajor_axis_au.max(1e-6).sqrt();
    let albedo_term = ((1.0 - albedo).max(0.0) / 0.7).powf(0.25);
    EARTH_REFERENCE_TEMP_K * l_quarter * inv_root_r * albedo_term
}

/// Sum of component masses in solar masses.
pub fn system_total_mass_msun(components: &[StarComponent]) -> f64 {
    components.iter().map(|c| c.mass_msun).sum()
}

/// Surface gravity in Earth gees from mass in Earth masses and diameter in
/// kilometers. Non-positive radii are treated as zero gravity.
pub fn earth_gravity_gee(mass_earth: f64, diameter_km: f64) -> f64 {
    let radius_re = (diameter_km / 2.0) / EARTH_RADIUS_KM;
    if radius_re <= 0.0 {
        return 0.0;
    }
    mass_earth / (radius_re * radius_re)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectra::SpectralType;

    #[test]
    fn habitable_zone_at_solar_luminosity() {
        let (inner, outer) = habitable_zone_au(1.0);
        assert_eq!(inner, 0.95);
        assert_eq!(outer, 1.67);
    }

    #[test]
    fn habitable_zone_scales_with_root_luminosity() {
        let (inner, _) = habitable_zone_au(4.0);
        assert!((inner - 1.9).abs() < 1e-12);
    }

    #[test]
    fn snow_line_at_solar_luminosity() {
        assert_eq!(snow_line_au(1.0), 2.7);
    }

    #[test]
    fn kepler_period_earth_analog_is_one_year() {
        assert!((kepler_period_years(1.0, 1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn kepler_period_survives_zero_mass() {
        let period = kepler_period_years(1.0, 0.0);
        assert!(period.is_finite());
        assert!(period > 0.0);
    }

    #[test]
    fn equilibrium_temp_earth_reference() {
        let t = equilibrium_temp_k(1.0, 1.0, 0.3);
        assert!((t - EARTH_REFERENCE_TEMP_K).abs() < 1e-9);
    }

    #[test]
    fn equilibrium_temp_falls_with_distance() {
        let near = equilibrium_temp_k(1.0, 0.5, 0.3);
        let far = equilibrium_temp_k(1.0, 5.0, 0.3);
        assert!(near > far);
    }

    #[test]
    fn equilibrium_temp_finite_at_zero_distance() {
        assert!(equilibrium_temp_k(1.0, 0.0, 0.3).is_finite());
    }

    #[test]
    fn gravity_earth_analog_is_one_gee() {
        let g = earth_gravity_gee(1.0, 2.0 * EARTH_RADIUS_KM);
        assert!((g - 1.0).abs() < 1e-12);
    }

    #[test]
    fn gravity_zero_for_degenerate_radius() {
        assert_eq!(earth_gravity_gee(1.0, 0.0), 0.0);
        assert_eq!(earth_gravity_gee(1.0, -10.0), 0.0);
    }

    #[test]
    fn total_mass_sums_components() {
        let star = |mass| StarComponent {
            spectral_type: SpectralType::G,
            mass_msun: mass,
            radius_rsun: 1.0,
            luminosity_lsun: 1.0,
            rings: None,
        };
        let components = vec![star(1.0), star(0.5), star(0.25)];
        assert!((system_total_mass_msun(&components) - 1.75).abs() < 1e-12);
        assert_eq!(system_total_mass_msun(&[]), 0.0);
    }
}
