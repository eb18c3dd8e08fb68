//! Continuous galactic stellar density field.
//!
//! A pure function from a position in parsecs to expected stars per cubic
//! parsec, combining an exponential radial disk, an exponential vertical
//! falloff, a logarithmic spiral modulation, and a 20%-weighted central
//! bulge. Scale lengths are floored so the exponents stay finite near the
//! core.
use glam::DVec3;
use mint::Vector3;

use crate::config::GalaxyParams;

/// Smallest radial/bulge scale accepted, in kiloparsecs.
const MIN_RADIAL_SCALE_KPC: f64 = 0.1;

/// Smallest vertical scale accepted, in kiloparsecs.
const MIN_VERTICAL_SCALE_KPC: f64 = 0.05;

/// Radius floor for the spiral's logarithm, in kiloparsecs.
const MIN_SPIRAL_RADIUS_KPC: f64 = 0.1;

/// Relative weight of the bulge term against the disk.
const BULGE_WEIGHT: f64 = 0.2;

/// Expected stellar density at a galactic position, in stars per cubic
/// parsec.
pub fn local_star_density_per_pc3(position_pc: Vector3<f64>, params: &GalaxyParams) -> f64 {
    let p = DVec3::from(position_pc);

    // Galactocentric cylindrical coordinates at kiloparsec scale.
    let xk = p.x / 1000.0 - params.origin_pc.x / 1000.0;
    let yk = p.y / 1000.0 - params.origin_pc.y / 1000.0;
    let zk = p.z / 1000.0 - params.origin_pc.z / 1000.0;

    let radius = (xk * xk + yk * yk).sqrt();
    let azimuth = yk.atan2(xk);

    let radial = (-radius / params.disk_scale_len_kpc.max(MIN_RADIAL_SCALE_KPC)).exp();
    let vertical = (-zk.abs() / params.disk_scale_height_kpc.max(MIN_VERTICAL_SCALE_KPC)).exp();

    let arms = f64::from(params.spiral_arms.max(1));
    let spiral = 1.0
        + params.spiral_amplitude
            * (params.spiral_k * radius.max(MIN_SPIRAL_RADIUS_KPC).ln() - arms * azimuth).cos();

    let bulge = (-radius / params.bulge_scale_kpc.max(MIN_RADIAL_SCALE_KPC)).exp();

    (radial * vertical * spiral + BULGE_WEIGHT * bulge) * params.local_normalization
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_disk() -> GalaxyParams {
        GalaxyParams {
            spiral_amplitude: 0.0,
            ..GalaxyParams::default()
        }
    }

    fn at(x: f64, y: f64, z: f64) -> Vector3<f64> {
        Vector3 { x, y, z }
    }

    #[test]
    fn density_falls_with_radius() {
        let params = flat_disk();
        let near = local_star_density_per_pc3(at(100.0, 0.0, 0.0), &params);
        let far = local_star_density_per_pc3(at(8000.0, 0.0, 0.0), &params);
        assert!(near > far);
        assert!(far > 0.0);
    }

    #[test]
    fn density_falls_with_height() {
        let params = flat_disk();
        let plane = local_star_density_per_pc3(at(2000.0, 0.0, 0.0), &params);
        let above = local_star_density_per_pc3(at(2000.0, 0.0, 500.0), &params);
        assert!(plane > above);
    }

    #[test]
    fn density_is_symmetric_about_the_plane() {
        let params = flat_disk();
        let above = local_star_density_per_pc3(at(2000.0, 1000.0, 300.0), &params);
        let below = local_star_density_per_pc3(at(2000.0, 1000.0, -300.0), &params);
        assert_eq!(above, below);
    }

    #[test]
    fn normalization_scales_linearly() {
        let base = flat_disk();
        let doubled = base.clone().with_local_normalization(2.0);
        let position = at(1500.0, 500.0, 50.0);
        let d1 = local_star_density_per_pc3(position, &base);
        let d2 = local_star_density_per_pc3(position, &doubled);
        assert!((d2 / d1 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn origin_offset_shifts_the_field() {
        let centered = flat_disk();
        let offset = GalaxyParams {
            origin_pc: DVec3::new(5000.0, 0.0, 0.0),
            ..flat_disk()
        };
        let at_offset_center = local_star_density_per_pc3(at(5000.0, 0.0, 0.0), &offset);
        let at_true_center = local_star_density_per_pc3(at(0.0, 0.0, 0.0), &centered);
        assert_eq!(at_offset_center, at_true_center);
    }

    #[test]
    fn spiral_modulates_around_the_smooth_disk() {
        let smooth = flat_disk();
        let spiral = GalaxyParams::default();
        let mut above = 0;
        let mut below = 0;
        for i in 0..64 {
            let angle = f64::from(i) * std::f64::consts::TAU / 64.0;
            let position = at(4000.0 * angle.cos(), 4000.0 * angle.sin(), 0.0);
            let flat = local_star_density_per_pc3(position, &smooth);
            let modulated = local_star_density_per_pc3(position, &spiral);
            if modulated > flat {
                above += 1;
            } else {
                below += 1;
            }
        }
        assert!(above > 0, "spiral never rises above the smooth disk");
        assert!(below > 0, "spiral never dips below the smooth disk");
    }

    #[test]
    fn degenerate_scales_stay_finite() {
        let params = GalaxyParams {
            disk_scale_len_kpc: 0.0,
            disk_scale_height_kpc: 0.0,
            bulge_scale_kpc: 0.0,
            ..GalaxyParams::default()
        };
        let density = local_star_density_per_pc3(at(0.0, 0.0, 0.0), &params);
        assert!(density.is_finite());
        assert!(density >= 0.0);
    }
}
