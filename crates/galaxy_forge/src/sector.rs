//! Two-phase catalog sampling: cheap star headers for cubical sectors.
//!
//! Scanning the galaxy only ever pays for headers; the expensive expansion
//! into a full [`crate::model::StarSystem`] is deferred to
//! [`crate::forge::SystemForge`], bridged by the header id. Each sector owns
//! a generator seeded purely from `(galaxy_seed, key)`, so sectors can be
//! sampled in any order, on any thread, with identical results.
use rand::RngCore;
use tracing::debug;

use crate::config::GalaxyParams;
use crate::density::local_star_density_per_pc3;
use crate::distributions::poisson;
use crate::error::Result;
use crate::model::{Sector, SectorKey, StarHeader};
use crate::rng::{derive_seed, rand01, rand_range, Mulberry32};

/// Floor on the expected star count so empty space keeps a small chance of
/// holding a star.
const MIN_EXPECTED_STARS: f64 = 0.1;

/// Samples lightweight star catalogs for cubical sectors of the galaxy.
///
/// Construction validates the configuration once; sampling is infallible
/// afterwards.
#[derive(Clone, Debug)]
pub struct SectorSampler {
    params: GalaxyParams,
}

impl SectorSampler {
    pub fn try_new(params: GalaxyParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The validated configuration this sampler was built from.
    pub fn params(&self) -> &GalaxyParams {
        &self.params
    }

    /// Key of the sector at the given lattice coordinates, using the
    /// configured sector size.
    pub fn key(&self, x: i32, y: i32, z: i32) -> SectorKey {
        SectorKey::new(x, y, z, self.params.sector_size_pc)
    }

    /// Sample the star catalog for one sector.
    ///
    /// The expected count is the density field evaluated at the sector
    /// center times the cube volume; the actual count is a Poisson draw.
    /// Headers carry a uniform position inside the cube, a catalog name,
    /// and an id that doubles as the expansion seed.
    pub fn sample(&self, key: SectorKey) -> Sector {
        let mut rng = Mulberry32::new(sector_seed(self.params.galaxy_seed, key));

        let density = local_star_density_per_pc3(key.center_pc().into(), &self.params);
        let expected = density * key.volume_pc3();
        let count = poisson(&mut rng, expected.max(MIN_EXPECTED_STARS));

        let origin = key.origin_pc();
        let id_base = header_id_base(self.params.galaxy_seed, key);
        let mut star_headers = Vec::with_capacity(count as usize);
        for index in 0..count {
            let x = origin.x + rand_range(&mut rng, 0.0, key.size_pc);
            let y = origin.y + rand_range(&mut rng, 0.0, key.size_pc);
            let z = origin.z + rand_range(&mut rng, 0.0, key.size_pc);
            let system_name = catalog_name(&mut rng);
            star_headers.push(StarHeader {
                id: id_base ^ index,
                system_name,
                position_pc: glam::DVec3::new(x, y, z),
                components: Vec::new(),
            });
        }

        debug!(
            "sector ({}, {}, {}) sampled {} star headers (expected {:.2})",
            key.x,
            key.y,
            key.z,
            star_headers.len(),
            expected
        );
        Sector { key, star_headers }
    }
}

/// Deterministic sector seed from the galaxy seed and lattice coordinates.
fn sector_seed(galaxy_seed: u32, key: SectorKey) -> u32 {
    let salt = key.x.wrapping_mul(73_856_093)
        ^ key.y.wrapping_mul(19_349_663)
        ^ key.z.wrapping_mul(83_492_791);
    derive_seed(galaxy_seed, salt as u32)
}

/// Base value XORed with each star's sequential index to form header ids.
fn header_id_base(galaxy_seed: u32, key: SectorKey) -> u32 {
    let salt = (key.x as u32).wrapping_shl(20) ^ (key.y as u32).wrapping_shl(10) ^ key.z as u32;
    derive_seed(galaxy_seed, salt)
}

/// Short alphanumeric catalog name: two letters and a three-digit number.
fn catalog_name<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let a = (rand01(rng) * 26.0) as u8;
    let b = (rand01(rng) * 26.0) as u8;
    let number = (rand01(rng) * 900.0) as u32 + 100;
    format!(
        "{}{}-{}",
        char::from(b'A' + a),
        char::from(b'A' + b),
        number
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Uniform field with negligible falloff, for count statistics.
    fn flat_params(normalization: f64) -> GalaxyParams {
        GalaxyParams {
            disk_scale_len_kpc: 1e9,
            disk_scale_height_kpc: 1e9,
            bulge_scale_kpc: 1e9,
            spiral_amplitude: 0.0,
            local_normalization: normalization,
            ..GalaxyParams::default()
        }
    }

    #[test]
    fn construction_rejects_invalid_params() {
        let params = GalaxyParams::default().with_sector_size_pc(-1.0);
        assert!(SectorSampler::try_new(params).is_err());
    }

    #[test]
    fn sampling_is_deterministic() {
        let sampler = SectorSampler::try_new(flat_params(5e-6)).unwrap();
        let key = sampler.key(3, -2, 1);
        let first = sampler.sample(key);
        let second = sampler.sample(key);
        assert_eq!(first, second);
    }

    #[test]
    fn order_of_sampling_does_not_matter() {
        let sampler = SectorSampler::try_new(flat_params(5e-6)).unwrap();
        let a = sampler.key(0, 0, 0);
        let b = sampler.key(1, 0, 0);
        let forward = (sampler.sample(a), sampler.sample(b));
        let reverse = (sampler.sample(b), sampler.sample(a));
        assert_eq!(forward.0, reverse.1);
        assert_eq!(forward.1, reverse.0);
    }

    #[test]
    fn positions_stay_inside_the_cube() {
        let sampler = SectorSampler::try_new(flat_params(2e-5)).unwrap();
        let key = sampler.key(-3, 2, 5);
        let origin = key.origin_pc();
        let sector = sampler.sample(key);
        assert!(!sector.star_headers.is_empty());
        for header in &sector.star_headers {
            let p = header.position_pc;
            assert!(p.x >= origin.x && p.x < origin.x + key.size_pc);
            assert!(p.y >= origin.y && p.y < origin.y + key.size_pc);
            assert!(p.z >= origin.z && p.z < origin.z + key.size_pc);
        }
    }

    #[test]
    fn headers_are_lightweight_and_uniquely_identified() {
        let sampler = SectorSampler::try_new(flat_params(2e-5)).unwrap();
        let sector = sampler.sample(sampler.key(0, 0, 0));
        let mut ids = std::collections::HashSet::new();
        for header in &sector.star_headers {
            assert!(header.components.is_empty());
            assert!(!header.system_name.is_empty());
            assert!(ids.insert(header.id), "duplicate id {}", header.id);
        }
    }

    #[test]
    fn catalog_names_follow_the_pattern() {
        let mut rng = Mulberry32::new(13);
        for _ in 0..100 {
            let name = catalog_name(&mut rng);
            let (letters, number) = name.split_once('-').expect("dash separator");
            assert_eq!(letters.len(), 2);
            assert!(letters.chars().all(|c| c.is_ascii_uppercase()));
            let number: u32 = number.parse().expect("numeric suffix");
            assert!((100..1000).contains(&number));
        }
    }

    #[test]
    fn different_galaxy_seeds_give_different_catalogs() {
        let a = SectorSampler::try_new(flat_params(5e-6).with_seed(1)).unwrap();
        let b = SectorSampler::try_new(flat_params(5e-6).with_seed(2)).unwrap();
        let key = a.key(0, 0, 0);
        assert_ne!(a.sample(key), b.sample(key));
    }

    #[test]
    fn doubling_sector_size_scales_counts_by_volume() {
        // Flat field: density is the same at both sector centers, so the
        // expected count ratio is exactly the volume ratio of 8.
        let normalization = 2e-6;
        let mut small_total = 0u64;
        let mut large_total = 0u64;
        let draws = 400;
        for galaxy_seed in 0..draws {
            let small = SectorSampler::try_new(
                flat_params(normalization)
                    .with_seed(galaxy_seed)
                    .with_sector_size_pc(100.0),
            )
            .unwrap();
            let large = SectorSampler::try_new(
                flat_params(normalization)
                    .with_seed(galaxy_seed)
                    .with_sector_size_pc(200.0),
            )
            .unwrap();
            small_total += small.sample(small.key(0, 0, 0)).star_headers.len() as u64;
            large_total += large.sample(large.key(0, 0, 0)).star_headers.len() as u64;
        }
        let ratio = large_total as f64 / small_total as f64;
        assert!((ratio - 8.0).abs() < 1.0, "count ratio {ratio}");
    }
}
