use galaxy_forge::prelude::*;
use galaxy_forge_examples::{demo_galaxy, init_tracing};

/// Scan a 3x3x3 block of sectors and print the cheap catalog, never paying
/// for full system expansion.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let sampler = SectorSampler::try_new(demo_galaxy())?;

    let mut total = 0usize;
    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                let sector = sampler.sample(sampler.key(x, y, z));
                total += sector.star_headers.len();
                println!(
                    "sector ({x:>2}, {y:>2}, {z:>2}): {:>3} stars",
                    sector.star_headers.len()
                );
            }
        }
    }
    println!("{total} stars cataloged in 27 sectors");

    let home = sampler.sample(sampler.key(0, 0, 0));
    for header in home.star_headers.iter().take(5) {
        println!(
            "  {:<8} #{:08x} at ({:7.2}, {:7.2}, {:7.2}) pc",
            header.system_name,
            header.id,
            header.position_pc.x,
            header.position_pc.y,
            header.position_pc.z
        );
    }

    Ok(())
}
