use std::time::Instant;

use galaxy_forge::prelude::*;
use galaxy_forge_examples::{demo_galaxy, init_tracing};
use tracing::info;

/// Expand every star in a sector across worker threads, then verify the
/// result matches a serial pass. Generation is pure, so the only
/// coordination is handing out disjoint headers.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let sampler = SectorSampler::try_new(demo_galaxy())?;
    let forge = SystemForge::try_new(GenerationParams::default().with_planet_count(8))?;

    let sector = sampler.sample(sampler.key(0, 0, 0));
    let headers = &sector.star_headers;
    info!("expanding {} systems", headers.len());

    let serial_start = Instant::now();
    let serial: Vec<StarSystem> = headers.iter().map(|h| forge.expand(h)).collect();
    let serial_elapsed = serial_start.elapsed();

    let workers = std::thread::available_parallelism()?.get().min(8);
    let parallel_start = Instant::now();
    let mut parallel: Vec<(usize, StarSystem)> = std::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        for worker in 0..workers {
            let forge = &forge;
            handles.push(scope.spawn(move || {
                headers
                    .iter()
                    .enumerate()
                    .skip(worker)
                    .step_by(workers)
                    .map(|(index, header)| (index, forge.expand(header)))
                    .collect::<Vec<_>>()
            }));
        }
        handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("worker panicked"))
            .collect()
    });
    parallel.sort_by_key(|(index, _)| *index);
    let parallel_elapsed = parallel_start.elapsed();

    let parallel: Vec<StarSystem> = parallel.into_iter().map(|(_, system)| system).collect();
    anyhow::ensure!(parallel == serial, "parallel expansion diverged");

    println!(
        "{} systems: serial {:?}, {} workers {:?}, results identical",
        serial.len(),
        serial_elapsed,
        workers,
        parallel_elapsed
    );

    Ok(())
}
