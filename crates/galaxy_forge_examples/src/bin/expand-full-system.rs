use galaxy_forge::prelude::*;
use galaxy_forge_examples::{demo_galaxy, init_tracing};

/// Catalog one sector, then expand its first star header into a full
/// system and print the details.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let sampler = SectorSampler::try_new(demo_galaxy())?;
    let forge = SystemForge::try_new(
        GenerationParams::default()
            .with_planet_count(7)
            .with_include_exotics(true),
    )?;

    let sector = sampler.sample(sampler.key(0, 0, 0));
    let header = sector
        .star_headers
        .first()
        .ok_or_else(|| anyhow::anyhow!("sector holds no stars"))?;

    let system = forge.expand(header);

    println!("{} (#{:08x})", system.name, system.id);
    for (index, star) in system.components.iter().enumerate() {
        println!(
            "  star {index}: {} {:.2} Msun, {:.3} Rsun, {:.4} Lsun{}",
            star.spectral_type,
            star.mass_msun,
            star.radius_rsun,
            star.luminosity_lsun,
            if star.rings.is_some() { ", ringed" } else { "" }
        );
    }
    for planet in &system.planets {
        println!(
            "  {:<12} {:<12} {:>7.3} AU  {:>6.1} K  {:>5.2} g  {} atmosphere{}",
            planet.name,
            planet.kind.to_string(),
            planet.semimajor_axis_au,
            planet.equilibrium_temp_k,
            planet.gravity_gee,
            planet.atmosphere,
            if planet.in_habitable_zone {
                "  [habitable zone]"
            } else {
                ""
            }
        );
        if !planet.hazards.is_empty() {
            let hazards: Vec<String> = planet.hazards.iter().map(Hazard::to_string).collect();
            println!("      hazards: {}", hazards.join(", "));
        }
    }
    for belt in &system.belts {
        println!(
            "  {:<12} {}  {:.2}-{:.2} AU",
            belt.name, belt.kind, belt.inner_au, belt.outer_au
        );
    }
    for body in &system.notables {
        println!(
            "  {:<12} {}  {:.1} km at {:.2} AU",
            body.name, body.kind, body.diameter_km, body.semimajor_axis_au
        );
    }

    Ok(())
}
