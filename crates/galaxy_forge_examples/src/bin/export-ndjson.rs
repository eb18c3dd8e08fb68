use std::io::{BufWriter, Write};

use galaxy_forge::prelude::*;
use galaxy_forge_examples::{demo_galaxy, init_tracing};
use serde_json::json;

/// Stream a sector catalog and its expanded systems as line-delimited JSON
/// records tagged `sector`, `header`, or `system`. The entities serialize
/// directly; no generation internals are touched.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let sampler = SectorSampler::try_new(demo_galaxy())?;
    let forge = SystemForge::try_new(GenerationParams::default())?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let sector = sampler.sample(sampler.key(0, 0, 0));
    writeln!(out, "{}", json!({ "type": "sector", "data": sector.key }))?;
    for header in &sector.star_headers {
        writeln!(out, "{}", json!({ "type": "header", "data": header }))?;
    }
    for header in &sector.star_headers {
        let system = forge.expand(header);
        writeln!(out, "{}", json!({ "type": "system", "data": system }))?;
    }
    out.flush()?;

    Ok(())
}
