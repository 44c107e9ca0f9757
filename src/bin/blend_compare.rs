use poisson_blend::config::blend::{load_config, BlendToolConfig};
use poisson_blend::diagnostics::run_comparison;
use poisson_blend::image::io::{load_planar_image, save_planar_image, write_json_file};
use poisson_blend::{PoissonBlender, Schedule};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let source = load_planar_image(&config.source)?;
    let target = load_planar_image(&config.target)?;
    let mask = load_planar_image(&config.mask)?;
    println!(
        "source: {}x{}x{}, target: {}x{}x{}, mask: {}x{}x{}",
        source.w, source.h, source.channels, target.w, target.h, target.channels, mask.w, mask.h,
        mask.channels
    );

    let blender = PoissonBlender::new(config.params).map_err(|e| e.to_string())?;
    let prepare_start = Instant::now();
    let ctx = blender
        .prepare(&source, &target, &mask)
        .map_err(|e| e.to_string())?;
    println!(
        "prepared in {:.3} ms, region={:?}",
        prepare_start.elapsed().as_secs_f64() * 1000.0,
        ctx.region()
    );

    let run = run_comparison(&ctx).map_err(|e| e.to_string())?;
    for variant in &run.report.variants {
        println!(
            "{:>14}: {:>10.3} ms  speedup {:.2}x",
            variant.schedule, variant.elapsed_ms, variant.speedup
        );
    }

    for (schedule, output) in &run.outputs {
        let path = output_path(&config, *schedule);
        save_planar_image(output, &path)?;
        println!("{} output written to {}", schedule.label(), path.display());
    }

    if let Some(report_path) = &config.output.report_json {
        write_json_file(report_path, &run.report)?;
        println!("JSON report written to {}", report_path.display());
    }

    Ok(())
}

fn output_path(config: &BlendToolConfig, schedule: Schedule) -> PathBuf {
    match schedule {
        Schedule::Sequential => config.output.sequential_image.clone(),
        Schedule::StaticBands => config.output.banded_image.clone(),
        Schedule::DynamicChunks => config.output.chunked_image.clone(),
    }
}

fn usage() -> String {
    "Usage: blend_compare <config.json>".to_string()
}
