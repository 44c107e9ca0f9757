use poisson_blend::{BlendParams, PlanarF32, PoissonBlender, Schedule};
use std::time::Instant;

fn main() {
    // Demo stub: blends a synthetic square patch and prints the solve time
    let (w, h, channels) = (128usize, 128usize, 3usize);
    let mut source = PlanarF32::new(w, h, channels);
    let mut target = PlanarF32::new(w, h, channels);
    let mut mask = PlanarF32::new(w, h, channels);
    for c in 0..channels {
        for y in 0..h {
            for x in 0..w {
                source.set(x, y, c, x as f32 / (w - 1) as f32);
                target.set(x, y, c, y as f32 / (h - 1) as f32);
            }
        }
    }
    for c in 0..channels {
        for y in 40..88 {
            for x in 40..88 {
                mask.set(x, y, c, 1.0);
            }
        }
    }

    let params = BlendParams::default().with_iterations(2000).with_threads(4);
    let blender = match PoissonBlender::new(params) {
        Ok(b) => b,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let ctx = match blender.prepare(&source, &target, &mask) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    match ctx.solve(Schedule::StaticBands) {
        Ok(out) => println!(
            "blended {}x{}x{} region={:?} in {:.3} ms",
            out.w,
            out.h,
            out.channels,
            ctx.region(),
            start.elapsed().as_secs_f64() * 1000.0
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
