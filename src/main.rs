// Demo driver: write seed-deterministic cracked-surface images as SVGs.
//
// Usage: polyfract [SEED_HEX] [COUNT]
// Artifacts land in out/, named after their seed, so any image can be
// regenerated by feeding its filename back in.

use std::env;
use std::error::Error;
use std::fs;

use polyfract::color::to_hex;
use polyfract::generate::{CanvasSize, generate};
use polyfract::io::SvgSurface;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let mut seed: u64 = match args.next() {
        Some(raw) => u64::from_str_radix(raw.trim_start_matches("0x"), 16)?,
        None => rand::random::<u64>() % 0xFF_FFFF_FFFF,
    };
    let count: usize = match args.next() {
        Some(raw) => raw.parse()?,
        None => 1,
    };

    fs::create_dir_all("out")?;
    let canvas = CanvasSize::default();
    for _ in 0..count {
        let mut surface = SvgSurface::new(canvas.width, canvas.height);
        let mode = generate(seed, canvas, &mut surface)?;
        let name = format!("out/{}.svg", &to_hex(seed, 10)[1..]);
        surface.save(&name)?;
        log::info!("{name} ({mode:?})");
        // hop to an unrelated seed for the next artifact
        seed = seed.wrapping_add(rand::random::<u64>() % 0xFF_FFFF_FFFF) % 0xFF_FFFF_FFFF;
    }
    Ok(())
}
