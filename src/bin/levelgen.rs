//! Random level file generator
//!
//! Usage: `levelgen [PATH] [SEED]`
//!
//! Writes a binary level override record (defaults to `level.bin`). With a
//! seed the output is reproducible; without one the seed comes from system
//! entropy and is printed so the level can be regenerated later.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use peg_snap::consts::LEVEL_FILE;
use peg_snap::levelgen::{random_level, write_level};
use peg_snap::sim::PegGrid;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| LEVEL_FILE.to_string());
    let seed = match args.next() {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("usage: levelgen [PATH] [SEED]");
                std::process::exit(2);
            }
        },
        None => rand::rng().next_u64(),
    };

    let grid = PegGrid::standard();
    let mut rng = Pcg32::seed_from_u64(seed);
    let level = random_level(&grid, &mut rng);

    if let Err(err) = write_level(&path, &level) {
        log::error!("failed to write {path}: {err}");
        std::process::exit(1);
    }

    println!("level written to {path} (seed {seed})");
    println!(
        "goal peg {} | enemy peg {} | wall x={} y={} w={} h={}",
        level.goal_idx, level.enemy_idx, level.wall.x, level.wall.y, level.wall.w, level.wall.h
    );
}
