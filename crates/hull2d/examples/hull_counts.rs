//! Hull sizes per dataset for quick sanity on the three engines.
//!
//! Usage:
//!   cargo run -p hull2d --example hull_counts -- disc
//!   cargo run -p hull2d --example hull_counts -- circle
//!
//! Prints one line per `n` with every engine's hull count and time.

use hull2d::{HullConfig, HullContext};

fn main() {
    let dataset = std::env::args().nth(1).unwrap_or_else(|| "disc".to_string());
    let dataset = match dataset.parse() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}; usage: hull_counts [disc|ring|circle]");
            return;
        }
    };
    let sizes = [1_000usize, 10_000, 100_000];
    let cfg = HullConfig {
        dataset,
        ..HullConfig::default()
    };
    let mut ctx = HullContext::init(cfg, &sizes).unwrap();
    for n in sizes {
        let report = ctx.calculate(n).unwrap();
        let cols: Vec<String> = report
            .runs
            .iter()
            .map(|r| {
                format!(
                    "{}={} ({:.2} ms)",
                    r.engine,
                    r.hull_count,
                    r.elapsed.as_secs_f64() * 1e3
                )
            })
            .collect();
        println!("{dataset} n={n}: {}", cols.join(", "));
    }
    ctx.terminate();
}
