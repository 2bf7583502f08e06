use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hull2d::validate::{encloses, reference_hull, sort_ccw};
use hull2d::{Engine, HullContext};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod provenance;
mod table;

use config::{resolve, RunFile};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "hull2d")]
#[command(about = "Convex hull benchmark runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Hull seeded clouds with every engine and write a timing table
    Run(RunArgs),
    /// Hull the x,y columns of a CSV file
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "quickhull")]
        engine: String,
        #[arg(long)]
        out: PathBuf,
        /// Write vertices counter-clockwise from the lexicographic minimum
        #[arg(long)]
        ccw: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args, Clone, Debug, Default)]
struct RunArgs {
    /// JSON file with seed, dataset, sizes, engines; flags win over it
    #[arg(long)]
    config: Option<PathBuf>,
    /// disc, ring (annulus) or circle
    #[arg(long)]
    dataset: Option<String>,
    #[arg(long)]
    seed: Option<u64>,
    /// Point counts, comma separated
    #[arg(long = "n", value_delimiter = ',')]
    sizes: Vec<usize>,
    /// Engines in execution order, comma separated
    #[arg(long, value_delimiter = ',')]
    engines: Vec<String>,
    #[arg(long)]
    out: PathBuf,
    /// Fail unless every engine matches the reference hull
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => run(args),
        Action::Hull {
            input,
            engine,
            out,
            ccw,
        } => hull(&input, &engine, &out, ccw),
        Action::Report => report(),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let file = match &args.config {
        Some(path) => RunFile::load(path)?,
        None => RunFile::default(),
    };
    let flags = RunFile {
        seed: args.seed,
        dataset: args.dataset.clone(),
        sizes: Some(args.sizes.clone()),
        engines: Some(args.engines.clone()),
    };
    let settings = resolve(file, flags)?;
    let cfg = settings.config.clone();
    tracing::info!(
        dataset = %cfg.dataset,
        seed = cfg.seed,
        sizes = ?settings.sizes,
        engines = ?cfg.engines,
        out = %args.out.display(),
        "run"
    );

    let mut ctx = HullContext::init(cfg.clone(), &settings.sizes)?;
    let mut reports = Vec::with_capacity(settings.sizes.len());
    for &n in &settings.sizes {
        let report = ctx
            .calculate(n)
            .with_context(|| format!("calculating n = {n}"))?;
        for r in &report.runs {
            tracing::info!(
                n,
                engine = %r.engine,
                hull_count = r.hull_count,
                elapsed_ms = r.elapsed.as_secs_f64() * 1e3,
                "engine done"
            );
        }
        if args.check {
            check(&ctx, &report)?;
        }
        reports.push(report);
    }
    ctx.terminate();

    let mut df = table::runs_frame(&reports)?;
    table::write_csv(&args.out, &mut df)?;
    let engines: Vec<&str> = cfg.engines.iter().map(|e| e.as_str()).collect();
    let mut payload = Payload::new(json!({
        "dataset": cfg.dataset.as_str(),
        "seed": cfg.seed,
        "sizes": settings.sizes,
        "engines": engines,
        "check": args.check,
    }));
    if let Some(path) = &args.config {
        payload = payload.with_input(path);
    }
    write_sidecar(&args.out, payload)?;
    Ok(())
}

/// Every engine's count must equal the reference hull; the visible hull must enclose the cloud.
fn check(ctx: &HullContext, report: &hull2d::RunReport) -> Result<()> {
    let expected = reference_hull(ctx.source()).len();
    for r in &report.runs {
        if r.hull_count != expected {
            bail!(
                "n = {}: {} found {} vertices, reference has {expected}",
                report.n,
                r.engine,
                r.hull_count
            );
        }
    }
    if !encloses(ctx.hull(), ctx.source(), 1e-9) {
        bail!("n = {}: hull does not enclose the cloud", report.n);
    }
    Ok(())
}

fn hull(input: &Path, engine: &str, out: &Path, ccw: bool) -> Result<()> {
    let engine: Engine = engine.parse()?;
    let mut points = table::read_points(input)?;
    tracing::info!(input = %input.display(), n = points.len(), %engine, "hull");

    let h = engine.instantiate(points.len()).hull(&mut points);
    points.truncate(h);
    if ccw && !engine.is_ordered() {
        sort_ccw(&mut points);
    }
    tracing::info!(hull_count = h, "hull done");

    table::write_csv(out, &mut table::points_frame(&points)?)?;
    let payload = Payload::new(json!({ "engine": engine.as_str(), "ccw": ccw })).with_input(input);
    write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let mut obj = provenance::header();
    obj["engines"] = json!(Engine::ALL.iter().map(|e| e.as_str()).collect::<Vec<_>>());
    obj["datasets"] = json!(hull2d::sample::Dataset::ALL
        .iter()
        .map(|d| d.as_str())
        .collect::<Vec<_>>());
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn run_writes_table_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out/runs.csv");
        let args = RunArgs {
            dataset: Some("ring".into()),
            seed: Some(1),
            sizes: vec![200, 1_000],
            out: out.clone(),
            check: true,
            ..RunArgs::default()
        };
        run(args).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("n,engine,hull_count,elapsed_ms,rounds"));
        assert_eq!(text.lines().count(), 1 + 2 * 3);
        assert!(dir.path().join("out/runs.provenance.json").exists());
    }

    #[test]
    fn hull_reads_and_writes_csv() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("cloud.csv");
        fs::write(&input, "x,y\n0,0\n2,0\n1,1\n2,2\n0,2\n1,0\n").unwrap();
        let out = dir.path().join("hull.csv");
        hull(&input, "segmented", &out, true).unwrap();
        let pts = table::read_points(&out).unwrap();
        let expected: Vec<hull2d::Point> = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]
            .into_iter()
            .map(hull2d::Point::from)
            .collect();
        assert_eq!(pts, expected);

        assert!(hull(&input, "jarvis", &out, false).is_err());
    }

    #[test]
    fn cli_parses_lists() {
        let cmd = Cmd::try_parse_from([
            "hull2d", "run", "--n", "10,20", "--engines", "graham,segmented", "--out", "r.csv",
        ])
        .unwrap();
        match cmd.action {
            Action::Run(args) => {
                assert_eq!(args.sizes, vec![10, 20]);
                assert_eq!(args.engines, vec!["graham", "segmented"]);
            }
            _ => panic!("expected run"),
        }
    }
}
