//! CSV I/O through polars: run tables out, point clouds in, hulls out.

use anyhow::{bail, Context, Result};
use hull2d::{Point, RunReport};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// Flatten run reports into one row per `(n, engine)`.
pub fn runs_frame(reports: &[RunReport]) -> Result<DataFrame> {
    let rows = reports.iter().flat_map(|r| r.runs.iter().map(move |e| (r.n, e)));
    let mut n = Vec::new();
    let mut engine = Vec::new();
    let mut hull_count = Vec::new();
    let mut elapsed_ms = Vec::new();
    let mut rounds = Vec::new();
    for (size, run) in rows {
        n.push(size as u64);
        engine.push(run.engine.as_str());
        hull_count.push(run.hull_count as u64);
        elapsed_ms.push(run.elapsed.as_secs_f64() * 1e3);
        rounds.push(run.rounds.map(|r| r as u64));
    }
    let df = df!(
        "n" => n,
        "engine" => engine,
        "hull_count" => hull_count,
        "elapsed_ms" => elapsed_ms,
        "rounds" => rounds
    )?;
    Ok(df)
}

/// Read `x,y` columns (any numeric type) from a CSV file.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (i, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => out.push(Point::new(x, y)),
            _ => bail!("row {i} of {} has a missing or non-finite coordinate", path.display()),
        }
    }
    Ok(out)
}

/// Frame with `x,y` columns in vertex order.
pub fn points_frame(points: &[Point]) -> Result<DataFrame> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    Ok(df!("x" => xs, "y" => ys)?)
}

/// Write a frame as CSV with header, creating parent directories.
pub fn write_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull2d::{HullConfig, HullContext};
    use tempfile::tempdir;

    #[test]
    fn points_round_trip_through_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/hull.csv");
        let pts = vec![Point::new(0.0, 0.0), Point::new(1.5, -2.0), Point::new(3.0, 4.25)];
        write_csv(&path, &mut points_frame(&pts).unwrap()).unwrap();
        assert_eq!(read_points(&path).unwrap(), pts);
    }

    #[test]
    fn integer_columns_are_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ints.csv");
        fs::write(&path, "id,x,y\n0,1,2\n1,3,-4\n").unwrap();
        assert_eq!(
            read_points(&path).unwrap(),
            vec![Point::new(1.0, 2.0), Point::new(3.0, -4.0)]
        );
    }

    #[test]
    fn missing_values_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gap.csv");
        fs::write(&path, "x,y\n1.0,2.0\n3.0,\n").unwrap();
        assert!(read_points(&path).is_err());
    }

    #[test]
    fn runs_frame_has_one_row_per_engine() {
        let mut ctx = HullContext::init(HullConfig::default(), &[50, 100]).unwrap();
        let reports = vec![ctx.calculate(50).unwrap(), ctx.calculate(100).unwrap()];
        let df = runs_frame(&reports).unwrap();
        assert_eq!(df.shape(), (6, 5));
        let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["n", "engine", "hull_count", "elapsed_ms", "rounds"]);
    }
}
