use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "cyclic workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the workload suite once per global allocator and compare
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Restrict the run to these allocator features
        #[arg(long = "allocator", value_parser = parse_allocator)]
        allocators: Vec<&'static str>,
    },
}

const ALLOCATORS: &[&str] = &["alloc-system", "alloc-mimalloc", "alloc-snmalloc", "alloc-jemalloc"];

const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/report.md";

fn parse_allocator(name: &str) -> Result<&'static str, String> {
    let feature = if name.starts_with("alloc-") { name.to_string() } else { format!("alloc-{name}") };
    ALLOCATORS
        .iter()
        .copied()
        .find(|known| *known == feature)
        .ok_or_else(|| format!("unknown allocator `{name}`, expected one of {}", ALLOCATORS.join(", ")))
}

fn baseline_name(feature: &str) -> &str {
    feature.trim_start_matches("alloc-")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            allocators,
        } => {
            let selected: &[&str] = if allocators.is_empty() { ALLOCATORS } else { &allocators };
            if !report_only {
                run_benchmarks(selected, quick)?;
            }
            generate_report(selected)?;
        }
    }

    Ok(())
}

fn run_benchmarks(allocators: &[&str], quick: bool) -> Result<()> {
    println!("Running workload suite for {} allocator(s)...", allocators.len());

    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", "suite", "--release"])
        .status()
        .context("failed to spawn cargo")?;
    if !status.success() {
        bail!("failed to compile the benchmark suite");
    }

    for alloc in allocators {
        println!("\n>>> Benchmarking with feature: {alloc}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0")
            .env("RUSTFLAGS", "-C opt-level=3 -C codegen-units=1");

        cmd.args(["bench", "--bench", "suite", "--no-default-features", "--features", *alloc]);

        // Criterion's own flags follow the separator.
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(baseline_name(alloc));

        if quick {
            cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
        }

        let status = cmd.status().with_context(|| format!("failed to run bench for {alloc}"))?;

        if status.success() {
            println!("Finished {alloc} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: benchmark failed for {alloc}");
        }
    }

    Ok(())
}

/// `estimates.json` as written by criterion; only the mean is used.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// `benchmark.json`; present next to every baseline directory.
#[derive(Deserialize)]
struct BenchmarkInfo {
    #[serde(default)]
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(f64),
    Bytes(f64),
}

/// Operations per second, keyed by workload and then by baseline.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn generate_report(allocators: &[&str]) -> Result<()> {
    println!("\n>>> Generating report...");

    let criterion_dir = Path::new(CRITERION_DIR);
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let mut file =
        fs::File::create(report_path).with_context(|| format!("failed to create {}", report_path.display()))?;

    writeln!(file, "# Allocator Comparison: cyclic workload suite")?;
    writeln!(file)?;

    write!(file, "| Workload |")?;
    for alloc in allocators {
        write!(file, " {} (Ops/s) | vs System |", baseline_name(alloc))?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in allocators {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    for (workload, by_baseline) in &results {
        write!(file, "| {workload} |")?;

        let system_ops = by_baseline.get("system").copied().unwrap_or(0.0);

        for alloc in allocators {
            match by_baseline.get(baseline_name(alloc)) {
                Some(&ops) => {
                    let rel = if system_ops > 0.0 { ops / system_ops } else { 0.0 };
                    write!(file, " {} | **{rel:.2}x** |", format_ops(ops))?;
                }
                None => write!(file, " N/A | - |")?,
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|name| name.to_str()).map(str::to_owned)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Walks `.../<workload>/<baseline>/estimates.json` files below `dir`.
fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if file_name(&path).as_deref() != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else { continue };
        let Some(workload_dir) = baseline_dir.parent() else { continue };
        let (Some(baseline), Some(workload)) = (file_name(baseline_dir), file_name(workload_dir)) else {
            continue;
        };
        if baseline == "report" || workload == "report" {
            continue;
        }

        let estimates: Estimates = read_json(&path)?;
        let time_ns = estimates.mean.point_estimate;
        if time_ns <= 0.0 {
            continue;
        }

        let info: Option<BenchmarkInfo> = read_json(&baseline_dir.join("benchmark.json")).ok();
        let elements = match info.and_then(|info| info.throughput) {
            Some(Throughput::Elements(n) | Throughput::Bytes(n)) => n,
            None => 1.0,
        };

        results
            .entry(workload)
            .or_default()
            .insert(baseline, elements * 1e9 / time_ns);
    }

    Ok(())
}
