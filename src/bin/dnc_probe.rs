use std::env;
use std::fs;
use std::time::Instant;

use dnc_trace::input::{parse_operands, parse_points};
use dnc_trace::solvers::closest_pair::Point;
use dnc_trace::{run_closest_pair, run_karatsuba};
use num_bigint::BigUint;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("dnc_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    if let Some(path) = options.input.clone() {
        if let Err(err) = run_input_file(&path, &options) {
            eprintln!("dnc_probe: {err}");
            std::process::exit(1);
        }
        return;
    }

    // Print header explaining the test suite
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Divide & Conquer Probe: Performance and Correctness Testing");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("This probe exercises both solvers across increasing input sizes to verify:");
    eprintln!(
        "  • Correctness: Results match brute-force / direct-product baselines (up to size {})",
        options.verify_limit
    );
    eprintln!("  • Performance: Wall-clock time and memory usage scale appropriately");
    eprintln!();
    eprintln!("Metrics explained:");
    eprintln!("  • wall_s: Wall-clock time in seconds (lower is better)");
    eprintln!("  • rss_delta_kib: Memory delta in KiB (measures memory efficiency)");
    eprintln!("  • status: 'passed' = matches baseline, 'not_checked' = too large to verify");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Testing Closest Pair of Points...");
    eprintln!("      Verifying against an O(n²) brute-force oracle where feasible.");
    measurements.extend(run_closest_pair_suite(&options, &mut sys));
    eprintln!();

    eprintln!("[2/2] Testing Karatsuba Integer Multiplication...");
    eprintln!("      Verifying against direct big-integer multiplication.");
    measurements.extend(run_karatsuba_suite(&options, &mut sys));
    eprintln!();

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("dnc_probe: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    input: Option<String>,
    algorithm: Algorithm,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 2048usize;
        let mut input = None;
        let mut algorithm = Algorithm::Auto;

        while let Some(arg) = args.next() {
            if arg == "-h" || arg == "--help" {
                Self::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?;
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a positive integer".to_string())?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?;
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a positive integer".to_string())?;
            } else if let Some(value) = arg.strip_prefix("--input=") {
                input = Some(value.to_string());
            } else if arg == "--input" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --input".to_string())?;
                input = Some(value);
            } else if let Some(value) = arg.strip_prefix("--algorithm=") {
                algorithm = Algorithm::from_str(value)?;
            } else if arg == "--algorithm" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --algorithm".to_string())?;
                algorithm = Algorithm::from_str(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
            input,
            algorithm,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin dnc_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format for the scaling suite (default: csv)
  --verify-limit <N>            Maximum input size to verify via baseline (default: 2048)
  --input <path>                Run one algorithm over a whitespace-separated input file
                                and print its full trace instead of the scaling suite
  --algorithm <auto|closest|integer>
                                Which solver --input feeds; 'auto' detects from the
                                file name (default: auto)
  -h, --help                    Print this help message

Examples:
  cargo run --bin dnc_probe
  cargo run --bin dnc_probe -- --format table --verify-limit 512
  cargo run --bin dnc_probe -- --input closest_demo.txt
  cargo run --bin dnc_probe -- --input numbers.txt --algorithm integer
"
        );
    }
}

#[derive(Copy, Clone)]
enum Algorithm {
    Auto,
    Closest,
    Integer,
}

impl Algorithm {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "auto" => Ok(Self::Auto),
            "closest" => Ok(Self::Closest),
            "integer" => Ok(Self::Integer),
            other => Err(format!("unknown algorithm '{other}'")),
        }
    }

    /// Resolve `auto` by looking for "closest" or "integer" in the file name.
    fn resolve(self, path: &str) -> Result<Self, String> {
        match self {
            Algorithm::Auto => {
                let lower = path.to_lowercase();
                if lower.contains("closest") {
                    Ok(Algorithm::Closest)
                } else if lower.contains("integer") {
                    Ok(Algorithm::Integer)
                } else {
                    Err(format!(
                        "cannot auto-detect algorithm from '{path}'; pass --algorithm closest|integer"
                    ))
                }
            }
            resolved => Ok(resolved),
        }
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_input_file(path: &str, options: &Options) -> Result<(), String> {
    let data = fs::read_to_string(path).map_err(|err| format!("cannot read '{path}': {err}"))?;
    match options.algorithm.resolve(path)? {
        Algorithm::Closest => {
            let points = parse_points(&data).map_err(|err| err.to_string())?;
            let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
            let run = run_closest_pair(&coords).map_err(|err| err.to_string())?;
            for line in &run.trace {
                println!("{line}");
            }
            println!();
            println!("Closest pair: ({:.6}, {:.6}) and ({:.6}, {:.6})",
                run.pair.0.x, run.pair.0.y, run.pair.1.x, run.pair.1.y);
            println!("Distance: {:.8}", run.distance);
            println!("Comparisons: {}", run.comparisons);
            println!("Elapsed: {:.4} ms", run.elapsed.as_secs_f64() * 1000.0);
        }
        Algorithm::Integer => {
            let (x, y) = parse_operands(&data).map_err(|err| err.to_string())?;
            let run = run_karatsuba(&x, &y).map_err(|err| err.to_string())?;
            for line in &run.trace {
                println!("{line}");
            }
            let expected = &x * &y;
            println!();
            println!("Product: {}", run.product);
            println!(
                "Verification: {}",
                if run.product == expected { "✓ CORRECT" } else { "✗ ERROR" }
            );
            println!("Recursive calls: {}", run.recursive_calls);
            println!("Elapsed: {:.4} ms", run.elapsed.as_secs_f64() * 1000.0);
        }
        Algorithm::Auto => unreachable!("resolve never returns Auto"),
    }
    Ok(())
}

fn run_closest_pair_suite(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384];
    let total = SIZES.len();
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &n)| {
            eprint!("      [{}/{}] Testing {} points... ", idx + 1, total, n);
            let mut distance_result = 0.0f64;
            let mut comparisons_result = 0u64;
            let m = measure("closest_pair", format!("points={n}"), sys, || {
                let coords = deterministic_points(n);
                let run = run_closest_pair(&coords).expect("generated input is valid");
                distance_result = run.distance;
                comparisons_result = run.comparisons;

                if n <= options.verify_limit {
                    let points: Vec<Point> =
                        coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
                    let baseline = brute_force_distance(&points);
                    if (baseline - run.distance).abs() < 1e-9 {
                        (VerificationStatus::Passed, None)
                    } else {
                        (
                            VerificationStatus::Failed,
                            Some(format!("expected {baseline}, got {}", run.distance)),
                        )
                    }
                } else {
                    (VerificationStatus::NotChecked, None)
                }
            });
            eprintln!(
                "{} distance={:.4}, comparisons={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                distance_result,
                comparisons_result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_karatsuba_suite(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const DIGITS: &[usize] = &[8, 16, 32, 64, 128, 256, 512, 1024];
    let total = DIGITS.len();
    DIGITS
        .iter()
        .enumerate()
        .map(|(idx, &digits)| {
            eprint!("      [{}/{}] Testing {}-digit operands... ", idx + 1, total, digits);
            let mut calls_result = 0u64;
            let mut product_digits = 0usize;
            let m = measure("karatsuba", format!("digits={digits}"), sys, || {
                let x = deterministic_operand(digits, 1);
                let y = deterministic_operand(digits, 4);
                let run = run_karatsuba(&x, &y).expect("structured operands are valid");
                calls_result = run.recursive_calls;
                product_digits = run.product.to_string().len();

                if digits <= options.verify_limit {
                    let expected = &x * &y;
                    if run.product == expected {
                        (VerificationStatus::Passed, None)
                    } else {
                        (
                            VerificationStatus::Failed,
                            Some("product differs from direct multiplication".to_string()),
                        )
                    }
                } else {
                    (VerificationStatus::NotChecked, None)
                }
            });
            eprintln!(
                "{} product_digits={}, recursive_calls={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                product_digits,
                calls_result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>14}  {:>12}  {}",
        "scenario",
        "size",
        "wall_s",
        "rss_delta_kib",
        "status",
        "detail",
        col1 = col1,
        col2 = col2
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "",
        "",
        "",
        "",
        "",
        "",
        col1 = col1,
        col2 = col2
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail
                .as_ref()
                .map(|s| s.as_str())
                .unwrap_or(""),
            col1 = col1,
            col2 = col2
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory()
    } else {
        0
    }
}

/// Deterministic scattered points: a fixed-multiplier LCG keeps runs
/// reproducible without a rand dependency in the binary.
fn deterministic_points(n: usize) -> Vec<(f64, f64)> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 16) as f64 / (1u64 << 32) as f64
    };
    (0..n).map(|_| (next() * 10_000.0, next() * 10_000.0)).collect()
}

/// Deterministic `digits`-long operand with a non-zero leading digit.
fn deterministic_operand(digits: usize, offset: usize) -> BigUint {
    let mut s = String::with_capacity(digits);
    s.push(char::from(b'1' + ((offset % 9) as u8)));
    for i in 1..digits {
        s.push(char::from(b'0' + (((i * 7 + offset) % 10) as u8)));
    }
    s.parse().expect("digit string is a valid integer")
}

fn brute_force_distance(points: &[Point]) -> f64 {
    let mut min = f64::INFINITY;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = points[i].distance(&points[j]);
            if d < min {
                min = d;
            }
        }
    }
    min
}
