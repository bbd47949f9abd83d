//! Example: closest pair of points with a full recursion trace.
//!
//! Run with:
//! `cargo run --example closest_pair`

use dnc_trace::run_closest_pair;

fn main() {
    let coords = [
        (2.0, 3.0),
        (12.0, 30.0),
        (40.0, 50.0),
        (5.0, 1.0),
        (12.0, 10.0),
        (3.0, 4.0),
        (6.0, 8.0),
        (9.0, 2.0),
    ];

    let run = run_closest_pair(&coords).expect("demo input is valid");

    for line in &run.trace {
        println!("{line}");
    }

    println!();
    println!("{}", "─".repeat(60));
    println!("Total Points Analyzed: {}", run.points.len());
    println!("Comparisons Made: {}", run.comparisons);
    println!(
        "Execution Time: {:.4} ms",
        run.elapsed.as_secs_f64() * 1000.0
    );
    println!();
    println!("CLOSEST PAIR FOUND:");
    println!("  Point 1: ({:.6}, {:.6})", run.pair.0.x, run.pair.0.y);
    println!("  Point 2: ({:.6}, {:.6})", run.pair.1.x, run.pair.1.y);
    println!("  Distance: {:.8}", run.distance);
    println!();

    // Mark which input points make up the result pair, the way a canvas
    // renderer would highlight them.
    println!("Points (● marks the closest pair):");
    for p in &run.points {
        let marker = if p.almost_eq(&run.pair.0) || p.almost_eq(&run.pair.1) {
            "●"
        } else {
            "○"
        };
        println!("  {marker} ({:.2}, {:.2})", p.x, p.y);
    }

    let stats = run.stats();
    println!();
    println!(
        "Algorithm: {} | n = {} | {} operations | Complexity: {}",
        stats.algorithm, stats.input_size, stats.operations, stats.complexity
    );
}
