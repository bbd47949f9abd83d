//! Example: Karatsuba multiplication with a full recursion trace.
//!
//! Run with:
//! `cargo run --example karatsuba`

use dnc_trace::run_karatsuba;
use num_bigint::BigUint;

fn main() {
    let x: BigUint = "314159265358979323846264338327950288419716939937510"
        .parse()
        .expect("literal is a valid integer");
    let y: BigUint = "271828182845904523536028747135266249775724709369995"
        .parse()
        .expect("literal is a valid integer");

    let run = run_karatsuba(&x, &y).expect("structured operands are valid");

    for line in &run.trace {
        println!("{line}");
    }

    // Independent check against direct multiplication, as the original
    // front end surfaced to the user.
    let expected = &x * &y;
    let is_correct = run.product == expected;

    println!();
    println!("{}", "─".repeat(60));
    println!("OUTPUT:");
    println!("  Product = {}", run.product);
    println!("  Result length: {} digits", run.product.to_string().len());
    println!();
    println!("VERIFICATION:");
    println!("  Standard multiplication: {expected}");
    println!("  Karatsuba result:        {}", run.product);
    println!("  Match: {}", if is_correct { "✓ CORRECT" } else { "✗ ERROR" });
    println!();
    println!("Recursive Calls: {}", run.recursive_calls);
    println!(
        "Execution Time: {:.4} ms",
        run.elapsed.as_secs_f64() * 1000.0
    );

    let stats = run.stats();
    println!(
        "Algorithm: {} | n = {} digits | Complexity: {}",
        stats.algorithm, stats.input_size, stats.complexity
    );
}
