//! Miss-count runner for the registered transpose functions.

use cachetrans::cache::CacheConfig;
use cachetrans::cache::traced::Layout;
use cachetrans::eval::{Evaluation, TUNED_SHAPES, evaluate, miss_budget};
use cachetrans::registry::{Registry, register_functions};

fn main() -> cachetrans::Result<()> {
    env_logger::init();

    let config = CacheConfig::default();
    let layout = Layout::default();

    println!("=== Transpose Cache Simulation ===\n");
    println!(
        "Cache: {} bytes, {} sets × {} line(s), {}-byte blocks\n",
        config.capacity(),
        config.sets(),
        config.lines_per_set(),
        config.block_size()
    );

    let mut registry = Registry::new();
    register_functions(&mut registry)?;

    let mut all_results = Vec::new();

    for &(m, n) in &TUNED_SHAPES {
        println!("Matrix: {}×{}", n, m);
        println!("{}", "-".repeat(72));

        let mut results = Vec::with_capacity(registry.len());
        for entry in registry.entries() {
            results.push(evaluate(entry, m, n, config, layout)?);
        }

        for (i, r) in results.iter().enumerate() {
            println!(
                "{}. {:32} hits:{:6}  misses:{:6}  evictions:{:6}  {}",
                i + 1,
                r.description,
                r.stats.hits,
                r.stats.misses,
                r.stats.evictions,
                if r.correct { "ok" } else { "WRONG" }
            );
        }
        println!();

        all_results.push(((m, n), results));
    }

    print_summary_table(&all_results);
    Ok(())
}

#[allow(clippy::type_complexity)]
fn print_summary_table(all_results: &[((usize, usize), Vec<Evaluation>)]) {
    println!("\n{}", "=".repeat(72));
    println!("SUMMARY (misses)");
    println!("{}", "=".repeat(72));

    print!("\n{:<32}", "Function");
    for ((m, n), _) in all_results {
        print!(" {:>12}", format!("{}×{}", n, m));
    }
    println!();
    println!("{}", "-".repeat(72));

    let num_funcs = all_results.first().map_or(0, |(_, r)| r.len());

    for func_idx in 0..num_funcs {
        print!("{:<32}", all_results[0].1[func_idx].description);
        for (_, results) in all_results {
            let r = &results[func_idx];
            let mark = if r.within_budget() { ' ' } else { '!' };
            print!(" {:>11}{}", r.stats.misses, mark);
        }
        println!();
    }

    print!("{:<32}", "Budget");
    for ((m, n), _) in all_results {
        match miss_budget(*m, *n) {
            Some(budget) => print!(" {:>12}", format!("<{}", budget)),
            None => print!(" {:>12}", "-"),
        }
    }
    println!();

    println!("{}", "=".repeat(72));
    println!("\n! = wrong result or over the miss budget for that shape.\n");
}
