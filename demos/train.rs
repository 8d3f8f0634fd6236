use fsst_rs::{Trainer, TrainerConfig, CODE_BASE};
use std::env;
use std::fs;
use std::process;

/// Demo/verification driver.
///
/// Trains a symbol table on a file (or, with no argument, on the 13-byte
/// sample from section 4.2 of the FSST paper with 3-byte symbols), then
/// prints the learned symbols and the sample re-encoded through the table,
/// one matched symbol per '|'-delimited cell.
///
/// Usage: cargo run --example train [filename]
fn main() {
    let args: Vec<String> = env::args().collect();

    let (sample, config) = match args.len() {
        1 => (
            b"tumcwitumvldb".to_vec(),
            TrainerConfig {
                max_symbol_len: 3,
                ..TrainerConfig::default()
            },
        ),
        2 => {
            let data = fs::read(&args[1]).unwrap_or_else(|_| {
                eprintln!("File \"{}\" not found.", args[1]);
                process::exit(1);
            });
            (data, TrainerConfig::default())
        }
        _ => {
            eprintln!("Usage: {} [filename]", args[0]);
            process::exit(1);
        }
    };

    let table = Trainer::new(config).train(&sample).unwrap_or_else(|err| {
        eprintln!("Training failed: {err}");
        process::exit(1);
    });

    println!("=== Learned symbols (multi-byte) ===");
    for (i, sym) in table.learned_symbols().enumerate() {
        if sym.len() > 1 {
            println!("{:>3}: {}", CODE_BASE as usize + i, sym);
        }
    }

    let codes = table.encode(&sample);
    assert_eq!(table.decode(&codes), sample, "round-trip must be exact");

    let mut delimited = String::from("|");
    for &code in codes.iter().take(64) {
        delimited.push_str(&table.lookup(code).to_string());
        delimited.push('|');
    }
    println!("\nEncoded sample ({} codes): {}", codes.len(), delimited);

    let stats = table.compression_stats(&sample);
    println!("\n=== Statistics ===");
    println!("Input bytes: {}", stats.input_length);
    println!("Codes emitted: {}", stats.code_count);
    println!("Learned symbols: {}", stats.num_symbols);
    println!("Compression ratio: {:.2}%", stats.compression_ratio());
}
