//! This bench test normalizes a large, shuffled ledger held in memory.

#![allow(missing_docs)]

use std::fmt::Write;

use criterion::{Criterion, criterion_group, criterion_main};
use meal_ledger::{NameKey, Options, ParseMode, normalize};

/// Generates a ledger of meals in reverse title order with unsorted
/// ingredients
fn generate_ledger(meals: usize) -> String {
    let mut content = String::new();
    for i in (0..meals).rev() {
        if !content.is_empty() {
            content.push('\n');
        }
        writeln!(content, "Meal {i:05}").unwrap();
        for j in (0..12).rev() {
            if j % 3 == 0 {
                writeln!(content, "pinch of spice {j}").unwrap();
            } else {
                writeln!(content, "{j}/2 cup ingredient {j}").unwrap();
            }
        }
    }
    content
}

fn normalize_ledger(c: &mut Criterion) {
    let content = generate_ledger(5_000);

    for (name, key) in [("pattern", NameKey::Pattern), ("first word", NameKey::FirstWord)] {
        let options = Options {
            mode: ParseMode::Blocks,
            name_key: key,
        };
        c.bench_function(&format!("normalize ({name})"), |b| {
            b.iter(|| normalize(&content, options).to_string());
        });
    }
}

criterion_group!(benches, normalize_ledger);
criterion_main!(benches);
