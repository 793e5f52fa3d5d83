//! Benchmarks for base conversion and addition.
//!
//! # Benchmarks
//!
//! - **`convert_base`**: Converts decimal lists of increasing length to base 3
//!   and base 16.
//! - **`to_decimal_text`**: Renders ternary lists back to decimal text.
//! - **`add`**: Adds two decimal lists of the same length.
//!
//! # Test Data
//!
//! Operands are built from a repeating digit pattern at 16, 256 and 2048
//! digits so every run sees the same inputs.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench number
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use numlist_core::{Base, DecimalText as _, DigitList, add, parse_decimal};

const LENGTHS: [usize; 3] = [16, 256, 2048];

fn decimal_operand(len: usize) -> DigitList {
    let text = "31415926535897932384626433832795"
        .chars()
        .cycle()
        .take(len)
        .collect::<String>();
    parse_decimal(&text)
}

fn bench_convert_base(c: &mut Criterion) {
    for len in LENGTHS {
        let list = decimal_operand(len);
        for base in [Base::TERNARY, Base::HEXADECIMAL] {
            c.bench_with_input(
                BenchmarkId::new(format!("convert_base_{base}"), len),
                &list,
                |b, list| b.iter(|| hint::black_box(list).convert_base(base)),
            );
        }
    }
}

fn bench_to_decimal_text(c: &mut Criterion) {
    for len in LENGTHS {
        let list = decimal_operand(len).convert_base(Base::TERNARY);
        c.bench_with_input(
            BenchmarkId::new("to_decimal_text", len),
            &list,
            |b, list| b.iter(|| hint::black_box(list).to_decimal_text()),
        );
    }
}

fn bench_add(c: &mut Criterion) {
    for len in LENGTHS {
        let lhs = decimal_operand(len);
        let rhs = lhs.convert_base(Base::DECIMAL);
        c.bench_with_input(
            BenchmarkId::new("add", len),
            &(lhs, rhs),
            |b, (lhs, rhs)| {
                b.iter_batched(
                    || (hint::black_box(lhs), hint::black_box(rhs)),
                    |(lhs, rhs)| add(lhs, rhs),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    benches,
    bench_convert_base,
    bench_to_decimal_text,
    bench_add
);
criterion_main!(benches);
