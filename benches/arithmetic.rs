//! Benchmarks of the digit-buffer arithmetic

extern crate criterion;
extern crate oorandom;
extern crate udecimal;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use udecimal::BigDecimal;


fn random_digit_string(rng: &mut oorandom::Rand32, digit_count: usize) -> String {
    let mut s = String::with_capacity(digit_count);
    // leading digit non-zero to keep the value canonical at that length
    s.push(char::from(b'1' + (rng.rand_range(0..9) as u8)));
    for _ in 1..digit_count {
        s.push(char::from(b'0' + (rng.rand_range(0..10) as u8)));
    }
    s
}

fn bench_addition(c: &mut Criterion) {
    let mut rng = oorandom::Rand32::new(2417851639229258349);

    let a: BigDecimal = random_digit_string(&mut rng, 300).parse().unwrap();
    let b: BigDecimal = random_digit_string(&mut rng, 150).parse().unwrap();

    c.bench_function("add_300_digits", |bencher| {
        bencher.iter(|| black_box(&a) + black_box(&b));
    });
}

fn bench_subtraction(c: &mut Criterion) {
    let mut rng = oorandom::Rand32::new(6364136223846793005);

    let small: BigDecimal = random_digit_string(&mut rng, 150).parse().unwrap();
    let large: BigDecimal = random_digit_string(&mut rng, 300).parse().unwrap();

    c.bench_function("sub_300_digits", |bencher| {
        bencher.iter(|| black_box(&large) - black_box(&small));
    });
}

fn bench_multiplication(c: &mut Criterion) {
    let mut rng = oorandom::Rand32::new(1442695040888963407);

    let big: BigDecimal = random_digit_string(&mut rng, 100).parse().unwrap();
    let small = BigDecimal::from(500u32);

    c.bench_function("mul_by_500", |bencher| {
        bencher.iter(|| black_box(&big) * black_box(&small));
    });
}

fn bench_increment(c: &mut Criterion) {
    let mut rng = oorandom::Rand32::new(1181783497276652981);

    let start: BigDecimal = random_digit_string(&mut rng, 300).parse().unwrap();

    c.bench_function("incr_300_digits", |bencher| {
        bencher.iter(|| {
            let mut n = start.clone();
            n.incr();
            n
        });
    });
}


criterion_group!(
    arithmetic,
    bench_addition,
    bench_subtraction,
    bench_multiplication,
    bench_increment,
);
criterion_main!(arithmetic);
