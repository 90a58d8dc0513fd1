use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use permuterm::Wordlist;


fn random_words(n: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..n).map(|_| {
        let len = rng.gen_range(3..12);
        (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
    }).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = random_words(20_000);

    c.bench_function("build 20k", |b| b.iter(|| Wordlist::build(words.iter().map(String::as_str))));

    let wl = Wordlist::build(words.iter().map(String::as_str));
    let queries = ["ab*", "*ab", "a*b", "*ab*", "abcde", "*"];

    { let mut group = c.benchmark_group("lookup");
        for q in queries.iter() {
            group.bench_function(*q, |b| b.iter(|| wl.lookup(q)));
        }
    }

    { let mut group = c.benchmark_group("10s");
        group.sample_size(10);
        group.bench_function("lookup_many", |b| b.iter(|| wl.lookup_many(&queries[..])));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
