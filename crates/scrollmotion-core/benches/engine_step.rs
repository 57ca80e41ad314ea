use criterion::{black_box, criterion_group, criterion_main, Criterion};

use scrollmotion_core::{Config, CounterSpec, Engine, Inputs, VisibilitySample};

fn bench_step(c: &mut Criterion) {
    c.bench_function("step_100_active_counters", |b| {
        let mut eng = Engine::new(Config::default());
        let mut samples = Vec::new();
        for i in 0..100 {
            let handle = format!("stat-{i}");
            // Long duration keeps every counter mid-flight for the whole run.
            eng.observe_counter(
                &handle,
                CounterSpec {
                    target: 10_000,
                    duration_ms: 1.0e12,
                    suffix: String::new(),
                },
            );
            samples.push(VisibilitySample::new(&handle, 1.0));
        }
        eng.update(0.0, Inputs { samples });

        let mut now = 0.0;
        b.iter(|| {
            now += 16.0;
            let out = eng.update(now, Inputs::default());
            black_box(out.changes.len());
        });
    });

    c.bench_function("offer_1000_watches_one_hit", |b| {
        let mut eng = Engine::new(Config::default());
        for i in 0..1000 {
            eng.observe_reveal(&format!("card-{i}"));
        }
        let mut now = 0.0;
        b.iter(|| {
            now += 16.0;
            let out = eng.update(
                now,
                Inputs {
                    samples: vec![VisibilitySample::new("card-none", 1.0)],
                },
            );
            black_box(out.is_empty());
        });
    });
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
