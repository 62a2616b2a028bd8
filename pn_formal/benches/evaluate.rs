use criterion::{criterion_group, criterion_main, Criterion};
use pn_domain::*;
use pn_formal::*;
use rand::prelude::*;
use rand::rngs::StdRng;

// A chain of places with random detours and a few loops back to earlier
// places. Every tenth place is tagged.
fn random_net(length: usize, seed: u64) -> PetriNet {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut net = PetriNet::new("bench");
    for i in 0..length {
        let mut p = Place::new(&format!("p{i}"));
        if i % 10 == 0 {
            p = p.with_tag("checkpoint");
        }
        net.add_place(p).unwrap();
    }
    for i in 0..length - 1 {
        let t = format!("t{i}");
        net.add_transition(Transition::new(&t).reading("data")).unwrap();
        net.connect(&format!("p{i}"), &t).unwrap();
        net.connect(&t, &format!("p{}", i + 1)).unwrap();
        if rng.gen_bool(0.2) {
            let d = format!("d{i}");
            let skip = (i + 2).min(length - 1);
            net.add_transition(Transition::new(&d).erasing("data")).unwrap();
            net.connect(&format!("p{i}"), &d).unwrap();
            net.connect(&d, &format!("p{skip}")).unwrap();
        }
        if i > 0 && rng.gen_bool(0.05) {
            let back = rng.gen_range(0..i);
            let l = format!("l{i}");
            net.add_transition(Transition::new(&l)).unwrap();
            net.connect(&format!("p{i}"), &l).unwrap();
            net.connect(&l, &format!("p{back}")).unwrap();
        }
    }
    net
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let net = random_net(24, 42);
    let paths = PathEnumerator::new(&net).all_paths().unwrap();
    let start = net.lookup("p0").unwrap();

    let checkpoint = StateFormula::nf(Predicate::tag("checkpoint"));
    let erases = TransitionFormula::af(Predicate::erases("data"));
    let formulas = vec![
        StateFormula::inv(StateFormula::not(StateFormula::modal(erases.clone()))),
        StateFormula::forall_until(StateFormula::TRUE, checkpoint.clone()),
        StateFormula::along(StateFormula::pos(checkpoint)),
        StateFormula::forall_modal(StateFormula::TRUE, TransitionFormula::ev(erases)),
    ];

    c.bench_function("evaluate", |b| {
        b.iter(|| {
            formulas
                .iter()
                .filter(|f| f.evaluate(start, &paths))
                .count()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
