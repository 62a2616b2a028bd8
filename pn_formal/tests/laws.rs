use pn_domain::*;
use pn_formal::*;
use proptest::prelude::*;

type S = StateFormula;
type T = TransitionFormula;

#[derive(Debug, Clone)]
struct NetShape {
    places: usize,
    transitions: usize,
    goals: Vec<bool>,
    // (place -> transition?, place, transition)
    arcs: Vec<(bool, usize, usize)>,
}

impl NetShape {
    fn build(&self) -> PetriNet {
        let mut net = PetriNet::new("random");
        for i in 0..self.places {
            let mut p = Place::new(&format!("p{i}"));
            if self.goals.get(i).copied().unwrap_or(false) {
                p = p.with_tag("g");
            }
            net.add_place(p).unwrap();
        }
        for j in 0..self.transitions {
            net.add_transition(Transition::new(&format!("t{j}"))).unwrap();
        }
        for (forward, i, j) in &self.arcs {
            let p = format!("p{}", i % self.places);
            let t = format!("t{}", j % self.transitions);
            if *forward {
                net.connect(&p, &t).unwrap();
            } else {
                net.connect(&t, &p).unwrap();
            }
        }
        net
    }
}

fn net_shape() -> impl Strategy<Value = NetShape> {
    (1usize..4, 1usize..4).prop_flat_map(|(places, transitions)| {
        (
            prop::collection::vec(any::<bool>(), places),
            prop::collection::vec((any::<bool>(), 0usize..4, 0usize..4), 0..9),
        )
            .prop_map(move |(goals, arcs)| NetShape {
                places,
                transitions,
                goals,
                arcs,
            })
    })
}

fn transition_leaf() -> impl Strategy<Value = T> {
    prop_oneof![
        Just(T::TRUE),
        Just(T::FALSE),
        Just(T::af(Predicate::id("t0"))),
        Just(T::af(Predicate::TERMINAL)),
    ]
}

fn state_leaf() -> impl Strategy<Value = S> {
    prop_oneof![
        Just(S::TRUE),
        Just(S::FALSE),
        Just(S::nf(Predicate::tag("g"))),
        Just(S::nf(Predicate::INITIAL)),
    ]
}

fn state_formula() -> impl Strategy<Value = S> {
    state_leaf().prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(S::not),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| S::and(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| S::or(a, b)),
            transition_leaf().prop_map(S::modal),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| S::exist_until(a, b)),
            inner.clone().prop_map(S::ev),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| S::forall_until(a, b)),
            (inner.clone(), transition_leaf()).prop_map(|(a, t)| S::forall_modal(a, t)),
            (inner.clone(), transition_leaf()).prop_map(|(a, t)| S::exist_modal(a, t)),
            inner.clone().prop_map(S::exist_next),
            inner.clone().prop_map(S::pos),
            inner.prop_map(S::inv),
        ]
    })
}

fn transition_formula() -> impl Strategy<Value = T> {
    transition_leaf().prop_recursive(2, 8, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(T::not),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| T::and(a, b)),
            state_leaf().prop_map(T::target),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| T::forall_until(a, b)),
            inner.clone().prop_map(T::exist_next),
            inner.prop_map(T::ev),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn state_dualities(shape in net_shape(), f in state_formula()) {
        let net = shape.build();
        let paths = PathEnumerator::new(&net).all_paths().unwrap();
        for (n, _) in net.nodes() {
            let derived = [
                S::forall_next(f.clone()),
                S::exist_next(f.clone()),
                S::inv(f.clone()),
                S::pos(f.clone()),
                S::along(f.clone()),
            ];
            for d in derived {
                prop_assert_eq!(d.evaluate(n, &paths), d.rewrite().evaluate(n, &paths), "{}", d);
            }
            prop_assert_eq!(
                S::forall_next(f.clone()).evaluate(n, &paths),
                S::not(S::exist_next(S::not(f.clone()))).evaluate(n, &paths)
            );
            prop_assert_eq!(
                S::along(f.clone()).evaluate(n, &paths),
                S::not(S::ev(S::not(f.clone()))).evaluate(n, &paths)
            );
            prop_assert_eq!(
                S::not(S::not(f.clone())).evaluate(n, &paths),
                f.evaluate(n, &paths)
            );
        }
    }

    #[test]
    fn idempotence(shape in net_shape(), f in state_formula()) {
        let net = shape.build();
        let paths = PathEnumerator::new(&net).all_paths().unwrap();
        for (n, _) in net.nodes() {
            let v = f.evaluate(n, &paths);
            prop_assert_eq!(S::and(f.clone(), f.clone()).evaluate(n, &paths), v);
            prop_assert_eq!(S::or(f.clone(), f.clone()).evaluate(n, &paths), v);
        }
    }

    #[test]
    fn exist_modal_is_monotone(
        shape in net_shape(),
        f in state_formula(),
        g in state_formula(),
        t in transition_leaf(),
    ) {
        let net = shape.build();
        let paths = PathEnumerator::new(&net).all_paths().unwrap();
        // AND(f, g) implies f at every place
        let stronger = S::exist_modal(S::and(f.clone(), g), t.clone());
        let weaker = S::exist_modal(f, t);
        for n in net.places() {
            prop_assert!(!stronger.evaluate(n, &paths) || weaker.evaluate(n, &paths));
        }
    }

    #[test]
    fn transition_dualities(shape in net_shape(), f in transition_formula()) {
        let net = shape.build();
        let paths = PathEnumerator::new(&net).all_paths().unwrap();
        for (n, _) in net.nodes() {
            let derived = [
                T::forall_next(f.clone()),
                T::inv(f.clone()),
                T::pos(f.clone()),
                T::along(f.clone()),
            ];
            for d in derived {
                prop_assert_eq!(d.evaluate(n, &paths), d.rewrite().evaluate(n, &paths), "{}", d);
            }
            prop_assert_eq!(
                T::not(T::not(f.clone())).evaluate(n, &paths),
                f.evaluate(n, &paths)
            );
        }
    }

    #[test]
    fn printed_formulas_parse_back(f in state_formula()) {
        let text = f.to_string();
        prop_assert_eq!(text.parse::<S>(), Ok(f));
    }
}
