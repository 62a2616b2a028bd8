use crate::temporal::{at_offset, exists_until, forall_eventually, forall_until, successors_in};
use crate::*;
use pn_domain::*;
use rustc_hash::FxHashSet;

pub trait Evaluate {
    /// Whether the formula holds at `node`. A formula evaluated at a node
    /// of the wrong kind is false.
    fn evaluate(&self, node: NodeIndex, paths: &PathSet<'_>) -> bool;
}

pub fn evaluate<F: Evaluate>(formula: &F, node: NodeIndex, paths: &PathSet<'_>) -> bool {
    formula.evaluate(node, paths)
}

fn always(_: NodeIndex, _: &PathSet<'_>) -> bool {
    true
}

impl Evaluate for StateFormula {
    fn evaluate(&self, node: NodeIndex, paths: &PathSet<'_>) -> bool {
        let net = paths.net();
        if !net.is_place(node) {
            return false;
        }
        // the places a transition produces into, as far as the path set shows
        let targets_hold = |t: NodeIndex, f: &StateFormula, expected: bool| {
            successors_in(t, paths)
                .iter()
                .all(|&q| f.evaluate(q, paths) == expected)
        };
        match self {
            StateFormula::TRUE => true,
            StateFormula::FALSE => false,
            StateFormula::NF(p) => p.eval(net, node),
            StateFormula::NOT(f) => !f.evaluate(node, paths),
            StateFormula::AND(f1, f2) => f1.evaluate(node, paths) && f2.evaluate(node, paths),
            StateFormula::OR(f1, f2) => f1.evaluate(node, paths) || f2.evaluate(node, paths),
            StateFormula::MODAL(t) => successors_in(node, paths)
                .iter()
                .any(|&x| t.evaluate(x, paths)),
            StateFormula::EXIST_UNTIL(f1, f2) => exists_until(
                node,
                paths,
                &|n: NodeIndex, ps: &PathSet<'_>| f1.evaluate(n, ps),
                &|n: NodeIndex, ps: &PathSet<'_>| f2.evaluate(n, ps),
            ),
            StateFormula::EV(f) => forall_eventually(node, paths, &|n: NodeIndex, ps: &PathSet<'_>| {
                f.evaluate(n, ps)
            }),
            StateFormula::FORALL_UNTIL(f1, f2) => forall_until(
                node,
                paths,
                &|n: NodeIndex, ps: &PathSet<'_>| f1.evaluate(n, ps),
                &|n: NodeIndex, ps: &PathSet<'_>| f2.evaluate(n, ps),
            ),
            StateFormula::FORALL_MODAL(f, t) => {
                let transitions: FxHashSet<_> = at_offset(node, paths, 1).collect();
                let places: FxHashSet<_> = at_offset(node, paths, 2).collect();
                transitions.iter().all(|x| t.evaluate(*x, paths))
                    && places.iter().all(|x| f.evaluate(*x, paths))
            }
            StateFormula::EXIST_MODAL(f, t) => successors_in(node, paths)
                .iter()
                .any(|&x| t.evaluate(x, paths) && targets_hold(x, f, true)),
            StateFormula::EXIST_NEXT(f) => successors_in(node, paths)
                .iter()
                .any(|&x| targets_hold(x, f, true)),
            StateFormula::FORALL_NEXT(f) => !successors_in(node, paths)
                .iter()
                .any(|&x| targets_hold(x, f, false)),
            StateFormula::POS(f) => exists_until(
                node,
                paths,
                &always,
                &|n: NodeIndex, ps: &PathSet<'_>| f.evaluate(n, ps),
            ),
            StateFormula::INV(f) => !exists_until(
                node,
                paths,
                &always,
                &|n: NodeIndex, ps: &PathSet<'_>| !f.evaluate(n, ps),
            ),
            StateFormula::ALONG(f) => !forall_eventually(node, paths, &|n: NodeIndex, ps: &PathSet<'_>| {
                !f.evaluate(n, ps)
            }),
        }
    }
}

impl Evaluate for TransitionFormula {
    fn evaluate(&self, node: NodeIndex, paths: &PathSet<'_>) -> bool {
        let net = paths.net();
        if !net.is_transition(node) {
            return false;
        }
        // transitions two steps ahead, through any output place
        let next_transitions = move || {
            successors_in(node, paths)
                .into_iter()
                .flat_map(move |q| successors_in(q, paths))
        };
        match self {
            TransitionFormula::TRUE => true,
            TransitionFormula::FALSE => false,
            TransitionFormula::AF(p) => p.eval(net, node),
            TransitionFormula::NOT(f) => !f.evaluate(node, paths),
            TransitionFormula::AND(f1, f2) => f1.evaluate(node, paths) && f2.evaluate(node, paths),
            TransitionFormula::OR(f1, f2) => f1.evaluate(node, paths) || f2.evaluate(node, paths),
            TransitionFormula::MODAL(f) => successors_in(node, paths)
                .iter()
                .all(|&q| f.evaluate(q, paths)),
            TransitionFormula::EXIST_UNTIL(f1, f2) => exists_until(
                node,
                paths,
                &|n: NodeIndex, ps: &PathSet<'_>| f1.evaluate(n, ps),
                &|n: NodeIndex, ps: &PathSet<'_>| f2.evaluate(n, ps),
            ),
            TransitionFormula::EV(f) => forall_eventually(node, paths, &|n: NodeIndex, ps: &PathSet<'_>| {
                f.evaluate(n, ps)
            }),
            TransitionFormula::FORALL_UNTIL(f1, f2) => forall_until(
                node,
                paths,
                &|n: NodeIndex, ps: &PathSet<'_>| f1.evaluate(n, ps),
                &|n: NodeIndex, ps: &PathSet<'_>| f2.evaluate(n, ps),
            ),
            TransitionFormula::FORALL_MODAL(t, f) => {
                let places: FxHashSet<_> = at_offset(node, paths, 1).collect();
                let transitions: FxHashSet<_> = at_offset(node, paths, 2).collect();
                places.iter().all(|x| f.evaluate(*x, paths))
                    && transitions.iter().all(|x| t.evaluate(*x, paths))
            }
            TransitionFormula::EXIST_MODAL(t, f) => successors_in(node, paths).iter().any(|&q| {
                f.evaluate(q, paths) && successors_in(q, paths).iter().all(|&x| t.evaluate(x, paths))
            }),
            TransitionFormula::EXIST_NEXT(f) => next_transitions().any(|x| f.evaluate(x, paths)),
            TransitionFormula::FORALL_NEXT(f) => next_transitions().all(|x| f.evaluate(x, paths)),
            TransitionFormula::POS(f) => exists_until(
                node,
                paths,
                &always,
                &|n: NodeIndex, ps: &PathSet<'_>| f.evaluate(n, ps),
            ),
            TransitionFormula::INV(f) => !exists_until(
                node,
                paths,
                &always,
                &|n: NodeIndex, ps: &PathSet<'_>| !f.evaluate(n, ps),
            ),
            TransitionFormula::ALONG(f) => !forall_eventually(node, paths, &|n: NodeIndex, ps: &PathSet<'_>| {
                !f.evaluate(n, ps)
            }),
        }
    }
}

impl Evaluate for Formula {
    fn evaluate(&self, node: NodeIndex, paths: &PathSet<'_>) -> bool {
        match self {
            Formula::State(f) => f.evaluate(node, paths),
            Formula::Transition(f) => f.evaluate(node, paths),
        }
    }
}
