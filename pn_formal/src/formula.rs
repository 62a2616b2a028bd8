//! The two formula families.
//!
//! A `StateFormula` talks about places, a `TransitionFormula` about
//! transitions. Operands that cross over (the modal operators) are typed
//! with the other family, so a tree can never put a place formula where a
//! transition formula is expected.

use pn_domain::Predicate;
use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub enum StateFormula {
    TRUE,
    FALSE,
    NF(Predicate),
    NOT(Box<StateFormula>),
    AND(Box<StateFormula>, Box<StateFormula>),
    OR(Box<StateFormula>, Box<StateFormula>),
    MODAL(Box<TransitionFormula>),
    EXIST_UNTIL(Box<StateFormula>, Box<StateFormula>),
    EV(Box<StateFormula>),
    FORALL_UNTIL(Box<StateFormula>, Box<StateFormula>),
    FORALL_MODAL(Box<StateFormula>, Box<TransitionFormula>),
    EXIST_MODAL(Box<StateFormula>, Box<TransitionFormula>),
    EXIST_NEXT(Box<StateFormula>),
    FORALL_NEXT(Box<StateFormula>),
    POS(Box<StateFormula>),
    INV(Box<StateFormula>),
    ALONG(Box<StateFormula>),
}

#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub enum TransitionFormula {
    TRUE,
    FALSE,
    AF(Predicate),
    NOT(Box<TransitionFormula>),
    AND(Box<TransitionFormula>, Box<TransitionFormula>),
    OR(Box<TransitionFormula>, Box<TransitionFormula>),
    /// Holds when the state formula holds at every place the transition
    /// produces into.
    MODAL(Box<StateFormula>),
    EXIST_UNTIL(Box<TransitionFormula>, Box<TransitionFormula>),
    EV(Box<TransitionFormula>),
    FORALL_UNTIL(Box<TransitionFormula>, Box<TransitionFormula>),
    FORALL_MODAL(Box<TransitionFormula>, Box<StateFormula>),
    EXIST_MODAL(Box<TransitionFormula>, Box<StateFormula>),
    EXIST_NEXT(Box<TransitionFormula>),
    FORALL_NEXT(Box<TransitionFormula>),
    POS(Box<TransitionFormula>),
    INV(Box<TransitionFormula>),
    ALONG(Box<TransitionFormula>),
}

impl Default for StateFormula {
    fn default() -> Self {
        StateFormula::TRUE
    }
}

impl Default for TransitionFormula {
    fn default() -> Self {
        TransitionFormula::TRUE
    }
}

fn b<T>(x: T) -> Box<T> {
    Box::new(x)
}

impl StateFormula {
    pub fn nf(pred: Predicate) -> Self {
        StateFormula::NF(pred)
    }

    pub fn not(f: StateFormula) -> Self {
        StateFormula::NOT(b(f))
    }

    pub fn and(f1: StateFormula, f2: StateFormula) -> Self {
        StateFormula::AND(b(f1), b(f2))
    }

    pub fn or(f1: StateFormula, f2: StateFormula) -> Self {
        StateFormula::OR(b(f1), b(f2))
    }

    pub fn modal(t: TransitionFormula) -> Self {
        StateFormula::MODAL(b(t))
    }

    pub fn exist_until(f1: StateFormula, f2: StateFormula) -> Self {
        StateFormula::EXIST_UNTIL(b(f1), b(f2))
    }

    pub fn ev(f: StateFormula) -> Self {
        StateFormula::EV(b(f))
    }

    pub fn forall_until(f1: StateFormula, f2: StateFormula) -> Self {
        StateFormula::FORALL_UNTIL(b(f1), b(f2))
    }

    pub fn forall_modal(f: StateFormula, t: TransitionFormula) -> Self {
        StateFormula::FORALL_MODAL(b(f), b(t))
    }

    pub fn exist_modal(f: StateFormula, t: TransitionFormula) -> Self {
        StateFormula::EXIST_MODAL(b(f), b(t))
    }

    pub fn exist_next(f: StateFormula) -> Self {
        StateFormula::EXIST_NEXT(b(f))
    }

    pub fn forall_next(f: StateFormula) -> Self {
        StateFormula::FORALL_NEXT(b(f))
    }

    pub fn pos(f: StateFormula) -> Self {
        StateFormula::POS(b(f))
    }

    pub fn inv(f: StateFormula) -> Self {
        StateFormula::INV(b(f))
    }

    pub fn along(f: StateFormula) -> Self {
        StateFormula::ALONG(b(f))
    }

    /// Operators defined on top of the primitive basis, expanded one level.
    /// Primitives, and `EXIST_MODAL` which has its own contract, are
    /// returned unchanged.
    pub fn rewrite(&self) -> StateFormula {
        use StateFormula as S;
        match self {
            S::EXIST_NEXT(f) => S::modal(TransitionFormula::target((**f).clone())),
            S::FORALL_NEXT(f) => S::not(S::exist_next(S::not((**f).clone()))),
            S::POS(f) => S::exist_until(S::TRUE, (**f).clone()),
            S::INV(f) => S::not(S::pos(S::not((**f).clone()))),
            S::ALONG(f) => S::not(S::ev(S::not((**f).clone()))),
            other => other.clone(),
        }
    }

    pub fn is_derived(&self) -> bool {
        matches!(
            self,
            StateFormula::EXIST_NEXT(_)
                | StateFormula::FORALL_NEXT(_)
                | StateFormula::POS(_)
                | StateFormula::INV(_)
                | StateFormula::ALONG(_)
        )
    }
}

impl TransitionFormula {
    pub fn af(pred: Predicate) -> Self {
        TransitionFormula::AF(pred)
    }

    pub fn not(f: TransitionFormula) -> Self {
        TransitionFormula::NOT(b(f))
    }

    pub fn and(f1: TransitionFormula, f2: TransitionFormula) -> Self {
        TransitionFormula::AND(b(f1), b(f2))
    }

    pub fn or(f1: TransitionFormula, f2: TransitionFormula) -> Self {
        TransitionFormula::OR(b(f1), b(f2))
    }

    /// The transition-target operator, printed as `MODAL`.
    pub fn target(f: StateFormula) -> Self {
        TransitionFormula::MODAL(b(f))
    }

    pub fn exist_until(f1: TransitionFormula, f2: TransitionFormula) -> Self {
        TransitionFormula::EXIST_UNTIL(b(f1), b(f2))
    }

    pub fn ev(f: TransitionFormula) -> Self {
        TransitionFormula::EV(b(f))
    }

    pub fn forall_until(f1: TransitionFormula, f2: TransitionFormula) -> Self {
        TransitionFormula::FORALL_UNTIL(b(f1), b(f2))
    }

    pub fn forall_modal(t: TransitionFormula, f: StateFormula) -> Self {
        TransitionFormula::FORALL_MODAL(b(t), b(f))
    }

    pub fn exist_modal(t: TransitionFormula, f: StateFormula) -> Self {
        TransitionFormula::EXIST_MODAL(b(t), b(f))
    }

    pub fn exist_next(f: TransitionFormula) -> Self {
        TransitionFormula::EXIST_NEXT(b(f))
    }

    pub fn forall_next(f: TransitionFormula) -> Self {
        TransitionFormula::FORALL_NEXT(b(f))
    }

    pub fn pos(f: TransitionFormula) -> Self {
        TransitionFormula::POS(b(f))
    }

    pub fn inv(f: TransitionFormula) -> Self {
        TransitionFormula::INV(b(f))
    }

    pub fn along(f: TransitionFormula) -> Self {
        TransitionFormula::ALONG(b(f))
    }

    pub fn rewrite(&self) -> TransitionFormula {
        use TransitionFormula as T;
        match self {
            T::FORALL_NEXT(f) => T::not(T::exist_next(T::not((**f).clone()))),
            T::POS(f) => T::exist_until(T::TRUE, (**f).clone()),
            T::INV(f) => T::not(T::pos(T::not((**f).clone()))),
            T::ALONG(f) => T::not(T::ev(T::not((**f).clone()))),
            other => other.clone(),
        }
    }

    pub fn is_derived(&self) -> bool {
        matches!(
            self,
            TransitionFormula::FORALL_NEXT(_)
                | TransitionFormula::POS(_)
                | TransitionFormula::INV(_)
                | TransitionFormula::ALONG(_)
        )
    }
}

/// Either family, for callers that pick the family at run time.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub enum Formula {
    State(StateFormula),
    Transition(TransitionFormula),
}

impl From<StateFormula> for Formula {
    fn from(f: StateFormula) -> Self {
        Formula::State(f)
    }
}

impl From<TransitionFormula> for Formula {
    fn from(f: TransitionFormula) -> Self {
        Formula::Transition(f)
    }
}

#[cfg(test)]
mod test_formula {
    use super::*;

    #[test]
    fn rewrite_one_level() {
        let goal = StateFormula::nf(Predicate::tag("goal"));
        assert_eq!(
            StateFormula::inv(goal.clone()).rewrite(),
            StateFormula::not(StateFormula::pos(StateFormula::not(goal.clone())))
        );
        assert_eq!(
            StateFormula::exist_next(goal.clone()).rewrite(),
            StateFormula::modal(TransitionFormula::target(goal.clone()))
        );
        let em = StateFormula::exist_modal(goal.clone(), TransitionFormula::TRUE);
        assert_eq!(em.rewrite(), em);
        assert!(!em.is_derived());
        assert!(StateFormula::along(goal).is_derived());

        let read = TransitionFormula::af(Predicate::reads("data"));
        assert_eq!(
            TransitionFormula::pos(read.clone()).rewrite(),
            TransitionFormula::exist_until(TransitionFormula::TRUE, read)
        );
    }

    #[test]
    fn formulas_serialize() {
        let f = StateFormula::forall_modal(
            StateFormula::TRUE,
            TransitionFormula::not(TransitionFormula::af(Predicate::erases("data"))),
        );
        let json = serde_json::to_string(&f).unwrap();
        println!("{json}");
        let back: StateFormula = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }
}
