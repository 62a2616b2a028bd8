//! Operator symbols and the canonical `SYMBOL(op1, op2)` notation.

use crate::*;
use std::fmt;

impl StateFormula {
    pub fn symbol(&self) -> &'static str {
        match self {
            StateFormula::TRUE => "TRUE",
            StateFormula::FALSE => "FALSE",
            StateFormula::NF(_) => "NF",
            StateFormula::NOT(_) => "NOT",
            StateFormula::AND(_, _) => "AND",
            StateFormula::OR(_, _) => "OR",
            StateFormula::MODAL(_) => "MODAL",
            StateFormula::EXIST_UNTIL(_, _) => "EXIST_UNTIL",
            StateFormula::EV(_) => "EV",
            StateFormula::FORALL_UNTIL(_, _) => "FORALL_UNTIL",
            StateFormula::FORALL_MODAL(_, _) => "FORALL_MODAL",
            StateFormula::EXIST_MODAL(_, _) => "EXIST_MODAL",
            StateFormula::EXIST_NEXT(_) => "EXIST_NEXT",
            StateFormula::FORALL_NEXT(_) => "FORALL_NEXT",
            StateFormula::POS(_) => "POS",
            StateFormula::INV(_) => "INV",
            StateFormula::ALONG(_) => "ALONG",
        }
    }
}

impl TransitionFormula {
    pub fn symbol(&self) -> &'static str {
        match self {
            TransitionFormula::TRUE => "TRUE",
            TransitionFormula::FALSE => "FALSE",
            TransitionFormula::AF(_) => "AF",
            TransitionFormula::NOT(_) => "NOT",
            TransitionFormula::AND(_, _) => "AND",
            TransitionFormula::OR(_, _) => "OR",
            TransitionFormula::MODAL(_) => "MODAL",
            TransitionFormula::EXIST_UNTIL(_, _) => "EXIST_UNTIL",
            TransitionFormula::EV(_) => "EV",
            TransitionFormula::FORALL_UNTIL(_, _) => "FORALL_UNTIL",
            TransitionFormula::FORALL_MODAL(_, _) => "FORALL_MODAL",
            TransitionFormula::EXIST_MODAL(_, _) => "EXIST_MODAL",
            TransitionFormula::EXIST_NEXT(_) => "EXIST_NEXT",
            TransitionFormula::FORALL_NEXT(_) => "FORALL_NEXT",
            TransitionFormula::POS(_) => "POS",
            TransitionFormula::INV(_) => "INV",
            TransitionFormula::ALONG(_) => "ALONG",
        }
    }
}

impl Formula {
    pub fn symbol(&self) -> &'static str {
        match self {
            Formula::State(f) => f.symbol(),
            Formula::Transition(f) => f.symbol(),
        }
    }
}

impl fmt::Display for StateFormula {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.symbol();
        match self {
            StateFormula::TRUE | StateFormula::FALSE => write!(fmtr, "{s}"),
            StateFormula::NF(p) => write!(fmtr, "{s}({p})"),
            StateFormula::NOT(f)
            | StateFormula::EV(f)
            | StateFormula::EXIST_NEXT(f)
            | StateFormula::FORALL_NEXT(f)
            | StateFormula::POS(f)
            | StateFormula::INV(f)
            | StateFormula::ALONG(f) => write!(fmtr, "{s}({f})"),
            StateFormula::MODAL(t) => write!(fmtr, "{s}({t})"),
            StateFormula::AND(f1, f2)
            | StateFormula::OR(f1, f2)
            | StateFormula::EXIST_UNTIL(f1, f2)
            | StateFormula::FORALL_UNTIL(f1, f2) => write!(fmtr, "{s}({f1}, {f2})"),
            StateFormula::FORALL_MODAL(f, t) | StateFormula::EXIST_MODAL(f, t) => {
                write!(fmtr, "{s}({f}, {t})")
            }
        }
    }
}

impl fmt::Display for TransitionFormula {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.symbol();
        match self {
            TransitionFormula::TRUE | TransitionFormula::FALSE => write!(fmtr, "{s}"),
            TransitionFormula::AF(p) => write!(fmtr, "{s}({p})"),
            TransitionFormula::NOT(t)
            | TransitionFormula::EV(t)
            | TransitionFormula::EXIST_NEXT(t)
            | TransitionFormula::FORALL_NEXT(t)
            | TransitionFormula::POS(t)
            | TransitionFormula::INV(t)
            | TransitionFormula::ALONG(t) => write!(fmtr, "{s}({t})"),
            TransitionFormula::MODAL(f) => write!(fmtr, "{s}({f})"),
            TransitionFormula::AND(t1, t2)
            | TransitionFormula::OR(t1, t2)
            | TransitionFormula::EXIST_UNTIL(t1, t2)
            | TransitionFormula::FORALL_UNTIL(t1, t2) => write!(fmtr, "{s}({t1}, {t2})"),
            TransitionFormula::FORALL_MODAL(t, f) | TransitionFormula::EXIST_MODAL(t, f) => {
                write!(fmtr, "{s}({t}, {f})")
            }
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::State(f) => write!(fmtr, "{f}"),
            Formula::Transition(f) => write!(fmtr, "{f}"),
        }
    }
}

#[cfg(test)]
mod render_test {
    use super::*;
    use pn_domain::Predicate;

    #[test]
    fn canonical_strings() {
        let f = StateFormula::along(StateFormula::exist_until(
            StateFormula::modal(TransitionFormula::TRUE),
            StateFormula::nf(Predicate::tag("testMsg")),
        ));
        assert_eq!(f.symbol(), "ALONG");
        assert_eq!(
            f.to_string(),
            r#"ALONG(EXIST_UNTIL(MODAL(TRUE), NF(tag("testMsg"))))"#
        );

        let no_reads = StateFormula::not(StateFormula::modal(TransitionFormula::pos(
            TransitionFormula::af(Predicate::reads("data")),
        )));
        assert_eq!(no_reads.to_string(), r#"NOT(MODAL(POS(AF(reads("data")))))"#);

        let t = TransitionFormula::exist_modal(
            TransitionFormula::FALSE,
            StateFormula::forall_next(StateFormula::TRUE),
        );
        assert_eq!(t.symbol(), "EXIST_MODAL");
        assert_eq!(t.to_string(), "EXIST_MODAL(FALSE, FORALL_NEXT(TRUE))");
        assert_eq!(Formula::from(t).symbol(), "EXIST_MODAL");
    }

    #[test]
    fn symbols_of_every_state_operator() {
        let x = || StateFormula::TRUE;
        let t = || TransitionFormula::TRUE;
        let all = vec![
            (StateFormula::nf(Predicate::TRUE), "NF"),
            (StateFormula::not(x()), "NOT"),
            (StateFormula::and(x(), x()), "AND"),
            (StateFormula::or(x(), x()), "OR"),
            (StateFormula::modal(t()), "MODAL"),
            (StateFormula::exist_until(x(), x()), "EXIST_UNTIL"),
            (StateFormula::ev(x()), "EV"),
            (StateFormula::forall_until(x(), x()), "FORALL_UNTIL"),
            (StateFormula::forall_modal(x(), t()), "FORALL_MODAL"),
            (StateFormula::exist_modal(x(), t()), "EXIST_MODAL"),
            (StateFormula::exist_next(x()), "EXIST_NEXT"),
            (StateFormula::forall_next(x()), "FORALL_NEXT"),
            (StateFormula::pos(x()), "POS"),
            (StateFormula::inv(x()), "INV"),
            (StateFormula::along(x()), "ALONG"),
        ];
        for (f, s) in all {
            assert_eq!(f.symbol(), s);
            assert!(f.to_string().starts_with(&format!("{s}(")));
        }
    }
}
