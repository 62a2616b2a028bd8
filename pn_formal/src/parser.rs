//! Reads the `SYMBOL(op1, op2)` notation back into formula trees. The
//! family of every operand is fixed by its operator, so the grammar has one
//! entry rule per family.

use crate::*;
use pn_domain::{NodeKind, PNError, PNResult, Predicate};
use std::str::FromStr;

peg::parser!(pub grammar formula_parser() for str {
    rule _() = quiet!{[' ' | '\t' | '\n' | '\r']*}

    rule quoted() = "\"" ("\\" [_] / [^ '"' | '\\'])* "\""

    rule balanced() = (quoted() / "(" balanced() ")" / [^ '(' | ')' | '"'])*

    rule predicate() -> Predicate
        = s:$(balanced()) {? Predicate::from_string(s).ok_or("node predicate") }

    rule arg<T>(x: rule<T>) -> T
        = _ "(" v:x() ")" { v }

    rule args<A, B>(a: rule<A>, b: rule<B>) -> (A, B)
        = _ "(" x:a() "," y:b() ")" { (x, y) }

    pub rule state() -> StateFormula
        = _ f:state_op() _ { f }

    rule state_op() -> StateFormula
        = "TRUE" { StateFormula::TRUE }
        / "FALSE" { StateFormula::FALSE }
        / "NF" _ "(" p:predicate() ")" { StateFormula::NF(p) }
        / "NOT" f:arg(<state()>) { StateFormula::not(f) }
        / "AND" x:args(<state()>, <state()>) { StateFormula::and(x.0, x.1) }
        / "OR" x:args(<state()>, <state()>) { StateFormula::or(x.0, x.1) }
        / "MODAL" t:arg(<transition()>) { StateFormula::modal(t) }
        / ("EXISTS_UNTIL" / "EXIST_UNTIL") x:args(<state()>, <state()>) { StateFormula::exist_until(x.0, x.1) }
        / "EXIST_MODAL" x:args(<state()>, <transition()>) { StateFormula::exist_modal(x.0, x.1) }
        / "EXIST_NEXT" f:arg(<state()>) { StateFormula::exist_next(f) }
        / ("FORALL_EVENTUALLY" / "EV") f:arg(<state()>) { StateFormula::ev(f) }
        / "FORALL_UNTIL" x:args(<state()>, <state()>) { StateFormula::forall_until(x.0, x.1) }
        / "FORALL_MODAL" x:args(<state()>, <transition()>) { StateFormula::forall_modal(x.0, x.1) }
        / "FORALL_NEXT" f:arg(<state()>) { StateFormula::forall_next(f) }
        / "POS" f:arg(<state()>) { StateFormula::pos(f) }
        / "INV" f:arg(<state()>) { StateFormula::inv(f) }
        / "ALONG" f:arg(<state()>) { StateFormula::along(f) }

    pub rule transition() -> TransitionFormula
        = _ t:transition_op() _ { t }

    rule transition_op() -> TransitionFormula
        = "TRUE" { TransitionFormula::TRUE }
        / "FALSE" { TransitionFormula::FALSE }
        / "AF" _ "(" p:predicate() ")" { TransitionFormula::AF(p) }
        / "NOT" t:arg(<transition()>) { TransitionFormula::not(t) }
        / "AND" x:args(<transition()>, <transition()>) { TransitionFormula::and(x.0, x.1) }
        / "OR" x:args(<transition()>, <transition()>) { TransitionFormula::or(x.0, x.1) }
        / ("TRANSITION_TARGET" / "MODAL") f:arg(<state()>) { TransitionFormula::target(f) }
        / ("EXISTS_UNTIL" / "EXIST_UNTIL") x:args(<transition()>, <transition()>) { TransitionFormula::exist_until(x.0, x.1) }
        / "EXIST_MODAL" x:args(<transition()>, <state()>) { TransitionFormula::exist_modal(x.0, x.1) }
        / "EXIST_NEXT" t:arg(<transition()>) { TransitionFormula::exist_next(t) }
        / ("FORALL_EVENTUALLY" / "EV") t:arg(<transition()>) { TransitionFormula::ev(t) }
        / "FORALL_UNTIL" x:args(<transition()>, <transition()>) { TransitionFormula::forall_until(x.0, x.1) }
        / "FORALL_MODAL" x:args(<transition()>, <state()>) { TransitionFormula::forall_modal(x.0, x.1) }
        / "FORALL_NEXT" t:arg(<transition()>) { TransitionFormula::forall_next(t) }
        / "POS" t:arg(<transition()>) { TransitionFormula::pos(t) }
        / "INV" t:arg(<transition()>) { TransitionFormula::inv(t) }
        / "ALONG" t:arg(<transition()>) { TransitionFormula::along(t) }
});

impl FromStr for StateFormula {
    type Err = PNError;

    fn from_str(s: &str) -> PNResult<Self> {
        formula_parser::state(s).map_err(|e| PNError::parse(s, e))
    }
}

impl FromStr for TransitionFormula {
    type Err = PNError;

    fn from_str(s: &str) -> PNResult<Self> {
        formula_parser::transition(s).map_err(|e| PNError::parse(s, e))
    }
}

impl Formula {
    /// Parses `text` in the family evaluated at nodes of `kind`.
    pub fn parse_for(kind: NodeKind, text: &str) -> PNResult<Formula> {
        match kind {
            NodeKind::Place => Ok(Formula::State(text.parse()?)),
            NodeKind::Transition => Ok(Formula::Transition(text.parse()?)),
        }
    }
}
