//! CTL-style formulas over Petri nets and their evaluation.

pub mod formula;
pub use formula::*;

pub mod evaluate;
pub use evaluate::*;

mod temporal;

pub mod render;

pub mod parser;
pub use parser::formula_parser;

pub mod verifier;
pub use verifier::*;
