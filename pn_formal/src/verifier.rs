//! Checks a batch of formulas at one start node of a net.
use crate::*;
use pn_domain::*;
use rayon::prelude::*;
use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct NamedFormula {
    pub name: String,
    pub formula: Formula,
}

impl NamedFormula {
    pub fn new(name: &str, formula: impl Into<Formula>) -> Self {
        NamedFormula {
            name: name.to_string(),
            formula: formula.into(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Verdict {
    pub name: String,
    pub formula: String,
    pub holds: bool,
}

impl fmt::Display for Verdict {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = if self.holds { "holds" } else { "VIOLATED" };
        write!(fmtr, "{}: {} {}", self.name, self.formula, result)
    }
}

pub struct Verifier<'n> {
    start: NodeIndex,
    paths: PathSet<'n>,
}

impl<'n> Verifier<'n> {
    pub fn new(net: &'n PetriNet, start: &str, config: &EnumeratorConfig) -> PNResult<Self> {
        let start = net.lookup(start)?;
        let paths = PathEnumerator::with_config(net, config.clone()).path_set(start)?;
        debug!(
            start = net.node(start).id(),
            paths = paths.len(),
            "verifier ready"
        );
        Ok(Verifier { start, paths })
    }

    pub fn with_paths(start: NodeIndex, paths: PathSet<'n>) -> Self {
        Verifier { start, paths }
    }

    pub fn start(&self) -> NodeIndex {
        self.start
    }

    pub fn start_kind(&self) -> NodeKind {
        self.paths
            .net()
            .kind(self.start)
            .unwrap_or(NodeKind::Place)
    }

    pub fn paths(&self) -> &PathSet<'n> {
        &self.paths
    }

    /// Parses `text` in the family matching the start node.
    pub fn parse(&self, text: &str) -> PNResult<Formula> {
        Formula::parse_for(self.start_kind(), text)
    }

    pub fn check(&self, formula: &Formula) -> bool {
        formula.evaluate(self.start, &self.paths)
    }

    pub fn check_all(&self, formulas: &[NamedFormula], parallel: bool) -> Vec<Verdict> {
        let run = |nf: &NamedFormula| {
            let _span = info_span!("check", name = %nf.name).entered();
            let holds = self.check(&nf.formula);
            debug!(formula = %nf.formula, holds, "checked");
            Verdict {
                name: nf.name.clone(),
                formula: nf.formula.to_string(),
                holds,
            }
        };
        if parallel {
            formulas.par_iter().map(run).collect()
        } else {
            formulas.iter().map(run).collect()
        }
    }
}
