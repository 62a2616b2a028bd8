use crate::config::CheckerConfig;
use anyhow::Context;
use pn_domain::PetriNet;
use pn_formal::{NamedFormula, Verdict, Verifier};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, info_span, warn};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub run_id: Uuid,
    pub net: String,
    pub start: String,
    pub paths: usize,
    pub verdicts: Vec<Verdict>,
}

impl Report {
    pub fn all_hold(&self) -> bool {
        self.verdicts.iter().all(|v| v.holds)
    }
}

pub fn load_net(path: &Path) -> anyhow::Result<PetriNet> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading net {}", path.display()))?;
    PetriNet::from_json(&json).with_context(|| format!("loading net {}", path.display()))
}

fn is_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | ' ' | '.'))
}

/// One formula per line, optionally prefixed with `name:`. Blank lines and
/// lines starting with `#` are skipped.
pub fn formula_lines(text: &str) -> Vec<(String, String)> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| match l.split_once(':') {
            Some((name, formula)) if is_name(name.trim()) => {
                (name.trim().to_string(), formula.trim().to_string())
            }
            _ => (l.to_string(), l.to_string()),
        })
        .collect()
}

pub fn run(
    config: &CheckerConfig,
    net: &PetriNet,
    start: &str,
    formulas: &[(String, String)],
) -> anyhow::Result<Report> {
    let run_id = Uuid::new_v4();
    let _span = info_span!("run", %run_id, net = net.id()).entered();

    let verifier = Verifier::new(net, start, &config.enumerator())
        .with_context(|| format!("preparing paths from {start}"))?;
    info!(start, paths = verifier.paths().len(), "path set ready");

    let named = formulas
        .iter()
        .map(|(name, text)| {
            let formula = verifier
                .parse(text)
                .with_context(|| format!("formula `{name}`"))?;
            Ok(NamedFormula {
                name: name.clone(),
                formula,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let verdicts = verifier.check_all(&named, config.parallel);
    for v in verdicts.iter().filter(|v| !v.holds) {
        warn!(name = %v.name, formula = %v.formula, "formula violated");
    }
    info!(
        checked = verdicts.len(),
        violated = verdicts.iter().filter(|v| !v.holds).count(),
        "run finished"
    );

    Ok(Report {
        run_id,
        net: net.id().to_string(),
        start: start.to_string(),
        paths: verifier.paths().len(),
        verdicts,
    })
}
