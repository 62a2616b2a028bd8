use anyhow::Context;
use clap::{Parser, ValueEnum};
use pn_domain::{to_dot, PathScope};
use pn_runner::*;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Scope {
    /// Paths from every node of the net
    All,
    /// Only paths leaving the start node
    Start,
}

#[derive(Parser, Debug)]
#[command(name = "pn-check")]
#[command(about = "Checks CTL-style formulas against a Petri net")]
#[command(version)]
struct Cli {
    /// Petri net as JSON (places, transitions, arcs)
    #[arg(long)]
    net: PathBuf,

    /// Id of the node the formulas are evaluated at
    #[arg(long)]
    start: String,

    /// Formula to check, may be repeated
    #[arg(long = "formula")]
    formula: Vec<String>,

    /// File with one formula per line, optionally prefixed with `name:`
    #[arg(long)]
    formulas: Option<PathBuf>,

    /// Checker configuration as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides `max_paths` from the configuration
    #[arg(long)]
    max_paths: Option<usize>,

    #[arg(long, value_enum)]
    scope: Option<Scope>,

    /// Print the net in GraphViz format and exit
    #[arg(long, default_value_t = false)]
    dot: bool,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn check(cli: Cli) -> anyhow::Result<bool> {
    let mut config = match &cli.config {
        Some(path) => CheckerConfig::from_file(path)?,
        None => CheckerConfig::default(),
    };
    if let Some(max) = cli.max_paths {
        config.max_paths = Some(max);
    }
    if let Some(scope) = cli.scope {
        config.scope = match scope {
            Scope::All => PathScope::All,
            Scope::Start => PathScope::FromStart,
        };
    }
    init_logging(&config.log_filter);

    let net = load_net(&cli.net)?;
    if cli.dot {
        print!("{}", to_dot(&net));
        return Ok(true);
    }

    let mut formulas: Vec<(String, String)> =
        cli.formula.iter().map(|f| (f.clone(), f.clone())).collect();
    if let Some(path) = &cli.formulas {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading formulas {}", path.display()))?;
        formulas.extend(formula_lines(&text));
    }
    if formulas.is_empty() {
        anyhow::bail!("nothing to check, pass --formula or --formulas");
    }

    let report = run(&config, &net, &cli.start, &formulas)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for v in &report.verdicts {
            println!("{v}");
        }
    }
    Ok(report.all_hold())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match check(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
