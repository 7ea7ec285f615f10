//! Two-jug measurement solver CLI.
//!
//! Reads `jugs.toml` (or `--config`) for defaults, prints results to stdout
//! and exits with one of the codes in [`jugs::exit_codes`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use jugs::core::explorer::build_graph;
use jugs::core::extract::extract_states_from_log;
use jugs::core::oracle::{gcd, is_solvable};
use jugs::core::path::{TieBreak, distances_from_empty};
use jugs::core::types::Capacities;
use jugs::error::SolveError;
use jugs::exit_codes;
use jugs::io::config::{DEFAULT_CONFIG_FILE, JugsConfig, OutputFormat, load_config, write_config};
use jugs::io::step_log::{load_solution, read_log_lines, write_log_lines, write_solution};
use jugs::logging;
use jugs::render::{
    JsonReport, Language, ReportOptions, ReportRenderer, log_lines, operation_label,
};
use jugs::solve::{SolveOptions, SolveOutcome, check_request, solve_with, visualize_states};

#[derive(Parser)]
#[command(name = "jugs", version, about = "Two-jug measurement solver")]
struct Cli {
    /// Config file (default: `jugs.toml` in the working directory).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether GOAL litres can be measured with jugs of A and B litres.
    Check { a: u32, b: u32, goal: u32 },
    /// Print a shortest sequence of operations that measures GOAL litres.
    Solve {
        a: u32,
        b: u32,
        goal: u32,
        /// Label language: `en` or `ja`.
        #[arg(long)]
        lang: Option<Language>,
        /// Goal-state choice: `nearest` or `first-discovered`.
        #[arg(long)]
        tie_break: Option<TieBreak>,
        /// Output format: `text` or `json`.
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Append one bar line per state to the text report.
        #[arg(long)]
        bars: bool,
        /// Save the solution (`.txt`: rendered log lines, otherwise JSON step log).
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Print the state sequence recorded in a step log.
    Replay {
        file: PathBuf,
        /// Treat FILE as rendered log lines instead of a JSON step log.
        #[arg(long)]
        text: bool,
        /// Label language: `en` or `ja`.
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Print every reachable state for jugs of A and B litres.
    Graph { a: u32, b: u32 },
    /// Write a default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let load = || load_config(&config_path);

    match cli.command {
        Command::Check { a, b, goal } => cmd_check(&load()?, Capacities::new(a, b), goal),
        Command::Solve {
            a,
            b,
            goal,
            lang,
            tie_break,
            format,
            bars,
            out,
        } => {
            let cfg = load()?;
            let settings = SolveSettings {
                language: lang.unwrap_or(cfg.language),
                tie_break: tie_break.unwrap_or(cfg.tie_break),
                format: format.unwrap_or(cfg.format),
                bars,
            };
            cmd_solve(&cfg, Capacities::new(a, b), goal, settings, out.as_deref())
        }
        Command::Replay { file, text, lang } => {
            let cfg = load()?;
            let language = lang.unwrap_or(cfg.language);
            cmd_replay(&cfg, &file, text, language)
        }
        Command::Graph { a, b } => cmd_graph(&load()?, Capacities::new(a, b)),
        Command::InitConfig { force } => cmd_init_config(&config_path, force),
    }
}

/// Solver defects exit with `INCONSISTENT`; everything else is `INVALID`.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SolveError>() {
        Some(solve_err) if solve_err.is_internal() => exit_codes::INCONSISTENT,
        _ => exit_codes::INVALID,
    }
}

/// Effective `solve` settings after applying flags over config.
#[derive(Debug, Clone, Copy)]
struct SolveSettings {
    language: Language,
    tie_break: TieBreak,
    format: OutputFormat,
    bars: bool,
}

fn check_limits(cfg: &JugsConfig, caps: Capacities) -> Result<()> {
    if caps.max() > cfg.max_capacity {
        bail!(
            "capacities {} exceed max_capacity {}L",
            caps,
            cfg.max_capacity
        );
    }
    Ok(())
}

fn cmd_check(cfg: &JugsConfig, caps: Capacities, goal: u32) -> Result<i32> {
    check_limits(cfg, caps)?;
    check_request(caps, goal)?;
    if is_solvable(caps, goal) {
        println!("solvable: {} goal={}L", caps, goal);
        Ok(exit_codes::OK)
    } else {
        println!(
            "unsolvable: {} goal={}L gcd={}L",
            caps,
            goal,
            gcd(caps.a, caps.b)
        );
        Ok(exit_codes::UNSOLVABLE)
    }
}

fn cmd_solve(
    cfg: &JugsConfig,
    caps: Capacities,
    goal: u32,
    settings: SolveSettings,
    out: Option<&Path>,
) -> Result<i32> {
    check_limits(cfg, caps)?;
    let options = SolveOptions {
        tie_break: settings.tie_break,
    };
    let outcome = solve_with(caps, goal, &options)?;

    match settings.format {
        OutputFormat::Text => {
            let report = ReportRenderer::new().render(
                caps,
                goal,
                &outcome,
                ReportOptions {
                    language: settings.language,
                    bars: settings.bars,
                },
            )?;
            print!("{}", report);
        }
        OutputFormat::Json => {
            let report = JsonReport::new(caps, goal, &outcome, settings.language);
            let payload = serde_json::to_string_pretty(&report).context("serialize report")?;
            println!("{}", payload);
        }
    }

    match outcome {
        SolveOutcome::Solved(solution) => {
            if let Some(path) = out {
                if path.extension().is_some_and(|ext| ext == "txt") {
                    write_log_lines(path, &log_lines(&solution.steps, settings.language))?;
                } else {
                    write_solution(path, &solution)?;
                }
                info!(path = %path.display(), "solution saved");
            }
            Ok(exit_codes::OK)
        }
        SolveOutcome::Unsolvable { .. } => Ok(exit_codes::UNSOLVABLE),
    }
}

/// Text logs carry no capacities, so only JSON step logs are held to
/// `max_capacity`.
fn cmd_replay(cfg: &JugsConfig, file: &Path, text: bool, language: Language) -> Result<i32> {
    if text {
        let lines = read_log_lines(file)?;
        let extracted = extract_states_from_log(&lines);
        for &index in &extracted.malformed {
            warn!(line = index + 1, "no state found; repeating previous state");
        }
        for (index, state) in extracted.states.iter().enumerate() {
            println!("{}: {}", index, state);
        }
        return Ok(exit_codes::OK);
    }

    let solution = load_solution(file)?;
    check_limits(cfg, solution.capacities)?;
    let states = visualize_states(&solution.steps);
    println!("{} goal={}L", solution.capacities, solution.goal);
    for (index, state) in states.iter().enumerate() {
        match index.checked_sub(1).map(|i| solution.steps[i].operation) {
            Some(operation) => println!(
                "{}: {}  {}",
                index,
                state,
                operation_label(operation, language)
            ),
            None => println!("{}: {}", index, state),
        }
    }
    Ok(exit_codes::OK)
}

fn cmd_graph(cfg: &JugsConfig, caps: Capacities) -> Result<i32> {
    check_limits(cfg, caps)?;
    if caps.a == 0 || caps.b == 0 {
        return Err(SolveError::InvalidCapacity {
            a: caps.a,
            b: caps.b,
        }
        .into());
    }
    let graph = build_graph(caps);
    let distances = distances_from_empty(&graph);
    println!("states={} edges={}", graph.len(), graph.edge_count());
    for (state, distance) in graph.states().iter().zip(&distances) {
        let successors = graph
            .successors(*state)
            .map(|next| next.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        match distance {
            Some(distance) => println!("{}  distance={}  -> {}", state, distance, successors),
            None => println!("{}  unreachable  -> {}", state, successors),
        }
    }
    Ok(exit_codes::OK)
}

fn cmd_init_config(path: &Path, force: bool) -> Result<i32> {
    if !force && path.exists() {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &JugsConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    println!("{}", path.display());
    Ok(exit_codes::OK)
}
