//! Human-readable output: operation labels, step logs, text bars and reports.
//!
//! The output language is always passed in explicitly; nothing here reads
//! global locale state.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};

use crate::core::extract::extract_states;
use crate::core::types::{Capacities, Operation, State, Step};
use crate::solve::SolveOutcome;

const REPORT_TEMPLATE: &str = include_str!("templates/report.txt");

/// Output language for labels and reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("en"),
            Language::Ja => f.write_str("ja"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "en" => Ok(Language::En),
            "ja" => Ok(Language::Ja),
            other => Err(format!("unknown language '{other}' (expected en or ja)")),
        }
    }
}

/// Label for a single operation.
pub fn operation_label(operation: Operation, language: Language) -> String {
    match (language, operation) {
        (Language::En, Operation::FillA) => "Fill A completely".to_string(),
        (Language::En, Operation::FillB) => "Fill B completely".to_string(),
        (Language::En, Operation::EmptyA) => "Empty A".to_string(),
        (Language::En, Operation::EmptyB) => "Empty B".to_string(),
        (Language::En, Operation::PourAToB { amount }) => format!("Pour {amount}L from A→B"),
        (Language::En, Operation::PourBToA { amount }) => format!("Pour {amount}L from B→A"),
        (Language::Ja, Operation::FillA) => "Aを満タンにする".to_string(),
        (Language::Ja, Operation::FillB) => "Bを満タンにする".to_string(),
        (Language::Ja, Operation::EmptyA) => "Aを空にする".to_string(),
        (Language::Ja, Operation::EmptyB) => "Bを空にする".to_string(),
        (Language::Ja, Operation::PourAToB { amount }) => format!("AからBに{amount}L注ぐ"),
        (Language::Ja, Operation::PourBToA { amount }) => format!("BからAに{amount}L注ぐ"),
    }
}

/// `"{label} → (aL, bL)"`; parseable by [`crate::core::extract::parse_log_state`].
pub fn log_line(step: &Step, language: Language) -> String {
    format!(
        "{} → {}",
        operation_label(step.operation, language),
        step.state
    )
}

pub fn log_lines(steps: &[Step], language: Language) -> Vec<String> {
    steps.iter().map(|step| log_line(step, language)).collect()
}

/// One line per state: A's bar grows leftwards from the divider, B's rightwards.
///
/// ```text
/// ░░░|░░░░░  (0L, 0L)  Initial state
/// ░░░|█████  (0L, 5L)  Step 1: Fill B completely
/// ```
pub fn bar_lines(caps: Capacities, steps: &[Step], language: Language) -> Vec<String> {
    extract_states(steps)
        .into_iter()
        .enumerate()
        .map(|(index, state)| {
            let caption = match index {
                0 => initial_caption(language).to_string(),
                n => format!(
                    "Step {n}: {}",
                    operation_label(steps[n - 1].operation, language)
                ),
            };
            format!("{}  {}  {}", bar(caps, state), state, caption)
        })
        .collect()
}

fn bar(caps: Capacities, state: State) -> String {
    let empty_a = (caps.a - state.a) as usize;
    let empty_b = (caps.b - state.b) as usize;
    format!(
        "{}{}|{}{}",
        "░".repeat(empty_a),
        "█".repeat(state.a as usize),
        "█".repeat(state.b as usize),
        "░".repeat(empty_b)
    )
}

fn initial_caption(language: Language) -> &'static str {
    match language {
        Language::En => "Initial state",
        Language::Ja => "初期状態",
    }
}

/// Localized sentences around the step list.
struct Messages {
    headline: String,
    verdict: String,
    summary: String,
    hint: String,
}

impl Messages {
    fn new(language: Language, caps: Capacities, goal: u32, outcome: &SolveOutcome) -> Self {
        let steps = outcome.solution().map_or(0, |solution| solution.len());
        let gcd = match outcome {
            SolveOutcome::Unsolvable { gcd } => *gcd,
            SolveOutcome::Solved(_) => 0,
        };
        let max = caps.max();
        match language {
            Language::En => Self {
                headline: format!("Water jug puzzle: measure {goal}L with {caps}"),
                verdict: match outcome {
                    SolveOutcome::Solved(_) => "Measurable!".to_string(),
                    SolveOutcome::Unsolvable { .. } => "Measurement impossible".to_string(),
                },
                summary: format!("Shortest path: {steps} steps"),
                hint: format!(
                    "Hint: the goal must be a multiple of {gcd}L and at most {max}L."
                ),
            },
            Language::Ja => Self {
                headline: format!("水差しパズル: {caps} で{goal}Lを測る"),
                verdict: match outcome {
                    SolveOutcome::Solved(_) => "測定可能です！".to_string(),
                    SolveOutcome::Unsolvable { .. } => "測定できません".to_string(),
                },
                summary: format!("最短手順: {steps}ステップ"),
                hint: format!(
                    "ヒント: 目標量は{gcd}Lの倍数で、{max}L以下である必要があります。"
                ),
            },
        }
    }
}

/// Text report settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub language: Language,
    pub bars: bool,
}

/// Template engine wrapper around minijinja.
pub struct ReportRenderer {
    env: Environment<'static>,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template("report", REPORT_TEMPLATE)
            .expect("report template should be valid");
        Self { env }
    }

    pub fn render(
        &self,
        caps: Capacities,
        goal: u32,
        outcome: &SolveOutcome,
        options: ReportOptions,
    ) -> Result<String> {
        let messages = Messages::new(options.language, caps, goal, outcome);
        let steps = outcome
            .solution()
            .map(|solution| log_lines(&solution.steps, options.language));
        let bars = match (outcome.solution(), options.bars) {
            (Some(solution), true) => bar_lines(caps, &solution.steps, options.language),
            _ => Vec::new(),
        };
        let template = self.env.get_template("report")?;
        let rendered = template.render(context! {
            headline => messages.headline,
            verdict => messages.verdict,
            summary => messages.summary,
            hint => messages.hint,
            steps => steps,
            bars => bars,
        })?;
        Ok(rendered)
    }
}

/// Machine-readable step for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportStep {
    pub operation: Operation,
    pub label: String,
    pub state: State,
}

/// Machine-readable solve result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonReport {
    pub capacities: Capacities,
    pub goal: u32,
    pub solvable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcd: Option<u32>,
    pub steps: Vec<ReportStep>,
    pub states: Vec<State>,
}

impl JsonReport {
    pub fn new(caps: Capacities, goal: u32, outcome: &SolveOutcome, language: Language) -> Self {
        match outcome {
            SolveOutcome::Solved(solution) => Self {
                capacities: caps,
                goal,
                solvable: true,
                gcd: None,
                steps: solution
                    .steps
                    .iter()
                    .map(|step| ReportStep {
                        operation: step.operation,
                        label: operation_label(step.operation, language),
                        state: step.state,
                    })
                    .collect(),
                states: extract_states(&solution.steps),
            },
            SolveOutcome::Unsolvable { gcd } => Self {
                capacities: caps,
                goal,
                solvable: false,
                gcd: Some(*gcd),
                steps: Vec::new(),
                states: Vec::new(),
            },
        }
    }
}
