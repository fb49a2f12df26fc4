//! # ReuseGate CLI Module
//!
//! This module implements the CLI interface for ReuseGate.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `break-even` - Evaluate the cost-per-kg gate
//! - `cadence` - Evaluate the launch-cadence gate
//! - `sweep` - Sweep the refurbishment ceiling over payload ratio
//! - `report` - Evaluate the full scenario (default)
//!
//! Every command starts from the reference scenario, or from `--params` if
//! given, and applies its command-line overrides on top.

mod commands;

use clap::{Args, Parser, Subcommand};
use reusegate_core::{BreakEvenInputs, ReferenceScenario, ReuseError, SweepRange};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// ReuseGate - first-stage reuse viability calculator
///
/// Tests whether a reusable first stage beats an expendable one on cost per
/// kilogram, and whether the fleet can sustain the required launch cadence.
#[derive(Parser, Debug)]
#[command(name = "reusegate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show the inputs alongside results
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// TOML parameter file (defaults to the reference vehicle)
    #[arg(short = 'P', long, global = true)]
    pub params: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Evaluate the cost-per-kilogram break-even gate
    BreakEven {
        #[command(flatten)]
        overrides: BreakEvenOverrides,
    },

    /// Evaluate the launch-cadence gate
    Cadence {
        #[command(flatten)]
        overrides: CadenceOverrides,
    },

    /// Sweep the refurbishment ceiling over payload ratio
    Sweep {
        #[command(flatten)]
        overrides: StageCostOverrides,

        /// First payload ratio
        #[arg(long, default_value_t = reusegate_core::primitives::SWEEP_RATIO_START)]
        start: f64,

        /// Last payload ratio (inclusive)
        #[arg(long, default_value_t = reusegate_core::primitives::SWEEP_RATIO_END)]
        end: f64,

        /// Ratio step
        #[arg(long, default_value_t = reusegate_core::primitives::SWEEP_RATIO_STEP)]
        step: f64,

        /// Also print the SVG polyline of the chart
        #[arg(long)]
        chart: bool,
    },

    /// Evaluate both gates and the sweep for the whole scenario
    Report,
}

// =============================================================================
// OVERRIDES
// =============================================================================

/// Cost and reuse overrides shared by `break-even` and `sweep`.
///
/// No payload masses: the sweep supplies its own ratio.
#[derive(Args, Debug, Default, Clone)]
pub struct StageCostOverrides {
    /// Common cost per flight (M)
    #[arg(long, allow_negative_numbers = true)]
    pub c_common: Option<f64>,

    /// First-stage manufacturing cost (M)
    #[arg(long, allow_negative_numbers = true)]
    pub c1_mfg: Option<f64>,

    /// Recovery probability [0, 1]
    #[arg(long, allow_negative_numbers = true)]
    pub p_rec: Option<f64>,

    /// Design reuse cap (flights)
    #[arg(long, allow_negative_numbers = true)]
    pub n_design: Option<i64>,
}

impl StageCostOverrides {
    /// Apply the given overrides onto break-even inputs.
    pub fn apply(&self, inputs: &mut BreakEvenInputs) {
        if let Some(v) = self.c_common {
            inputs.c_common = v;
        }
        if let Some(v) = self.c1_mfg {
            inputs.c1_mfg = v;
        }
        if let Some(v) = self.p_rec {
            inputs.p_rec = v;
        }
        if let Some(v) = self.n_design {
            inputs.n_design = v;
        }
    }
}

/// Command-line overrides for the break-even inputs.
#[derive(Args, Debug, Default, Clone)]
pub struct BreakEvenOverrides {
    /// Expendable payload (kg)
    #[arg(long)]
    pub pe: Option<f64>,

    /// Reusable payload (kg)
    #[arg(long)]
    pub pr: Option<f64>,

    #[command(flatten)]
    pub stage: StageCostOverrides,

    /// Refurbishment + recovery cost per flight to assess (M)
    #[arg(long, allow_negative_numbers = true)]
    pub c_ref: Option<f64>,
}

impl BreakEvenOverrides {
    /// Apply the given overrides onto a scenario.
    pub fn apply(&self, scenario: &mut ReferenceScenario) {
        let inputs = &mut scenario.break_even;
        if let Some(v) = self.pe {
            inputs.pe = v;
        }
        if let Some(v) = self.pr {
            inputs.pr = v;
        }
        self.stage.apply(inputs);
        if let Some(v) = self.c_ref {
            scenario.c_ref_example = v;
        }
    }
}

/// Command-line overrides for the cadence inputs.
#[derive(Args, Debug, Default, Clone)]
pub struct CadenceOverrides {
    /// Required flights per year
    #[arg(long)]
    pub rate: Option<f64>,

    /// Active booster fleet size
    #[arg(long)]
    pub boosters: Option<f64>,

    /// Downtime fraction [0, 1]
    #[arg(long, allow_negative_numbers = true)]
    pub d_down: Option<f64>,

    /// Target utilization [0, 1]
    #[arg(long, allow_negative_numbers = true)]
    pub u_target: Option<f64>,

    /// Replacement lead time (days)
    #[arg(long)]
    pub l_replace: Option<f64>,

    /// Recovery probability [0, 1]
    #[arg(long, allow_negative_numbers = true)]
    pub p_rec: Option<f64>,

    /// Observed 95th-percentile turnaround (days)
    #[arg(long)]
    pub t_turn95: Option<f64>,
}

impl CadenceOverrides {
    /// Apply the given overrides onto a scenario.
    pub fn apply(&self, scenario: &mut ReferenceScenario) {
        let inputs = &mut scenario.cadence;
        if let Some(v) = self.rate {
            inputs.rate = v;
        }
        if let Some(v) = self.boosters {
            inputs.boosters = v;
        }
        if let Some(v) = self.d_down {
            inputs.d_down = v;
        }
        if let Some(v) = self.u_target {
            inputs.u_target = v;
        }
        if let Some(v) = self.l_replace {
            inputs.l_replace = v;
        }
        if let Some(v) = self.p_rec {
            inputs.p_rec = v;
        }
        if let Some(v) = self.t_turn95 {
            inputs.t_turn95 = v;
        }
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), ReuseError> {
    let mut scenario = crate::config::load_scenario(cli.params.as_deref())?;
    let json_mode = cli.json_mode;
    let verbose = cli.verbose;

    match cli.command {
        Some(Commands::Server { host, port }) => cmd_server(scenario, &host, port).await,
        Some(Commands::BreakEven { overrides }) => {
            overrides.apply(&mut scenario);
            cmd_break_even(&scenario, json_mode, verbose)
        }
        Some(Commands::Cadence { overrides }) => {
            overrides.apply(&mut scenario);
            cmd_cadence(&scenario, json_mode, verbose)
        }
        Some(Commands::Sweep {
            overrides,
            start,
            end,
            step,
            chart,
        }) => {
            overrides.apply(&mut scenario.break_even);
            let range = SweepRange::new(start, end, step)?;
            cmd_sweep(&scenario, &range, chart, json_mode)
        }
        Some(Commands::Report) | None => cmd_report(&scenario, json_mode, verbose),
    }
}

// =============================================================================
// TESTS
// =============================================================================
