//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! JSON mode prints the same structures the HTTP API returns.

use crate::api::{
    self,
    types::{BreakEvenResponse, CadenceResponse, ScenarioResponse, SweepResponse},
};
use crate::format::{format_days, format_money, format_number, format_per_kg, format_verdict};
use reusegate_core::{
    ChartFrame, ReferenceScenario, ReuseError, SensitivityPoint, SweepRange, assess_refurbishment,
    compute_break_even, compute_cadence, sweep_range,
};
use serde::Serialize;

/// Print a value as pretty JSON.
fn print_json<T: Serialize>(value: &T) -> Result<(), ReuseError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| ReuseError::SerializationError(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    scenario: ReferenceScenario,
    host: &str,
    port: u16,
) -> Result<(), ReuseError> {
    println!("ReuseGate Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:     {}", host);
    println!("  Port:     {}", port);
    println!();
    println!("Endpoints:");
    println!("  POST /break-even - Break-even gate");
    println!("  POST /cadence    - Cadence gate");
    println!("  POST /sweep      - Ceiling vs payload ratio");
    println!("  GET  /scenario   - Reference scenario report");
    println!("  GET  /health     - Health check");
    println!("  GET  /metrics    - Prometheus metrics");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, scenario).await
}

// =============================================================================
// BREAK-EVEN COMMAND
// =============================================================================

/// Evaluate the break-even gate and assess the scenario's refurbishment cost.
pub fn cmd_break_even(
    scenario: &ReferenceScenario,
    json_mode: bool,
    verbose: bool,
) -> Result<(), ReuseError> {
    let inputs = &scenario.break_even;
    let result = compute_break_even(inputs);
    let assessment = assess_refurbishment(inputs, scenario.c_ref_example);

    tracing::info!(
        c_ref_max = result.c_ref_max,
        within_ceiling = assessment.within_ceiling,
        "Break-even gate evaluated"
    );

    if json_mode {
        return print_json(&BreakEvenResponse::new(&result, Some(&assessment)));
    }

    println!("Break-Even Gate");
    println!("===============");
    if verbose {
        println!();
        println!("Inputs:");
        println!("  P_e:       {} kg", format_number(inputs.pe, 0));
        println!("  P_r:       {} kg", format_number(inputs.pr, 0));
        println!("  C_common:  {}", format_money(inputs.c_common, 2));
        println!("  C1_mfg:    {}", format_money(inputs.c1_mfg, 2));
        println!("  p_rec:     {}", format_number(inputs.p_rec, 4));
        println!("  N_design:  {}", inputs.n_design);
    }
    println!();
    println!("N_eff:              {}", format_number(result.n_eff, 3));
    println!("C_e:                {}", format_money(result.c_e, 2));
    println!("C_ref_max:          {}", format_money(result.c_ref_max, 2));
    println!("C_r at threshold:   {}", format_money(result.c_r_at_threshold, 2));
    println!("Expendable $/kg:    {}", format_per_kg(result.cost_per_kg_e));
    println!("Reusable $/kg:      {}", format_per_kg(result.cost_per_kg_r));
    if !result.has_headroom() {
        println!();
        println!("Ceiling cannot be met: no positive refurbishment budget.");
    }
    println!();
    println!("Refurbishment at {}:", format_money(assessment.c_ref, 2));
    println!("  C_r:      {}", format_money(assessment.c_r, 2));
    println!("  $/kg:     {}", format_per_kg(assessment.cost_per_kg_r));
    println!("  Headroom: {}", format_money(assessment.headroom, 2));
    println!("  Verdict:  {}", format_verdict(assessment.within_ceiling));

    Ok(())
}

// =============================================================================
// CADENCE COMMAND
// =============================================================================

/// Evaluate the cadence gate.
pub fn cmd_cadence(
    scenario: &ReferenceScenario,
    json_mode: bool,
    verbose: bool,
) -> Result<(), ReuseError> {
    let inputs = &scenario.cadence;
    let result = compute_cadence(inputs);

    tracing::info!(
        t_turn95_max = result.t_turn95_max,
        feasible = result.feasible,
        "Cadence gate evaluated"
    );

    if json_mode {
        return print_json(&CadenceResponse::from(&result));
    }

    println!("Cadence Gate");
    println!("============");
    if verbose {
        println!();
        println!("Inputs:");
        println!("  R:          {} flights/yr", format_number(inputs.rate, 1));
        println!("  B:          {}", format_number(inputs.boosters, 1));
        println!("  d_down:     {}", format_number(inputs.d_down, 3));
        println!("  u_target:   {}", format_number(inputs.u_target, 3));
        println!("  L_replace:  {}", format_days(inputs.l_replace));
        println!("  p_rec:      {}", format_number(inputs.p_rec, 4));
    }
    println!();
    println!("Spares S:          {}", format_number(result.spares, 3));
    println!("B_eff:             {}", format_number(result.b_eff, 3));
    println!("t_turn95 max:      {}", format_days(result.t_turn95_max));
    println!("t_turn95 observed: {}", format_days(inputs.t_turn95));
    if result.b_eff < 0.0 {
        println!();
        println!("Fleet cannot sustain operations: effective capacity is negative.");
    }
    println!();
    println!("Verdict: {}", format_verdict(result.feasible));

    Ok(())
}

// =============================================================================
// SWEEP COMMAND
// =============================================================================

/// Sweep the ceiling over payload ratio.
pub fn cmd_sweep(
    scenario: &ReferenceScenario,
    range: &SweepRange,
    chart: bool,
    json_mode: bool,
) -> Result<(), ReuseError> {
    let points = sweep_range(&scenario.break_even, range);
    tracing::info!(points = points.len(), "Sensitivity sweep evaluated");

    if json_mode {
        return print_json(&SweepResponse::success(&points));
    }

    print_sweep_table(&points);
    if chart {
        println!();
        println!("Chart polyline:");
        println!("  {}", ChartFrame::fit(&points).polyline());
    }

    Ok(())
}

fn print_sweep_table(points: &[SensitivityPoint]) {
    println!("Sensitivity: C_ref_max vs P_r/P_e");
    println!("=================================");
    println!();
    println!("  ratio   C_ref_max");
    for point in points {
        println!(
            "  {:<6}  {}",
            format_number(point.ratio, 2),
            format_money(point.c_ref_max, 2)
        );
    }
}

// =============================================================================
// REPORT COMMAND
// =============================================================================

/// Evaluate the full scenario.
pub fn cmd_report(
    scenario: &ReferenceScenario,
    json_mode: bool,
    verbose: bool,
) -> Result<(), ReuseError> {
    let report = scenario.evaluate();
    tracing::info!(
        cost_gate = report.verdict.cost_gate,
        cadence_gate = report.verdict.cadence_gate,
        "Scenario evaluated"
    );

    if json_mode {
        return print_json(&ScenarioResponse::from(&report));
    }

    cmd_break_even(scenario, false, verbose)?;
    println!();
    cmd_cadence(scenario, false, verbose)?;
    println!();
    print_sweep_table(&report.sensitivity);
    println!();
    println!("Gates");
    println!("=====");
    println!("  Cost:    {}", format_verdict(report.verdict.cost_gate));
    println!("  Cadence: {}", format_verdict(report.verdict.cadence_gate));
    println!("  Overall: {}", format_verdict(report.verdict.passed()));

    Ok(())
}
