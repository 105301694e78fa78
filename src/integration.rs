//! Pure core integration functions.
//!
//! Each CLI subcommand maps to one function here that takes the resolved
//! configuration and returns the text to print. Nothing in this module touches
//! stdout, the environment or the filesystem, so the binary is a thin shell
//! around it.

use crate::config::ResolvedConfig;
use crate::model::collection::StructureKind;
use crate::model::error::AppError;
use crate::state::action::Action;
use crate::state::structure_view::StructureView;
use crate::view::report::{
    render_frame, render_layout, render_outcome, render_structures, to_json, CapacityReport,
    LayoutReport, SimulationStep,
};
use crate::view_state::compressor::compute_layout;
use rand::Rng;

/// Lay out `count` items and render the offsets.
///
/// `budget` defaults to the `max_budget` derived from the configured screen
/// height.
///
/// # Errors
///
/// Returns [`AppError::InvalidArgument`] for a rejected budget or screen
/// height.
pub fn layout_report(
    count: usize,
    budget: Option<f64>,
    config: &ResolvedConfig,
    json: bool,
) -> Result<String, AppError> {
    let layout_config = config.policy.config_for_screen(config.screen_height)?;
    let budget = budget.unwrap_or(layout_config.max_budget());
    let layout = compute_layout(count, budget, &layout_config)?;

    if json {
        Ok(to_json(&LayoutReport { budget, layout })?)
    } else {
        Ok(render_layout(&layout, budget))
    }
}

/// Apply action tokens to a fresh structure, rendering a frame after each.
///
/// All tokens are parsed before any of them is applied.
///
/// # Errors
///
/// Returns [`AppError::Action`] for a malformed token and
/// [`AppError::InvalidArgument`] for an invalid value or screen height.
pub fn simulate<R: Rng + ?Sized>(
    kind: StructureKind,
    tokens: &[String],
    config: &ResolvedConfig,
    rng: &mut R,
    json: bool,
) -> Result<String, AppError> {
    let actions = tokens
        .iter()
        .map(|token| token.parse::<Action>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut view = StructureView::new(kind, config.policy, config.screen_height)?;
    let mut steps = Vec::with_capacity(actions.len());
    for action in &actions {
        let outcome = view.apply(action, rng)?;
        steps.push(SimulationStep {
            action: action.to_string(),
            outcome,
            frame: view.frame()?,
        });
    }

    if json {
        return Ok(to_json(&steps)?);
    }

    let mut out = String::new();
    for (index, step) in steps.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("> {}\n", step.action));
        out.push_str(&render_outcome(&step.outcome, kind));
        out.push('\n');
        out.push_str(&render_frame(&step.frame));
    }
    Ok(out)
}

/// Render the derived config and display capacity.
///
/// # Errors
///
/// Returns [`AppError::InvalidArgument`] if the policy rejects the screen
/// height.
pub fn capacity_report(config: &ResolvedConfig, json: bool) -> Result<String, AppError> {
    let report = CapacityReport::new(&config.policy, config.screen_height)?;
    if json {
        Ok(to_json(&report)?)
    } else {
        Ok(report.render())
    }
}

/// List the structures that can be simulated.
pub fn list_structures() -> String {
    render_structures()
}
