//! # Parameter Files
//!
//! Loads a [`ReferenceScenario`] from a TOML parameter file. Every key is
//! optional and falls back to the reference vehicle, so a file only needs
//! the values that differ:
//!
//! ```toml
//! [break_even]
//! pr = 13500.0
//! p_rec = 0.97
//!
//! [cadence]
//! rate = 30.0
//! t_turn95 = 21.0
//! ```
//!
//! Unknown keys are rejected so a typo cannot silently fall back to a default.
//! Files are read only; parameter sets are never written back.

use reusegate_core::{
    BreakEvenInputs, CadenceInputs, ReferenceScenario, ReuseError, scenario::REFERENCE_C_REF,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Maximum parameter file size (1 MiB).
const MAX_PARAMS_FILE_SIZE: u64 = 1024 * 1024;

// =============================================================================
// FILE SCHEMA
// =============================================================================

/// Top-level layout of a parameter file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamFile {
    pub break_even: BreakEvenSection,
    pub cadence: CadenceSection,
}

/// `[break_even]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreakEvenSection {
    pub pe: f64,
    pub pr: f64,
    pub c_common: f64,
    pub c1_mfg: f64,
    pub p_rec: f64,
    pub n_design: i64,
    /// Refurbishment + recovery cost to assess against the ceiling.
    pub c_ref: f64,
}

impl Default for BreakEvenSection {
    fn default() -> Self {
        let reference = BreakEvenInputs::reference();
        Self {
            pe: reference.pe,
            pr: reference.pr,
            c_common: reference.c_common,
            c1_mfg: reference.c1_mfg,
            p_rec: reference.p_rec,
            n_design: reference.n_design,
            c_ref: REFERENCE_C_REF,
        }
    }
}

/// `[cadence]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CadenceSection {
    pub rate: f64,
    pub boosters: f64,
    pub d_down: f64,
    pub u_target: f64,
    pub l_replace: f64,
    pub p_rec: f64,
    pub t_turn95: f64,
}

impl Default for CadenceSection {
    fn default() -> Self {
        let reference = CadenceInputs::reference();
        Self {
            rate: reference.rate,
            boosters: reference.boosters,
            d_down: reference.d_down,
            u_target: reference.u_target,
            l_replace: reference.l_replace,
            p_rec: reference.p_rec,
            t_turn95: reference.t_turn95,
        }
    }
}

impl ParamFile {
    /// Convert the parsed file into a scenario.
    pub fn into_scenario(self) -> ReferenceScenario {
        let be = self.break_even;
        let cd = self.cadence;
        ReferenceScenario {
            break_even: BreakEvenInputs::new(
                be.pe,
                be.pr,
                be.c_common,
                be.c1_mfg,
                be.p_rec,
                be.n_design,
            ),
            cadence: CadenceInputs::new(
                cd.rate,
                cd.boosters,
                cd.d_down,
                cd.u_target,
                cd.l_replace,
                cd.p_rec,
                cd.t_turn95,
            ),
            c_ref_example: be.c_ref,
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

/// Parse a scenario from TOML text.
pub fn parse_scenario(text: &str) -> Result<ReferenceScenario, ReuseError> {
    let file: ParamFile =
        toml::from_str(text).map_err(|e| ReuseError::ConfigError(e.to_string()))?;
    Ok(file.into_scenario())
}

/// Load a scenario from a parameter file, or the reference scenario when no
/// file is given.
pub fn load_scenario(path: Option<&Path>) -> Result<ReferenceScenario, ReuseError> {
    let Some(path) = path else {
        tracing::debug!("No parameter file given, using reference scenario");
        return Ok(ReferenceScenario::default());
    };

    let validated = validate_params_path(path)?;
    let text = std::fs::read_to_string(&validated)
        .map_err(|e| ReuseError::IoError(format!("Read {}: {}", validated.display(), e)))?;

    let scenario = parse_scenario(&text)?;
    tracing::info!(path = %validated.display(), "Loaded parameter file");
    Ok(scenario)
}

/// Canonicalize the path and check it is a regular file within the size
/// limit.
fn validate_params_path(path: &Path) -> Result<PathBuf, ReuseError> {
    let canonical = path.canonicalize().map_err(|e| {
        ReuseError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(ReuseError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    let metadata = std::fs::metadata(&canonical)
        .map_err(|e| ReuseError::IoError(format!("Cannot read file metadata: {}", e)))?;
    if metadata.len() > MAX_PARAMS_FILE_SIZE {
        return Err(ReuseError::ConfigError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_PARAMS_FILE_SIZE
        )));
    }

    Ok(canonical)
}
