//! Scenario JSON (de)serialization (§6, §4.16): the untrusted
//! `ScenarioInput` a file deserializes to, its validation into a
//! [`boundchess_core::Scenario`], and the `CountsOutput` response shape
//! that echoes the normalized scenario alongside the nine published counts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use boundchess_core::{Inventory, MoveBoundMode, Scenario, ScenarioError};
use boundchess_engine::Counts;

use crate::error::CliError;

/// The `pieces` object of a scenario document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PiecesInput {
    #[serde(default)]
    pub white_king: bool,
    #[serde(default)]
    pub queens: u32,
    #[serde(default)]
    pub rooks: u32,
    #[serde(default)]
    pub bishops: u32,
    #[serde(default)]
    pub knights: u32,
}

impl From<PiecesInput> for Inventory {
    fn from(p: PiecesInput) -> Inventory {
        Inventory {
            white_king: p.white_king,
            queens: p.queens,
            rooks: p.rooks,
            bishops: p.bishops,
            knights: p.knights,
        }
    }
}

impl From<Inventory> for PiecesInput {
    fn from(inv: Inventory) -> PiecesInput {
        PiecesInput {
            white_king: inv.white_king,
            queens: inv.queens,
            rooks: inv.rooks,
            bishops: inv.bishops,
            knights: inv.knights,
        }
    }
}

fn default_move_bound_mode() -> String {
    "inclusive".to_string()
}

fn default_remove_stalemates() -> bool {
    true
}

/// The untrusted, raw scenario document (§6): the fields of a
/// scenario JSON object, with defaults for `move_bound_mode` and
/// `remove_stalemates` filled in by `serde` the way §6 specifies.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioInput {
    pub bound: i32,
    pub move_bound: i32,
    #[serde(default = "default_move_bound_mode")]
    pub move_bound_mode: String,
    pub pieces: PiecesInput,
    pub allow_captures: bool,
    pub white_can_pass: bool,
    #[serde(default = "default_remove_stalemates")]
    pub remove_stalemates: bool,
}

impl ScenarioInput {
    /// Validate this raw document into a [`Scenario`] (§7's
    /// configuration-error checks; the only place untrusted JSON meets the
    /// validated, total-function core).
    pub fn into_scenario(self) -> Result<Scenario, ScenarioError> {
        let mode = match self.move_bound_mode.as_str() {
            "inclusive" => MoveBoundMode::Inclusive,
            "exclusive" => MoveBoundMode::Exclusive,
            other => {
                return Err(ScenarioError::UnknownMoveBoundMode { found: other.to_string() });
            }
        };
        Scenario::new(
            self.bound,
            self.move_bound,
            mode,
            self.pieces.into(),
            self.allow_captures,
            self.white_can_pass,
            self.remove_stalemates,
        )
    }

    /// Rebuild the normalized input form (defaults filled in) from a
    /// validated [`Scenario`], for the output's echoed `scenario` field.
    pub fn from_scenario(scenario: &Scenario) -> ScenarioInput {
        ScenarioInput {
            bound: scenario.bound,
            move_bound: scenario.move_bound,
            move_bound_mode: match scenario.move_bound_mode {
                MoveBoundMode::Inclusive => "inclusive".to_string(),
                MoveBoundMode::Exclusive => "exclusive".to_string(),
            },
            pieces: scenario.inventory.into(),
            allow_captures: scenario.allow_captures,
            white_can_pass: scenario.white_can_pass,
            remove_stalemates: scenario.remove_stalemates,
        }
    }
}

/// The published counts, mirrored 1:1 onto the JSON output shape of §6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountsJson {
    pub universe_states: u64,
    pub black_moves_in: u64,
    pub black_moves_escape: u64,
    pub white_moves_in: u64,
    pub white_moves_escape: u64,
    pub checkmates: u64,
    pub trap: u64,
    pub tempo: u64,
    pub mate: u64,
}

impl From<Counts> for CountsJson {
    fn from(c: Counts) -> CountsJson {
        CountsJson {
            universe_states: c.universe_states,
            black_moves_in: c.black_moves_in,
            black_moves_escape: c.black_moves_escape,
            white_moves_in: c.white_moves_in,
            white_moves_escape: c.white_moves_escape,
            checkmates: c.checkmates,
            trap: c.trap,
            tempo: c.tempo,
            mate: c.mate,
        }
    }
}

/// The full per-scenario response: the echoed normalized scenario plus its
/// counts (§6).
#[derive(Debug, Clone, Serialize)]
pub struct CountsOutput {
    pub scenario: ScenarioInput,
    pub counts: CountsJson,
}

impl CountsOutput {
    pub fn new(scenario: &Scenario, counts: Counts) -> CountsOutput {
        CountsOutput { scenario: ScenarioInput::from_scenario(scenario), counts: counts.into() }
    }
}

/// Read and validate one scenario file, unwrapping an optional top-level
/// `"scenario"` key (§6: "possibly wrapped under key `scenario`").
pub fn load_scenario(path: &Path) -> Result<Scenario, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|source| CliError::Json { path: path.to_path_buf(), source })?;
    let scenario_value = value.get("scenario").cloned().unwrap_or(value);
    let input: ScenarioInput = serde_json::from_value(scenario_value)
        .map_err(|source| CliError::Json { path: path.to_path_buf(), source })?;
    input
        .into_scenario()
        .map_err(|source| CliError::Config { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json(wrapped: bool) -> String {
        let body = r#"{
            "bound": 2,
            "move_bound": 2,
            "pieces": { "queens": 1 },
            "allow_captures": true,
            "white_can_pass": false
        }"#;
        if wrapped {
            format!(r#"{{ "scenario": {body} }}"#)
        } else {
            body.to_string()
        }
    }

    #[test]
    fn wrapped_and_bare_forms_parse_to_the_same_scenario() {
        let bare: ScenarioInput = serde_json::from_str(&sample_json(false)).unwrap();
        let wrapper: serde_json::Value = serde_json::from_str(&sample_json(true)).unwrap();
        let unwrapped: ScenarioInput =
            serde_json::from_value(wrapper.get("scenario").cloned().unwrap()).unwrap();
        assert_eq!(bare.bound, unwrapped.bound);
        assert_eq!(bare.pieces, unwrapped.pieces);
    }

    #[test]
    fn defaults_apply_when_omitted() {
        let input: ScenarioInput = serde_json::from_str(&sample_json(false)).unwrap();
        assert_eq!(input.move_bound_mode, "inclusive");
        assert!(input.remove_stalemates);
    }

    #[test]
    fn unknown_move_bound_mode_is_a_scenario_error_not_a_panic() {
        let mut input: ScenarioInput = serde_json::from_str(&sample_json(false)).unwrap();
        input.move_bound_mode = "sideways".to_string();
        let err = input.into_scenario().unwrap_err();
        assert!(matches!(err, ScenarioError::UnknownMoveBoundMode { .. }));
    }

    #[test]
    fn from_scenario_echoes_normalized_defaults() {
        let scenario = Scenario::new(
            2,
            2,
            MoveBoundMode::Inclusive,
            Inventory { white_king: false, queens: 1, rooks: 0, bishops: 0, knights: 0 },
            true,
            false,
            true,
        )
        .unwrap();
        let echoed = ScenarioInput::from_scenario(&scenario);
        assert_eq!(echoed.move_bound_mode, "inclusive");
        assert!(echoed.remove_stalemates);
    }

    #[test]
    fn counts_output_round_trips_through_json() {
        let scenario = Scenario::new(
            1,
            1,
            MoveBoundMode::Inclusive,
            Inventory { white_king: false, queens: 0, rooks: 0, bishops: 0, knights: 0 },
            true,
            false,
            true,
        )
        .unwrap();
        let counts = boundchess_engine::solve(&scenario);
        let output = CountsOutput::new(&scenario, counts);
        let text = serde_json::to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["counts"]["universe_states"], 9);
        assert_eq!(value["scenario"]["move_bound_mode"], "inclusive");
    }
}
