//! Config validation.
//!
//! Checks numeric ranges and cross-references, collecting every problem
//! into a single `ConfigError`.


use tinter_common::ConfigError;

use crate::presets;
use crate::schema::TinterConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TinterConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_ai(&mut errors, config);
    validate_editor(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_ai(errors: &mut Vec<String>, config: &TinterConfig) {
    let ai = &config.ai;
    validate_range_f64(errors, "ai.temperature", ai.temperature, 0.0, 2.0);
    validate_range(errors, "ai.timeout_secs", ai.timeout_secs, 1, 600);
    if ai.max_tokens == 0 {
        errors.push("ai.max_tokens must be greater than 0".into());
    }
    if ai.model.trim().is_empty() {
        errors.push("ai.model must not be empty".into());
    }
    if ai.api_key_env.trim().is_empty() {
        errors.push("ai.api_key_env must not be empty".into());
    }
}

fn validate_editor(errors: &mut Vec<String>, config: &TinterConfig) {
    let editor = &config.editor;
    if !presets::contains(&editor.default_preset) {
        errors.push(format!(
            "editor.default_preset = {:?} is not a built-in preset",
            editor.default_preset
        ));
    }
    validate_range(errors, "editor.highlight_ms", editor.highlight_ms, 100, 60_000);
    validate_range(errors, "editor.scroll_delay_ms", editor.scroll_delay_ms, 0, 5_000);
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
