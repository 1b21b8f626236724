use anyhow::{anyhow, Result, Context};
use log::{debug, info};
use std::path::Path;

use crate::cli::utils::{read_password, status_marker};
use crate::config::{self, Config, PatternConfig};
use crate::credential::{default_regex, Field, FieldStatus, ValidationReport, Validator};

/// Inputs for a single `check` run
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub username: String,
    pub email: String,
    /// Prompted for on stdin when absent
    pub password: Option<String>,
    /// Pattern literals given on the command line, applied over the config
    pub overrides: PatternConfig,
    pub json: bool,
}

/// Handle the `check` command. Returns whether every field was valid.
pub fn check_credential(options: CheckOptions) -> Result<bool> {
    let password = match &options.password {
        Some(password) => password.clone(),
        None => read_password("Password: ")?,
    };

    let configured = config::get_config().patterns;
    let validator = build_validator(&options, password, &configured)?;
    let report = validator.report();

    println!("{}", render_report(&report, options.json)?);

    if report.is_valid() {
        info!("Credential for {} passed validation", validator.credential().username());
    } else {
        info!("Credential failed validation on {} field(s)", report.failed_fields().len());
    }

    Ok(report.is_valid())
}

/// Build a validator from configured patterns with command-line overrides on top
pub fn build_validator(
    options: &CheckOptions,
    password: String,
    configured: &PatternConfig,
) -> Result<Validator> {
    let patterns = configured.merged_with(&options.overrides);
    debug!("Effective pattern overrides: {:?}", patterns);

    Validator::with_patterns(options.username.as_str(), options.email.as_str(), password, &patterns)
        .context("Invalid validation pattern")
}

/// Format a report as JSON or as one line per field
pub fn render_report(report: &ValidationReport, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(report).context("Failed to serialize report");
    }

    let lines: Vec<String> = Field::ALL
        .iter()
        .map(|field| {
            let status = report.status(*field);
            format!("{} {:<8} {}", status_marker(status == FieldStatus::Valid), field, status)
        })
        .collect();

    Ok(lines.join("\n"))
}

/// Handle the `patterns` command
pub fn show_patterns() -> Result<()> {
    let configured = config::get_config().patterns;
    configured.validate().context("Invalid validation pattern")?;

    for field in Field::ALL {
        let source = if configured.get(field).is_some() { "configured" } else { "default" };
        println!("{:<8} ({}) {}", field, source, active_pattern(&configured, field));
    }

    Ok(())
}

/// The pattern that runs for `field`: the configured literal with its flags,
/// or the default pattern
pub fn active_pattern(configured: &PatternConfig, field: Field) -> String {
    match configured.get(field) {
        Some(literal) => literal.to_string(),
        None => default_regex(field).as_str().to_string(),
    }
}

/// Handle the `init-config` command
pub fn init_config(path: &str, force: bool) -> Result<()> {
    if Path::new(path).exists() && !force {
        return Err(anyhow!("Config file already exists: {} (use --force to overwrite)", path));
    }

    config::save_config(path, &Config::default())?;
    println!("Wrote default configuration to {}", path);
    Ok(())
}
