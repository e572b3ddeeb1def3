use std::path::Path;

use anyhow::Context;
use faculty_core::dto::{TaskCreateInput, ValidationReport};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::output::output;

/// Handle `faculty validate`: print the violation list, fail if non-empty.
pub fn handle(args: &ValidateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = run(&args.path)?;
    output(&report, flags.format)?;
    if !report.is_valid() {
        anyhow::bail!(
            "{} has {} violation(s)",
            args.path.display(),
            report.violations().len()
        );
    }
    Ok(())
}

fn run(path: &Path) -> anyhow::Result<ValidationReport> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let input: TaskCreateInput = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a task-creation payload", path.display()))?;
    Ok(input.validate())
}
