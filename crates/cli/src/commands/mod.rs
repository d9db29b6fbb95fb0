pub mod encode;
pub mod inspect;
pub mod status;

pub use encode::EncodeCommand;
pub use inspect::InspectCommand;
pub use status::StatusCommand;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Resolve the raw stored-schedule string: positional argument first, then
/// `--file`, then stdin. Blank stdin counts as no schedule.
pub(crate) fn read_schedule_input(
    arg: Option<&str>,
    file: Option<&Path>,
) -> Result<Option<String>> {
    if let Some(arg) = arg {
        return Ok(Some(arg.to_string()));
    }
    if let Some(path) = file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schedule file: {}", path.display()))?;
        return Ok(Some(content));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read schedule from stdin")?;
    Ok((!buffer.trim().is_empty()).then_some(buffer))
}
