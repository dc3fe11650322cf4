use crate::errors::{AppError, AppResult};
use indicatif::{ProgressBar, ProgressStyle};

/// Creates a spinner with the standard application styling.
///
/// Used for streaming work where the total is unknown up front. The spinner
/// draws to stderr and stays hidden when stderr is not a terminal.
///
/// # Example
///
/// ```no_run
/// use osm_wrangle::ui;
///
/// # fn main() -> Result<(), osm_wrangle::errors::AppError> {
/// let spinner = ui::create_spinner("Shaping OSM elements")?;
/// spinner.tick();
/// spinner.finish_and_clear();
/// # Ok(())
/// # }
/// ```
pub fn create_spinner(prefix: &str) -> AppResult<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {prefix} {msg}")
            .map_err(|e| AppError::IoError(format!("Failed to create spinner template: {e}")))?,
    );
    pb.set_prefix(prefix.to_string());
    Ok(pb)
}
