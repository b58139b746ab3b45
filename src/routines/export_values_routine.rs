use std::path::Path;
use std::sync::Arc;

use error_stack::ResultExt;
use indicatif::ProgressBar;

use crate::cli::progress::{finish_progress, new_progress, ProgressBarExt};
use crate::config::export_config::ValuesExportConfig;
use crate::export::json_writer::{self, JsonStyle};
use crate::sheets::spreadsheet_manager::{values_or_empty, SpreadsheetManager};

use super::routine::{Routine, RoutineError, RoutineResult};

/// Reads the configured cell range and writes the raw 2-D array of cell
/// values, exactly as returned.
pub struct ExportValuesRoutine {
    spreadsheet_manager: Arc<SpreadsheetManager>,
    config: ValuesExportConfig,
}

impl ExportValuesRoutine {
    pub fn new(spreadsheet_manager: Arc<SpreadsheetManager>, config: ValuesExportConfig) -> Self {
        Self {
            spreadsheet_manager,
            config,
        }
    }
}

#[async_trait::async_trait]
impl Routine for ExportValuesRoutine {
    fn name(&self) -> &'static str {
        "Values Export"
    }

    async fn run(&self) -> RoutineResult {
        log::info!("Values: Running ExportValuesRoutine");

        let progress = new_progress(ProgressBar::new_spinner());

        progress.trace(format!("Values: ☁️  Fetching range {}", self.config.range));
        let value_range = self
            .spreadsheet_manager
            .read_range(self.config.range.as_ref())
            .await
            .change_context(RoutineError::ExportFailure(format!(
                "Failed to read range '{}'",
                self.config.range
            )))?;

        let values = values_or_empty(value_range);

        progress.trace("Values: 📝 Writing the JSON file");
        json_writer::write_json(
            Path::new(self.config.output.as_ref()),
            &values,
            JsonStyle::Pretty,
        )
        .change_context(RoutineError::ExportFailure(format!(
            "Failed to write '{}'",
            self.config.output
        )))?;

        progress.info(format!(
            "Values: ✅ Wrote {} rows to {}",
            values.len(),
            self.config.output
        ));
        finish_progress(&progress);

        Ok(())
    }
}
