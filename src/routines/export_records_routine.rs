use std::path::Path;
use std::sync::Arc;

use error_stack::ResultExt;
use indicatif::ProgressBar;

use crate::cli::progress::{finish_progress, new_progress, ProgressBarExt};
use crate::config::export_config::RecordsExportConfig;
use crate::export::json_writer::{self, JsonStyle};
use crate::export::records::records_from_rows;
use crate::sheets::spreadsheet_manager::{values_or_empty, SpreadsheetManager};

use super::routine::{Routine, RoutineError, RoutineResult};

/// Reads the whole first worksheet and writes one JSON object per data row,
/// keyed by the header row.
pub struct ExportRecordsRoutine {
    spreadsheet_manager: Arc<SpreadsheetManager>,
    config: RecordsExportConfig,
}

impl ExportRecordsRoutine {
    pub fn new(spreadsheet_manager: Arc<SpreadsheetManager>, config: RecordsExportConfig) -> Self {
        Self {
            spreadsheet_manager,
            config,
        }
    }
}

#[async_trait::async_trait]
impl Routine for ExportRecordsRoutine {
    fn name(&self) -> &'static str {
        "Records Export"
    }

    async fn run(&self) -> RoutineResult {
        log::info!("Records: Running ExportRecordsRoutine");

        let progress = new_progress(ProgressBar::new_spinner());

        progress.trace("Records: 📋 Looking up the first worksheet");
        let sheet_title = self
            .spreadsheet_manager
            .first_sheet_title()
            .await
            .change_context(RoutineError::ExportFailure(
                "Failed to locate the first worksheet".to_string(),
            ))?;

        progress.trace("Records: ☁️  Fetching all rows");
        let value_range = self
            .spreadsheet_manager
            .read_range(&format!("'{}'", sheet_title))
            .await
            .change_context(RoutineError::ExportFailure(format!(
                "Failed to read worksheet '{}'",
                sheet_title
            )))?;

        progress.trace("Records: 📊 Keying rows by the header row");
        let rows = values_or_empty(value_range);
        let records = records_from_rows(&rows);

        progress.trace("Records: 📝 Writing the JSON file");
        json_writer::write_json(
            Path::new(self.config.output.as_ref()),
            &records,
            JsonStyle::Compact,
        )
        .change_context(RoutineError::ExportFailure(format!(
            "Failed to write '{}'",
            self.config.output
        )))?;

        progress.info(format!(
            "Records: ✅ Wrote {} records to {}",
            records.len(),
            self.config.output
        ));
        finish_progress(&progress);

        Ok(())
    }
}
