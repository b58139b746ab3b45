mod cli;
mod config;
mod export;
mod routines;
mod sheets;

use std::sync::Arc;

use crate::config::app_config::CONFIG;
use crate::routines::export_records_routine::ExportRecordsRoutine;
use crate::routines::export_values_routine::ExportValuesRoutine;
use crate::routines::routine::Routine;
use crate::sheets::spreadsheet_manager::SpreadsheetManager;

#[derive(Debug, Clone, Copy)]
enum Selection {
    Records,
    Values,
    All,
}

fn parse_selection(args: &[String]) -> Selection {
    match args.get(1).map(|arg| arg.as_str()) {
        Some("records") => Selection::Records,
        Some("values") => Selection::Values,
        Some("all") | None => Selection::All,
        Some(other) => {
            log::error!(
                "Unknown export '{}', expected 'records', 'values' or 'all'",
                other
            );
            std::process::exit(1);
        }
    }
}

fn build_routines(
    selection: Selection,
    spreadsheet_manager: &Arc<SpreadsheetManager>,
) -> Vec<Box<dyn Routine>> {
    let records = || -> Box<dyn Routine> {
        Box::new(ExportRecordsRoutine::new(
            Arc::clone(spreadsheet_manager),
            CONFIG.export.records.clone(),
        ))
    };
    let values = || -> Box<dyn Routine> {
        Box::new(ExportValuesRoutine::new(
            Arc::clone(spreadsheet_manager),
            CONFIG.export.values.clone(),
        ))
    };

    match selection {
        Selection::Records => vec![records()],
        Selection::Values => vec![values()],
        Selection::All => vec![records(), values()],
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let selection = parse_selection(&args);

    let spreadsheet_manager = match SpreadsheetManager::new(CONFIG.sheets.clone()).await {
        Ok(manager) => Arc::new(manager),
        Err(report) => {
            log::error!("❌ Failed to connect to the spreadsheet API: {:?}", report);
            std::process::exit(1);
        }
    };

    let routines_to_run = build_routines(selection, &spreadsheet_manager);

    let mut any_failed = false;
    for routine in &routines_to_run {
        match routine.run().await {
            Ok(()) => log::info!("✅ {}: OK", routine.name()),
            Err(report) => {
                log::error!("❌ {}: {:?}", routine.name(), report);
                any_failed = true;
            }
        }
    }

    if any_failed {
        std::process::exit(1);
    }
}
