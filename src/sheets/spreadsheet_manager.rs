use error_stack::{report, Result, ResultExt};
use google_sheets4::{api::ValueRange, Sheets};
use serde_json::Value;
use thiserror::Error;

use crate::config::sheets_config::SpreadsheetConfig;

use super::{auth, http_client};

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    hub: Sheets<
        google_sheets4::hyper_rustls::HttpsConnector<google_sheets4::hyper::client::HttpConnector>,
    >,
}

#[derive(Error, Debug)]
pub enum SpreadsheetManagerError {
    #[error("Failed to authenticate with the spreadsheet API")]
    FailedToAuthenticate,
    #[error("Failed to fetch range")]
    FailedToFetchRange,
    #[error("Failed to fetch sheet title")]
    FailedToFetchSheetTitle,
}

impl SpreadsheetManager {
    pub async fn new(config: SpreadsheetConfig) -> Result<Self, SpreadsheetManagerError> {
        let client = http_client::http_client();
        let auth = auth::auth(&config, client.clone())
            .await
            .change_context(SpreadsheetManagerError::FailedToAuthenticate)?;
        let hub = Sheets::new(client, auth);

        Ok(SpreadsheetManager { config, hub })
    }

    /// One `values.get` call. The range expression is handed to the API
    /// verbatim; the API is the sole validator.
    pub async fn read_range(&self, range: &str) -> Result<ValueRange, SpreadsheetManagerError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(&self.config.spreadsheet_id, range)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToFetchRange)
            .attach_printable_lazy(|| format!("range: {}", range))?;

        Ok(response.1)
    }

    /// Title of the spreadsheet's first worksheet.
    pub async fn first_sheet_title(&self) -> Result<String, SpreadsheetManagerError> {
        let response = self
            .hub
            .spreadsheets()
            .get(&self.config.spreadsheet_id)
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToFetchSheetTitle)?;

        let sheets = response
            .1
            .sheets
            .ok_or(report!(SpreadsheetManagerError::FailedToFetchSheetTitle))?;

        sheets
            .into_iter()
            .next()
            .and_then(|sheet| sheet.properties)
            .and_then(|properties| properties.title)
            .ok_or(report!(SpreadsheetManagerError::FailedToFetchSheetTitle))
    }
}

/// The API omits `values` entirely for an empty range.
pub fn values_or_empty(value_range: ValueRange) -> Vec<Vec<Value>> {
    value_range.values.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_values_become_an_empty_grid() {
        assert!(values_or_empty(ValueRange::default()).is_empty());
    }

    #[test]
    fn present_values_pass_through() {
        let value_range = ValueRange {
            values: Some(vec![vec![json!("a"), json!("b")], vec![json!(1), json!(2)]]),
            ..Default::default()
        };

        assert_eq!(
            values_or_empty(value_range),
            vec![vec![json!("a"), json!("b")], vec![json!(1), json!(2)]],
        );
    }
}
