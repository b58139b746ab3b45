#[derive(serde::Deserialize, Debug, Clone)]
pub struct ExportConfig {
    pub records: RecordsExportConfig,
    pub values: ValuesExportConfig,
}

/// First worksheet, rows keyed by the header row.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct RecordsExportConfig {
    pub output: Box<str>,
}

/// A fixed A1 range, raw cell values. The range is passed to the API verbatim.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct ValuesExportConfig {
    pub range: Box<str>,
    pub output: Box<str>,
}
