pub mod export_records_routine;
pub mod export_values_routine;
pub mod routine;
