pub mod json_writer;
pub mod records;
