use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutineError {
    #[error("Export failed: {0}")]
    ExportFailure(String),
}

pub type RoutineResult = error_stack::Result<(), RoutineError>;

#[async_trait::async_trait]
pub trait Routine {
    fn name(&self) -> &'static str;

    async fn run(&self) -> RoutineResult;
}
