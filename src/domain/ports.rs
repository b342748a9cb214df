use crate::domain::model::{BatchJob, BatchReport};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// 批次轉換的三個階段：收集工作、執行轉換、輸出報表
pub trait Pipeline {
    fn extract(&self) -> Result<Vec<BatchJob>>;
    fn transform(&self, jobs: Vec<BatchJob>) -> Result<BatchReport>;
    fn load(&self, report: BatchReport) -> Result<String>;
}
