use crate::config::toml_config::BatchConfig;
use crate::core::engine::{convert, request_from_text};
use crate::domain::model::{BatchEntry, BatchJob, BatchOutcome, BatchReport, FailureRecord};
use crate::domain::ports::{Pipeline, Storage};
use crate::utils::error::{AppError, Result};
use serde::Deserialize;

const CSV_REPORT_HEADERS: [&str; 13] = [
    "origin",
    "input",
    "source_radix",
    "target_radix",
    "status",
    "normalized",
    "output",
    "base2",
    "base8",
    "base10",
    "base16",
    "error_code",
    "error_message",
];

#[derive(Debug, Deserialize)]
struct CsvJobRow {
    input: String,
    from: String,
    #[serde(default)]
    to: Option<String>,
}

/// 讀取工作 (inline + CSV)、逐筆轉換、寫出 JSON/CSV 報表
pub struct BatchPipeline<S: Storage> {
    input_storage: S,
    output_storage: S,
    config: BatchConfig,
}

impl<S: Storage> BatchPipeline<S> {
    pub fn new(input_storage: S, output_storage: S, config: BatchConfig) -> Self {
        Self {
            input_storage,
            output_storage,
            config,
        }
    }

    fn read_csv_jobs(&self, csv_path: &str) -> Result<Vec<BatchJob>> {
        let data = self.input_storage.read_file(csv_path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data.as_slice());
        let headers = reader.headers()?.clone();
        let default_target = self.config.default_target_radix().map(|r| r.to_string());

        let mut jobs = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 2);
            let row: CsvJobRow = record.deserialize(Some(&headers))?;

            let target_radix = match row.to {
                Some(to) if !to.trim().is_empty() => to,
                _ => default_target.clone().unwrap_or_default(),
            };

            jobs.push(BatchJob {
                origin: format!("{}:{}", csv_path, line),
                input: row.input,
                source_radix: row.from,
                target_radix,
            });
        }

        tracing::debug!("Loaded {} jobs from {}", jobs.len(), csv_path);
        Ok(jobs)
    }

    fn render_json(&self, report: &BatchReport) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(report)?)
    }

    fn render_csv(&self, report: &BatchReport) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_REPORT_HEADERS)?;

        for entry in &report.entries {
            let job = &entry.job;
            let mut row = vec![
                job.origin.clone(),
                job.input.clone(),
                job.source_radix.clone(),
                job.target_radix.clone(),
            ];
            match &entry.outcome {
                BatchOutcome::Converted { result } => {
                    row.push("converted".to_string());
                    row.push(result.normalized_digits.clone());
                    row.push(result.primary_output.clone());
                    for radix in [2, 8, 10, 16] {
                        row.push(result.projection(radix).unwrap_or_default().to_string());
                    }
                    row.push(String::new());
                    row.push(String::new());
                }
                BatchOutcome::Failed { error } => {
                    row.push("failed".to_string());
                    row.extend(vec![String::new(); 6]);
                    row.push(error.code.clone());
                    row.push(error.message.clone());
                }
            }
            writer.write_record(&row)?;
        }

        writer
            .into_inner()
            .map_err(|e| AppError::IoError(e.into_error()))
    }
}

impl<S: Storage> Pipeline for BatchPipeline<S> {
    fn extract(&self) -> Result<Vec<BatchJob>> {
        let mut jobs: Vec<BatchJob> = self
            .config
            .jobs
            .iter()
            .enumerate()
            .map(|(index, job)| BatchJob {
                origin: format!("jobs[{}]", index),
                input: job.input.clone(),
                source_radix: job.from.to_string(),
                target_radix: job.to.to_string(),
            })
            .collect();

        if let Some(csv_path) = self.config.csv_path() {
            jobs.extend(self.read_csv_jobs(csv_path)?);
        }

        Ok(jobs)
    }

    fn transform(&self, jobs: Vec<BatchJob>) -> Result<BatchReport> {
        let stop_on_error = self.config.stop_on_error();
        let mut entries = Vec::with_capacity(jobs.len());

        for job in jobs {
            let outcome = request_from_text(&job.input, &job.source_radix, &job.target_radix)
                .and_then(|request| convert(&request));

            let outcome = match outcome {
                Ok(result) => BatchOutcome::Converted { result },
                Err(e) if stop_on_error => {
                    tracing::error!("❌ {} failed, stopping batch: {}", job.origin, e);
                    return Err(e.into());
                }
                Err(e) => {
                    tracing::warn!("⚠️ {} failed: {}", job.origin, e);
                    BatchOutcome::Failed {
                        error: FailureRecord {
                            code: e.code().to_string(),
                            message: e.to_string(),
                        },
                    }
                }
            };
            entries.push(BatchEntry { job, outcome });
        }

        Ok(BatchReport::new(self.config.batch.name.clone(), entries))
    }

    fn load(&self, report: BatchReport) -> Result<String> {
        let mut written = Vec::new();

        if self.config.writes_format("json") {
            let filename = self.config.json_filename();
            self.output_storage
                .write_file(filename, &self.render_json(&report)?)?;
            written.push(format!("{}/{}", self.config.output_path(), filename));
        }

        if self.config.writes_format("csv") {
            let filename = self.config.csv_filename();
            self.output_storage
                .write_file(filename, &self.render_csv(&report)?)?;
            written.push(format!("{}/{}", self.config.output_path(), filename));
        }

        Ok(written.join(", "))
    }
}

/// 批次執行摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub output: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<BatchSummary> {
        tracing::info!("Starting batch conversion...");

        let jobs = self.pipeline.extract()?;
        tracing::info!("Collected {} jobs", jobs.len());

        let report = self.pipeline.transform(jobs)?;
        tracing::info!(
            "Converted {} of {} jobs ({} failed)",
            report.succeeded,
            report.total,
            report.failed
        );

        let (total, succeeded, failed) = (report.total, report.succeeded, report.failed);
        let output = self.pipeline.load(report)?;
        tracing::info!("Report saved to: {}", output);

        Ok(BatchSummary {
            output,
            total,
            succeeded,
            failed,
        })
    }
}
