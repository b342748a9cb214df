use crate::core::{MAX_RADIX, MIN_RADIX};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 2] = ["json", "csv"];
pub const ERROR_POLICIES: [&str; 2] = ["continue", "stop"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchInfo,
    pub source: Option<SourceConfig>,
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
    pub output: OutputConfig,
    pub error_handling: Option<ErrorHandlingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub csv_path: Option<String>,
    pub default_target_radix: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub input: String,
    pub from: i64,
    pub to: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub formats: Vec<String>,
    pub json_filename: Option<String>,
    pub csv_filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    pub on_conversion_error: Option<String>,
}

impl BatchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigParseError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }

    pub fn csv_path(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.csv_path.as_deref())
    }

    pub fn default_target_radix(&self) -> Option<i64> {
        self.source.as_ref().and_then(|s| s.default_target_radix)
    }

    pub fn json_filename(&self) -> &str {
        self.output.json_filename.as_deref().unwrap_or("report.json")
    }

    pub fn csv_filename(&self) -> &str {
        self.output.csv_filename.as_deref().unwrap_or("report.csv")
    }

    pub fn writes_format(&self, format: &str) -> bool {
        self.output.formats.iter().any(|f| f == format)
    }

    /// 遇到轉換錯誤時是否停止整個批次
    pub fn stop_on_error(&self) -> bool {
        self.error_handling
            .as_ref()
            .and_then(|e| e.on_conversion_error.as_deref())
            .map(|policy| policy == "stop")
            .unwrap_or(false)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("batch.name", &self.batch.name)?;
        validate_path("output.path", &self.output.path)?;

        if self.output.formats.is_empty() {
            return Err(AppError::MissingConfigError {
                field: "output.formats".to_string(),
            });
        }
        for format in &self.output.formats {
            validate_one_of("output.formats", format, &OUTPUT_FORMATS)?;
        }

        if let Some(csv_path) = self.csv_path() {
            validate_path("source.csv_path", csv_path)?;
        }
        if let Some(radix) = self.default_target_radix() {
            validate_range(
                "source.default_target_radix",
                radix,
                MIN_RADIX as i64,
                MAX_RADIX as i64,
            )?;
        }

        for (index, job) in self.jobs.iter().enumerate() {
            validate_range(
                &format!("jobs[{}].from", index),
                job.from,
                MIN_RADIX as i64,
                MAX_RADIX as i64,
            )?;
            validate_range(
                &format!("jobs[{}].to", index),
                job.to,
                MIN_RADIX as i64,
                MAX_RADIX as i64,
            )?;
        }

        if let Some(policy) = self
            .error_handling
            .as_ref()
            .and_then(|e| e.on_conversion_error.as_deref())
        {
            validate_one_of("error_handling.on_conversion_error", policy, &ERROR_POLICIES)?;
        }

        if self.jobs.is_empty() && self.csv_path().is_none() {
            return Err(AppError::MissingConfigError {
                field: "jobs or source.csv_path".to_string(),
            });
        }

        Ok(())
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
