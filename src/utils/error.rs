use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// 進制參數的角色（輸入或輸出）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RadixRole {
    Source,
    Target,
}

impl fmt::Display for RadixRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadixRole::Source => write!(f, "source"),
            RadixRole::Target => write!(f, "target"),
        }
    }
}

/// 轉換引擎的錯誤類型，全部都是本地驗證失敗，不會重試
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Invalid {role} radix '{value}': must be an integer between 2 and 36")]
    InvalidRadix { role: RadixRole, value: String },

    #[error("No digits left to convert after removing sign and prefix")]
    EmptyDigits,

    #[error("Character '{character}' at position {position} is not a valid base-{radix} digit")]
    DigitOutOfRange {
        radix: u32,
        character: char,
        position: usize,
    },
}

impl ConversionError {
    pub fn invalid_radix(role: RadixRole, value: impl ToString) -> Self {
        ConversionError::InvalidRadix {
            role,
            value: value.to_string(),
        }
    }

    /// 穩定的錯誤代碼，供報表與外部呼叫端比對
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::EmptyInput => "EmptyInput",
            ConversionError::InvalidRadix { .. } => "InvalidRadix",
            ConversionError::EmptyDigits => "EmptyDigits",
            ConversionError::DigitOutOfRange { .. } => "DigitOutOfRange",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定程式結束代碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Conversion(_) => ErrorCategory::Input,
            AppError::IoError(_) => ErrorCategory::Io,
            AppError::CsvError(_) | AppError::SerializationError(_) => ErrorCategory::Data,
            AppError::ConfigParseError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Conversion(_) => ErrorSeverity::Medium,
            AppError::CsvError(_)
            | AppError::ConfigParseError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorSeverity::High,
            AppError::IoError(_) | AppError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Conversion(e) => format!("Cannot convert the value: {}", e),
            AppError::IoError(e) => format!("File operation failed: {}", e),
            AppError::CsvError(e) => format!("The CSV job file could not be read: {}", e),
            AppError::SerializationError(e) => format!("Failed to write the report: {}", e),
            AppError::ConfigParseError { message } => {
                format!("The configuration file is not valid: {}", message)
            }
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            AppError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::Conversion(ConversionError::EmptyInput) => "請輸入需要轉換的數值",
            AppError::Conversion(ConversionError::InvalidRadix { .. }) => {
                "進制必須是 2 到 36 之間的整數"
            }
            AppError::Conversion(ConversionError::EmptyDigits) => "請在符號或前綴之後輸入有效數字",
            AppError::Conversion(ConversionError::DigitOutOfRange { .. }) => {
                "檢查輸入值是否只包含該進制允許的字元 (0-9, A-Z)"
            }
            AppError::IoError(_) => "確認檔案路徑存在且具有讀寫權限",
            AppError::CsvError(_) => "確認 CSV 檔案包含 input,from,to 標題列",
            AppError::SerializationError(_) => "檢查輸出目錄是否可寫入",
            AppError::ConfigParseError { .. } => "確認檔案為有效的 TOML 格式",
            AppError::InvalidConfigValueError { .. } | AppError::MissingConfigError { .. } => {
                "修正配置檔案後重新執行"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
