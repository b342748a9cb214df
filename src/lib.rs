pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::BatchConfig;

pub use adapters::LocalStorage;
pub use self::core::batch::{BatchEngine, BatchPipeline, BatchSummary};
pub use self::core::engine::{convert, convert_base, request_from_text};
pub use self::core::formatter::format_value;
pub use self::core::normalizer::{normalize, NormalizedInput};
pub use self::core::parser::{parse_digits, parse_value};
pub use self::core::projector::{project, projection_radices};
pub use domain::model::{ConversionRequest, ConversionResult, Projection, RadixValue};
pub use utils::error::{AppError, ConversionError, RadixRole, Result};
