pub mod batch;
pub mod engine;
pub mod formatter;
pub mod normalizer;
pub mod parser;
pub mod projector;

pub use crate::domain::model::{ConversionRequest, ConversionResult, Projection, RadixValue};
pub use crate::domain::ports::{Pipeline, Storage};
pub use crate::utils::error::{ConversionError, RadixRole, Result};

/// 數字字元表，索引即為該字元代表的數值
pub const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

/// 檢查進制是否落在 2..=36
pub fn check_radix(radix: i64, role: RadixRole) -> std::result::Result<u32, ConversionError> {
    if (MIN_RADIX as i64..=MAX_RADIX as i64).contains(&radix) {
        Ok(radix as u32)
    } else {
        Err(ConversionError::invalid_radix(role, radix))
    }
}

/// 將文字形式的進制解析為整數；非整數視為無效進制
pub fn parse_radix_text(text: &str, role: RadixRole) -> std::result::Result<i64, ConversionError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ConversionError::invalid_radix(role, text.trim()))
}

pub(crate) fn digit_value(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    ALPHABET
        .iter()
        .position(|&d| d == c as u8)
        .map(|index| index as u32)
}
