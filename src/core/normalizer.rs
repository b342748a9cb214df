use crate::core::check_radix;
use crate::utils::error::{ConversionError, RadixRole};

/// 清理後的輸入：符號與去除前綴後的數字字串
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    pub original: String,
    pub negative: bool,
    pub digits: String,
    pub source_radix: u32,
    pub target_radix: u32,
}

impl NormalizedInput {
    /// 帶符號的正規化數字字串，例如 "-FF"
    pub fn signed_digits(&self) -> String {
        if self.negative {
            format!("-{}", self.digits)
        } else {
            self.digits.clone()
        }
    }
}

pub fn normalize(
    raw_input: &str,
    source_radix: i64,
    target_radix: i64,
) -> Result<NormalizedInput, ConversionError> {
    let original = raw_input.trim();
    if original.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let source_radix = check_radix(source_radix, RadixRole::Source)?;
    let target_radix = check_radix(target_radix, RadixRole::Target)?;

    // 只做 ASCII 大寫轉換，並移除底線與空白分隔字元
    let folded: String = original
        .chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let (negative, unsigned) = match folded.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, folded.as_str()),
    };

    let digits = strip_prefix(unsigned, source_radix);
    if digits.is_empty() {
        return Err(ConversionError::EmptyDigits);
    }

    Ok(NormalizedInput {
        original: original.to_string(),
        negative,
        digits: digits.to_string(),
        source_radix,
        target_radix,
    })
}

/// 只在前綴與來源進制一致時才移除；不一致的前綴留給數字驗證處理
fn strip_prefix(value: &str, source_radix: u32) -> &str {
    let prefix = match source_radix {
        2 => "0B",
        8 => "0O",
        16 => "0X",
        _ => return value,
    };
    value.strip_prefix(prefix).unwrap_or(value)
}
