use crate::core::formatter::format_value;
use crate::core::normalizer::normalize;
use crate::core::{check_radix, parse_radix_text};
use crate::core::parser::parse_value;
use crate::core::projector::project;
use crate::domain::model::{ConversionRequest, ConversionResult};
use crate::utils::error::{ConversionError, RadixRole};

/// 由文字欄位（命令列、CSV）建立請求，錯誤順序與 convert 相同
pub fn request_from_text(
    raw_input: &str,
    source_radix: &str,
    target_radix: &str,
) -> Result<ConversionRequest, ConversionError> {
    if raw_input.trim().is_empty() {
        return Err(ConversionError::EmptyInput);
    }
    let source = parse_radix_text(source_radix, RadixRole::Source)?;
    check_radix(source, RadixRole::Source)?;
    let target = parse_radix_text(target_radix, RadixRole::Target)?;
    check_radix(target, RadixRole::Target)?;
    Ok(ConversionRequest::new(raw_input, source, target))
}

/// 轉換入口：正規化 → 解析 → 各進制輸出
pub fn convert(request: &ConversionRequest) -> Result<ConversionResult, ConversionError> {
    convert_base(
        &request.raw_input,
        request.source_radix,
        request.target_radix,
    )
}

pub fn convert_base(
    raw_input: &str,
    source_radix: i64,
    target_radix: i64,
) -> Result<ConversionResult, ConversionError> {
    let normalized = normalize(raw_input, source_radix, target_radix)?;
    tracing::debug!(
        "Normalized '{}' to '{}' (base {} -> base {})",
        normalized.original,
        normalized.signed_digits(),
        normalized.source_radix,
        normalized.target_radix
    );

    let value = parse_value(&normalized)?;
    let primary_output = format_value(&value, normalized.target_radix)?;
    let projections = project(&value, normalized.target_radix)?;

    Ok(ConversionResult {
        normalized_digits: normalized.signed_digits(),
        original_input: normalized.original,
        source_radix: normalized.source_radix,
        target_radix: normalized.target_radix,
        primary_output,
        projections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_prefix_to_decimal() {
        let result = convert_base("0xFF", 16, 10).unwrap();
        assert_eq!(result.original_input, "0xFF");
        assert_eq!(result.normalized_digits, "FF");
        assert_eq!(result.primary_output, "255");
        assert_eq!(result.projection(2), Some("11111111"));
        assert_eq!(result.projection(8), Some("377"));
        assert_eq!(result.projection(16), Some("FF"));
        assert_eq!(result.projections.len(), 4);
    }

    #[test]
    fn test_hex_prefix_under_decimal_fails() {
        assert_eq!(
            convert_base("0xFF", 10, 2),
            Err(ConversionError::DigitOutOfRange {
                radix: 10,
                character: 'X',
                position: 1,
            })
        );
    }

    #[test]
    fn test_large_magnitude_is_exact() {
        let result = convert_base("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF", 16, 10).unwrap();
        assert_eq!(
            result.primary_output,
            "340282366920938463463374607431768211455"
        );
        assert_eq!(result.projection(2), Some("1".repeat(128).as_str()));
    }

    #[test]
    fn test_negative_value_keeps_sign_in_every_projection() {
        let result = convert_base("-0b1111_0000", 2, 36).unwrap();
        assert_eq!(result.normalized_digits, "-11110000");
        assert_eq!(result.primary_output, "-6O");
        assert!(result.projections.iter().all(|p| p.value.starts_with('-')));
        assert_eq!(result.projections.last().map(|p| p.radix), Some(36));
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        let result = convert_base("-000", 10, 16).unwrap();
        assert_eq!(result.normalized_digits, "-000");
        assert_eq!(result.primary_output, "0");
        assert!(result.projections.iter().all(|p| p.value == "0"));
    }

    #[test]
    fn test_request_wrapper() {
        let request = ConversionRequest::new("zz", 36, 10);
        let result = convert(&request).unwrap();
        assert_eq!(result.primary_output, "1295");
        assert_eq!(result.source_radix, 36);
        assert_eq!(result.target_radix, 10);
    }

    #[test]
    fn test_invalid_target_radix() {
        assert_eq!(
            convert_base("10", 10, 37),
            Err(ConversionError::invalid_radix(RadixRole::Target, 37))
        );
    }

    #[test]
    fn test_request_from_text_error_order() {
        assert_eq!(
            request_from_text(" ", "x", "y"),
            Err(ConversionError::EmptyInput)
        );
        assert_eq!(
            request_from_text("1", "1", "y"),
            Err(ConversionError::invalid_radix(RadixRole::Source, 1))
        );
        assert_eq!(
            request_from_text("1", "16", "ten"),
            Err(ConversionError::invalid_radix(RadixRole::Target, "ten"))
        );
        assert_eq!(
            request_from_text("ff", " 16", "2 ").unwrap(),
            ConversionRequest::new("ff", 16, 2)
        );
    }
}
