use crate::core::digit_value;
use crate::core::normalizer::NormalizedInput;
use crate::domain::model::RadixValue;
use crate::utils::error::ConversionError;
use num_bigint::BigUint;
use num_traits::Zero;

/// 將數字字串逐位累加為任意精度的非負整數
pub fn parse_digits(digits: &str, radix: u32) -> Result<BigUint, ConversionError> {
    let mut magnitude = BigUint::zero();
    for (position, character) in digits.chars().enumerate() {
        let digit = digit_value(character)
            .filter(|value| *value < radix)
            .ok_or(ConversionError::DigitOutOfRange {
                radix,
                character,
                position,
            })?;
        magnitude *= radix;
        magnitude += digit;
    }
    Ok(magnitude)
}

/// 解析正規化後的輸入並套用符號
pub fn parse_value(input: &NormalizedInput) -> Result<RadixValue, ConversionError> {
    let magnitude = parse_digits(&input.digits, input.source_radix)?;
    Ok(RadixValue::from_parts(input.negative, magnitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalizer::normalize;

    #[test]
    fn test_parse_simple_values() {
        assert_eq!(parse_digits("0", 10).unwrap(), BigUint::zero());
        assert_eq!(parse_digits("1010", 2).unwrap(), BigUint::from(10u32));
        assert_eq!(parse_digits("777", 8).unwrap(), BigUint::from(511u32));
        assert_eq!(parse_digits("FF", 16).unwrap(), BigUint::from(255u32));
        assert_eq!(parse_digits("Z", 36).unwrap(), BigUint::from(35u32));
    }

    #[test]
    fn test_leading_zeros_are_accepted() {
        assert_eq!(parse_digits("000123", 10).unwrap(), BigUint::from(123u32));
    }

    #[test]
    fn test_digit_borrowed_from_higher_radix() {
        assert_eq!(
            parse_digits("178", 8),
            Err(ConversionError::DigitOutOfRange {
                radix: 8,
                character: '8',
                position: 2,
            })
        );
        assert!(parse_digits("2", 2).is_err());
    }

    #[test]
    fn test_binary_accepts_only_zero_and_one() {
        assert!(parse_digits("0110", 2).is_ok());
        for bad in ["2", "9", "A"] {
            assert!(parse_digits(bad, 2).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_radix_36_accepts_full_alphabet() {
        let value = parse_digits("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ", 36).unwrap();
        assert!(!value.is_zero());
    }

    #[test]
    fn test_unknown_characters_are_rejected() {
        assert!(matches!(
            parse_digits("+5", 10),
            Err(ConversionError::DigitOutOfRange { character: '+', position: 0, .. })
        ));
        assert!(matches!(
            parse_digits("1-2", 10),
            Err(ConversionError::DigitOutOfRange { character: '-', position: 1, .. })
        ));
    }

    #[test]
    fn test_value_beyond_u128() {
        let digits = "F".repeat(40);
        let value = parse_digits(&digits, 16).unwrap();
        assert_eq!(value.bits(), 160);
    }

    #[test]
    fn test_parse_value_applies_sign() {
        let input = normalize("-0x10", 16, 10).unwrap();
        assert_eq!(parse_value(&input).unwrap(), RadixValue::from(-16));

        let zero = normalize("-0", 10, 10).unwrap();
        let value = parse_value(&zero).unwrap();
        assert!(value.is_zero());
        assert!(!value.is_negative());
    }
}
