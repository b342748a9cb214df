use crate::core::{ALPHABET, MAX_RADIX, MIN_RADIX};
use crate::domain::model::RadixValue;
use crate::utils::error::{ConversionError, RadixRole};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// 以指定進制輸出數值，不帶任何前綴
pub fn format_value(value: &RadixValue, radix: u32) -> Result<String, ConversionError> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(ConversionError::invalid_radix(RadixRole::Target, radix));
    }
    if value.is_zero() {
        return Ok("0".to_string());
    }

    let digits = format_magnitude(value.magnitude(), radix);
    if value.is_negative() {
        Ok(format!("-{}", digits))
    } else {
        Ok(digits)
    }
}

fn format_magnitude(magnitude: &BigUint, radix: u32) -> String {
    let base = BigUint::from(radix);
    let mut remaining = magnitude.clone();
    let mut reversed = Vec::new();

    while !remaining.is_zero() {
        let (quotient, remainder) = remaining.div_rem(&base);
        // 餘數為零時 to_u32_digits 回傳空向量
        let digit = remainder.to_u32_digits().first().copied().unwrap_or(0);
        reversed.push(ALPHABET[digit as usize]);
        remaining = quotient;
    }

    reversed.iter().rev().map(|&b| b as char).collect()
}
