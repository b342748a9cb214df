use crate::core::formatter::format_value;
use crate::domain::model::{Projection, RadixValue};
use crate::utils::error::ConversionError;

/// 固定顯示的進制：二、八、十、十六
pub const COMMON_RADICES: [u32; 4] = [2, 8, 10, 16];

/// 固定進制加上目標進制，保持順序並去除重複
pub fn projection_radices(target_radix: u32) -> Vec<u32> {
    let mut radices = COMMON_RADICES.to_vec();
    if !radices.contains(&target_radix) {
        radices.push(target_radix);
    }
    radices
}

pub fn radix_label(radix: u32) -> String {
    match radix {
        2 => "binary".to_string(),
        8 => "octal".to_string(),
        10 => "decimal".to_string(),
        16 => "hexadecimal".to_string(),
        other => format!("base {}", other),
    }
}

pub fn project(value: &RadixValue, target_radix: u32) -> Result<Vec<Projection>, ConversionError> {
    projection_radices(target_radix)
        .into_iter()
        .map(|radix| {
            Ok(Projection {
                radix,
                label: radix_label(radix),
                value: format_value(value, radix)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_in_common_set_is_not_repeated() {
        assert_eq!(projection_radices(16), vec![2, 8, 10, 16]);
        assert_eq!(projection_radices(2), vec![2, 8, 10, 16]);
    }

    #[test]
    fn test_other_target_is_appended_last() {
        assert_eq!(projection_radices(36), vec![2, 8, 10, 16, 36]);
        assert_eq!(projection_radices(3), vec![2, 8, 10, 16, 3]);
    }

    #[test]
    fn test_project_renders_every_radix() {
        let projections = project(&RadixValue::from(-42), 7).unwrap();
        let rendered: Vec<(u32, &str)> = projections
            .iter()
            .map(|p| (p.radix, p.value.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![(2, "-101010"), (8, "-52"), (10, "-42"), (16, "-2A"), (7, "-60")]
        );
        assert_eq!(projections[4].label, "base 7");
        assert_eq!(projections[3].label, "hexadecimal");
    }
}
