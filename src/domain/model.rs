use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use std::ops::Neg;

/// 任意精度的有號整數值；零一律為非負號
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RadixValue(BigInt);

impl RadixValue {
    pub fn from_parts(negative: bool, magnitude: BigUint) -> Self {
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        // BigInt::from_biguint 會把零的符號正規化為 NoSign
        Self(BigInt::from_biguint(sign, magnitude))
    }

    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn magnitude(&self) -> &BigUint {
        self.0.magnitude()
    }

    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }
}

impl From<BigInt> for RadixValue {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<i64> for RadixValue {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl Neg for RadixValue {
    type Output = RadixValue;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub raw_input: String,
    pub source_radix: i64,
    pub target_radix: i64,
}

impl ConversionRequest {
    pub fn new(raw_input: impl Into<String>, source_radix: i64, target_radix: i64) -> Self {
        Self {
            raw_input: raw_input.into(),
            source_radix,
            target_radix,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub radix: u32,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub original_input: String,
    pub normalized_digits: String,
    pub source_radix: u32,
    pub target_radix: u32,
    pub primary_output: String,
    pub projections: Vec<Projection>,
}

impl ConversionResult {
    /// 取得指定進制的投影結果
    pub fn projection(&self, radix: u32) -> Option<&str> {
        self.projections
            .iter()
            .find(|p| p.radix == radix)
            .map(|p| p.value.as_str())
    }
}

/// 批次轉換中的單一工作；進制保留原始文字，非整數在轉換時才回報
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchJob {
    pub origin: String,
    pub input: String,
    pub source_radix: String,
    pub target_radix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    Converted { result: ConversionResult },
    Failed { error: FailureRecord },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    pub job: BatchJob,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

impl BatchEntry {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, BatchOutcome::Converted { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub name: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn new(name: impl Into<String>, entries: Vec<BatchEntry>) -> Self {
        let succeeded = entries.iter().filter(|e| e.is_success()).count();
        Self {
            name: name.into(),
            generated_at: chrono::Utc::now(),
            total: entries.len(),
            succeeded,
            failed: entries.len() - succeeded,
            entries,
        }
    }
}
