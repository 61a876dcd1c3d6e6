//! Employee number generation
//!
//! Two strategies, both producing `EMP-` prefixed, upper-case identifiers:
//!
//! | Strategy | Format | Collision space |
//! |----------|--------|-----------------|
//! | `random` | `EMP-1F3A9C0B` | 32 random bits; birthday bound ≈ n²/2³³ (≈1.2% at 10 000 records) |
//! | `timestamp` | `EMP-LQ2X8K1C-7HZ0QD` | 36⁶ ≈ 2.2·10⁹ suffixes per millisecond |
//!
//! Generation alone is not a uniqueness guarantee; the store's unique
//! constraint on `employee_number` is.

use rand::Rng;
use std::str::FromStr;

/// Prefix shared by every generated employee number
pub const EMPLOYEE_NUMBER_PREFIX: &str = "EMP-";

const BASE36_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Produces employee numbers for new hires
pub trait EmployeeNumberGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Built-in generation strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberStrategy {
    /// `EMP-` + first 8 hex digits of a random UUID
    RandomSuffix,
    /// `EMP-<base36 millis>-<6 random base36>`
    #[default]
    Timestamp,
}

impl NumberStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RandomSuffix => "random",
            Self::Timestamp => "timestamp",
        }
    }
}

impl FromStr for NumberStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::RandomSuffix),
            "timestamp" => Ok(Self::Timestamp),
            other => Err(format!(
                "EMPLOYEE_NUMBER_STRATEGY must be 'random' or 'timestamp', got '{other}'"
            )),
        }
    }
}

impl EmployeeNumberGenerator for NumberStrategy {
    fn generate(&self) -> String {
        match self {
            Self::RandomSuffix => random_suffix_number(),
            Self::Timestamp => timestamp_number(shared::util::now_millis()),
        }
    }
}

fn random_suffix_number() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("{}{}", EMPLOYEE_NUMBER_PREFIX, uuid[..8].to_ascii_uppercase())
}

fn timestamp_number(now_millis: i64) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..6)
        .map(|_| BASE36_ALPHABET[rng.gen_range(0..BASE36_ALPHABET.len())] as char)
        .collect();
    format!(
        "{}{}-{}",
        EMPLOYEE_NUMBER_PREFIX,
        to_base36(now_millis.max(0) as u64),
        suffix
    )
}

/// Upper-case base36 rendering of `n`
pub fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_base36_upper(s: &str) -> bool {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "LOYW3V28");
    }

    #[test]
    fn test_random_suffix_format() {
        let number = NumberStrategy::RandomSuffix.generate();
        let suffix = number.strip_prefix(EMPLOYEE_NUMBER_PREFIX).unwrap();
        assert_eq!(suffix.len(), 8);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        );
    }

    #[test]
    fn test_timestamp_format() {
        let number = timestamp_number(1_700_000_000_000);
        let rest = number.strip_prefix(EMPLOYEE_NUMBER_PREFIX).unwrap();
        let (stamp, suffix) = rest.split_once('-').unwrap();
        assert_eq!(stamp, "LOYW3V28");
        assert_eq!(suffix.len(), 6);
        assert!(is_base36_upper(suffix));
    }

    #[test]
    fn test_generated_numbers_do_not_repeat() {
        for strategy in [NumberStrategy::RandomSuffix, NumberStrategy::Timestamp] {
            let numbers: HashSet<String> = (0..500).map(|_| strategy.generate()).collect();
            assert_eq!(numbers.len(), 500, "{} produced a duplicate", strategy.as_str());
        }
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!(
            "random".parse::<NumberStrategy>().unwrap(),
            NumberStrategy::RandomSuffix
        );
        assert_eq!(
            "TIMESTAMP".parse::<NumberStrategy>().unwrap(),
            NumberStrategy::Timestamp
        );
        assert!("uuid".parse::<NumberStrategy>().is_err());
        assert_eq!(NumberStrategy::default(), NumberStrategy::Timestamp);
    }
}
