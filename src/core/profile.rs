use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::paths::get_droplet_dir;

// ── User Profile (~/.droplet/profile.json) ───────────────────────────────────
//
// Age and weight captured by the onboarding form and editable later from the
// settings screen.  These two values are the only inputs the intake
// calculation needs; no profile file on disk means onboarding has not run.

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct UserProfile {
    /// Age in whole years.
    #[serde(rename = "userAge")]
    pub age: u32,
    /// Body weight in kilograms.
    #[serde(rename = "userWeight")]
    pub weight: f64,
}

pub const MAX_AGE: u32 = 150;
pub const MAX_WEIGHT: f64 = 500.0;

// ── Input Validation ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NotANumber,
    Negative,
    ExceedsMaximum,
    BelowMinimum,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationError::NotANumber => "Age and weight must be numbers",
            ValidationError::Negative => "Age and weight cannot be negative",
            ValidationError::ExceedsMaximum => {
                "Age must be at most 150 years and weight at most 500 kg"
            }
            ValidationError::BelowMinimum => "Age and weight must be at least 1",
        };
        f.write_str(msg)
    }
}

/// Check raw form input for age and weight.  Rules run in order and the
/// first failure wins: parse, non-negative, maximum, minimum.
pub fn validate_profile(raw_age: &str, raw_weight: &str) -> Result<UserProfile, ValidationError> {
    let age: i64 = raw_age
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber)?;
    let weight: f64 = raw_weight
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber)?;
    // "NaN" and "inf" parse as f64 but are not usable weights.
    if !weight.is_finite() {
        return Err(ValidationError::NotANumber);
    }
    if age < 0 || weight < 0.0 {
        return Err(ValidationError::Negative);
    }
    if age > MAX_AGE as i64 || weight > MAX_WEIGHT {
        return Err(ValidationError::ExceedsMaximum);
    }
    if age < 1 || weight < 1.0 {
        return Err(ValidationError::BelowMinimum);
    }
    Ok(UserProfile {
        age: age as u32,
        weight,
    })
}

// ── Persistence ──────────────────────────────────────────────────────────────

fn profile_path() -> Result<PathBuf, String> {
    Ok(get_droplet_dir()?.join("profile.json"))
}

/// Returns the stored profile, or `None` when onboarding has not run yet.
pub fn read_profile() -> Result<Option<UserProfile>, String> {
    read_profile_from(&profile_path()?)
}

fn read_profile_from(path: &Path) -> Result<Option<UserProfile>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let profile: UserProfile =
        serde_json::from_str(&raw).map_err(|e| format!("Invalid profile data: {}", e))?;
    Ok(Some(profile))
}

pub fn save_profile(profile: &UserProfile) -> Result<(), String> {
    save_profile_to(&profile_path()?, profile)
}

fn save_profile_to(path: &Path, profile: &UserProfile) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
    }
    let raw = serde_json::to_string_pretty(profile).map_err(|e| e.to_string())?;
    fs::write(path, raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_round_trips_values() {
        let profile = validate_profile("30", "70").unwrap();
        assert_eq!(profile.age, 30);
        assert_eq!(profile.weight, 70.0);
    }

    #[test]
    fn test_input_is_trimmed_and_weight_may_be_fractional() {
        let profile = validate_profile(" 42 ", " 63.5 ").unwrap();
        assert_eq!(profile.age, 42);
        assert_eq!(profile.weight, 63.5);
    }

    #[test]
    fn test_non_numeric_input_is_rejected() {
        assert_eq!(
            validate_profile("abc", "70"),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            validate_profile("30", "heavy"),
            Err(ValidationError::NotANumber)
        );
        // Age is an integer field; a decimal age is not a number here.
        assert_eq!(
            validate_profile("30.5", "70"),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            validate_profile("30", "NaN"),
            Err(ValidationError::NotANumber)
        );
    }

    #[test]
    fn test_negative_values_are_rejected() {
        assert_eq!(validate_profile("-5", "70"), Err(ValidationError::Negative));
        assert_eq!(
            validate_profile("30", "-0.5"),
            Err(ValidationError::Negative)
        );
    }

    #[test]
    fn test_maximum_bounds() {
        assert_eq!(
            validate_profile("200", "70"),
            Err(ValidationError::ExceedsMaximum)
        );
        assert_eq!(
            validate_profile("30", "500.1"),
            Err(ValidationError::ExceedsMaximum)
        );
        assert!(validate_profile("150", "500").is_ok());
    }

    #[test]
    fn test_minimum_bounds() {
        assert_eq!(
            validate_profile("0", "70"),
            Err(ValidationError::BelowMinimum)
        );
        assert_eq!(
            validate_profile("30", "0.5"),
            Err(ValidationError::BelowMinimum)
        );
        assert!(validate_profile("1", "1").is_ok());
    }

    #[test]
    fn test_rule_order_parse_beats_range() {
        // Both fields broken: the parse failure on age wins over the range
        // failure the weight would produce.
        assert_eq!(
            validate_profile("old", "9000"),
            Err(ValidationError::NotANumber)
        );
        // Negative beats maximum.
        assert_eq!(
            validate_profile("-5", "9000"),
            Err(ValidationError::Negative)
        );
    }

    #[test]
    fn test_persistence_uses_documented_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let profile = UserProfile {
            age: 30,
            weight: 70.0,
        };
        save_profile_to(&path, &profile).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"userAge\": 30"));
        assert!(raw.contains("\"userWeight\": 70.0"));
        assert_eq!(read_profile_from(&path).unwrap(), Some(profile));
    }

    #[test]
    fn test_missing_profile_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_profile_from(&dir.path().join("profile.json")), Ok(None));
    }
}
