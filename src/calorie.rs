//! Daily calorie target calculation.
//!
//! Basal metabolic rate comes from the Mifflin-St Jeor equation, scaled by
//! a fixed activity multiplier. Pure arithmetic; input validation is the
//! caller's job.

use serde::{Deserialize, Serialize};

/// Biological sex, as the BMR formula splits on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Self-reported activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR to estimate total daily expenditure.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "lightly-active" => Some(ActivityLevel::LightlyActive),
            "moderately-active" => Some(ActivityLevel::ModeratelyActive),
            "very-active" => Some(ActivityLevel::VeryActive),
            "extremely-active" => Some(ActivityLevel::ExtremelyActive),
            _ => None,
        }
    }
}

/// Biometric inputs for the calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricProfile {
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub activity_level: ActivityLevel,
}

/// Basal metabolic rate in kcal/day via Mifflin-St Jeor.
///
/// male: 10w + 6.25h - 5a + 5, female: 10w + 6.25h - 5a - 161.
pub fn basal_metabolic_rate(profile: &BiometricProfile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm
        - 5.0 * f64::from(profile.age_years);
    match profile.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Daily calorie target: BMR times the activity multiplier, rounded to a
/// whole calorie. An explicit override bypasses the formula entirely.
pub fn daily_calorie_target(profile: &BiometricProfile, override_calories: Option<u32>) -> u32 {
    if let Some(calories) = override_calories {
        return calories;
    }
    (basal_metabolic_rate(profile) * profile.activity_level.multiplier()).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male_profile() -> BiometricProfile {
        BiometricProfile {
            sex: Sex::Male,
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 30,
            activity_level: ActivityLevel::Sedentary,
        }
    }

    #[test]
    fn test_bmr_male() {
        // 10*70 + 6.25*175 - 5*30 + 5
        assert_eq!(basal_metabolic_rate(&male_profile()), 1648.75);
    }

    #[test]
    fn test_bmr_female() {
        let profile = BiometricProfile {
            sex: Sex::Female,
            ..male_profile()
        };
        assert_eq!(basal_metabolic_rate(&profile), 1482.75);
    }

    #[test]
    fn test_sex_offset_is_166() {
        let male = basal_metabolic_rate(&male_profile());
        let female = basal_metabolic_rate(&BiometricProfile {
            sex: Sex::Female,
            ..male_profile()
        });
        assert_eq!(male - female, 166.0);
    }

    #[test]
    fn test_target_applies_multiplier() {
        let profile = BiometricProfile {
            activity_level: ActivityLevel::ModeratelyActive,
            ..male_profile()
        };
        // 1648.75 * 1.55 = 2555.5625
        assert_eq!(daily_calorie_target(&profile, None), 2556);

        let profile = BiometricProfile {
            sex: Sex::Female,
            ..male_profile()
        };
        // 1482.75 * 1.2 = 1779.3
        assert_eq!(daily_calorie_target(&profile, None), 1779);
    }

    #[test]
    fn test_override_bypasses_formula() {
        assert_eq!(daily_calorie_target(&male_profile(), Some(2200)), 2200);
    }

    #[test]
    fn test_multiplier_table() {
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::LightlyActive.multiplier(), 1.375);
        assert_eq!(ActivityLevel::ModeratelyActive.multiplier(), 1.55);
        assert_eq!(ActivityLevel::VeryActive.multiplier(), 1.725);
        assert_eq!(ActivityLevel::ExtremelyActive.multiplier(), 1.9);
    }

    #[test]
    fn test_parse_activity_level() {
        assert_eq!(
            ActivityLevel::parse_str("lightly_active"),
            Some(ActivityLevel::LightlyActive)
        );
        assert_eq!(
            ActivityLevel::parse_str("Very-Active"),
            Some(ActivityLevel::VeryActive)
        );
        assert_eq!(ActivityLevel::parse_str("athlete"), None);
    }

    #[test]
    fn test_parse_sex() {
        assert_eq!(Sex::parse_str("MALE"), Some(Sex::Male));
        assert_eq!(Sex::parse_str("other"), None);
    }

    #[test]
    fn test_serde_wire_names() {
        let level: ActivityLevel = serde_json::from_str("\"moderately-active\"").unwrap();
        assert_eq!(level, ActivityLevel::ModeratelyActive);
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"female\"");
    }
}
