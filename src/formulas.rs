//! Energy expenditure formulas: BMR and TDEE.

use crate::domain::{ActivityLevel, ClientProfile, Sex};

/// Mifflin-St Jeor coefficients.
mod mifflin_st_jeor {
    pub const WEIGHT: f64 = 10.0;
    pub const HEIGHT: f64 = 6.25;
    pub const AGE: f64 = 5.0;
    pub const MALE_CONSTANT: f64 = 5.0;
    pub const FEMALE_CONSTANT: f64 = 161.0;
}

/// Calculates Basal Metabolic Rate using the Mifflin-St Jeor equation.
///
/// Formula:
/// ```text
/// male:   BMR = 10 × weight + 6.25 × height - 5 × age + 5
/// female: BMR = 10 × weight + 6.25 × height - 5 × age - 161
/// ```
///
/// # Arguments
/// * `sex` - Selects the trailing constant
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
///
/// # Returns
/// BMR in kcal/day
pub fn calculate_bmr(sex: Sex, weight_kg: f64, height_cm: f64, age: i32) -> f64 {
    let base = mifflin_st_jeor::WEIGHT * weight_kg + mifflin_st_jeor::HEIGHT * height_cm
        - mifflin_st_jeor::AGE * f64::from(age);

    match sex {
        Sex::Male => base + mifflin_st_jeor::MALE_CONSTANT,
        Sex::Female => base - mifflin_st_jeor::FEMALE_CONSTANT,
    }
}

/// Returns the TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Calculates Total Daily Energy Expenditure for a profile.
///
/// TDEE = BMR × activity multiplier. The result is not rounded.
pub fn calculate_tdee(profile: &ClientProfile) -> f64 {
    let bmr = calculate_bmr(
        profile.sex,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
    );
    bmr * activity_multiplier(profile.activity_level)
}
