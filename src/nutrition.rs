//! Calorie adjustment and macronutrient allocation.
//!
//! Protein and fat are fixed per kilogram of bodyweight. Carbohydrates take
//! whatever energy is left, so on a small calorie budget with a heavy client
//! the carbohydrate target goes negative. That value is kept unless the
//! caller asks for clamping.

use crate::domain::{Goal, MacroTargets};
use crate::error::PlanError;

/// Daily deficit applied for fat loss (kcal).
pub const FAT_LOSS_DEFICIT_KCAL: f64 = 500.0;

/// Daily surplus applied for muscle gain (kcal).
pub const MUSCLE_GAIN_SURPLUS_KCAL: f64 = 250.0;

/// Protein target per kilogram of bodyweight (g/kg).
pub const PROTEIN_G_PER_KG: f64 = 2.2;

/// Fat target per kilogram of bodyweight (g/kg).
pub const FAT_G_PER_KG: f64 = 0.8;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Applies the goal's calorie adjustment to a TDEE.
pub fn adjust_for_goal(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::FatLoss => tdee - FAT_LOSS_DEFICIT_KCAL,
        Goal::MuscleGain => tdee + MUSCLE_GAIN_SURPLUS_KCAL,
        Goal::Maintenance => tdee,
    }
}

/// Truncates a value toward zero into an integer field.
///
/// Fails when the value is NaN, infinite, or beyond the `i64` range.
pub fn truncate(field: &'static str, value: f64) -> Result<i64, PlanError> {
    // 2^63 is exactly representable; anything at or above it overflows i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let truncated = value.trunc();
    if !truncated.is_finite() || truncated >= LIMIT || truncated < -LIMIT {
        return Err(PlanError::NotRepresentable { field, value });
    }
    Ok(truncated as i64)
}

/// Splits an energy budget into calorie and macronutrient targets.
///
/// Order of operations:
/// 1. `adjusted = tdee ± goal adjustment`, truncated for the calorie field
/// 2. protein and fat grams from bodyweight, each truncated
/// 3. `carbs = (adjusted - protein_g × 4 - fats_g × 9) / 4` using the
///    untruncated `adjusted` and the truncated gram values, then truncated
///
/// # Arguments
/// * `tdee` - Total daily energy expenditure in kcal
/// * `goal` - Training goal selecting the adjustment
/// * `weight_kg` - Bodyweight in kilograms
/// * `clamp_negative_carbs` - Raise a negative carbohydrate target to zero
pub fn allocate_macros(
    tdee: f64,
    goal: Goal,
    weight_kg: f64,
    clamp_negative_carbs: bool,
) -> Result<MacroTargets, PlanError> {
    let adjusted = adjust_for_goal(tdee, goal);
    let calories = truncate("calories", adjusted)?;

    let protein_g = truncate("protein_g", PROTEIN_G_PER_KG * weight_kg)?;
    let fats_g = truncate("fats_g", FAT_G_PER_KG * weight_kg)?;

    let fixed_kcal = protein_g as f64 * KCAL_PER_G_PROTEIN + fats_g as f64 * KCAL_PER_G_FAT;
    let carbs = (adjusted - fixed_kcal) / KCAL_PER_G_CARBS;
    let mut carbs_g = truncate("carbs_g", carbs)?;

    if clamp_negative_carbs && carbs_g < 0 {
        log::debug!("Clamping carbohydrate target {}g to 0g", carbs_g);
        carbs_g = 0;
    }

    Ok(MacroTargets {
        calories,
        protein_g,
        fats_g,
        carbs_g,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_for_goal() {
        assert!((adjust_for_goal(2008.5, Goal::FatLoss) - 1508.5).abs() < 0.001);
        assert!((adjust_for_goal(2008.5, Goal::MuscleGain) - 2258.5).abs() < 0.001);
        assert!((adjust_for_goal(2008.5, Goal::Maintenance) - 2008.5).abs() < 0.001);
    }

    #[test]
    fn test_unknown_goal_applies_no_adjustment() {
        let goal = Goal::from_label("bulk");
        assert!((adjust_for_goal(2008.5, goal) - 2008.5).abs() < 0.001);
    }

    #[test]
    fn test_allocate_fat_loss_reference() {
        let targets = allocate_macros(2008.5, Goal::FatLoss, 70.0, false).unwrap();

        assert_eq!(
            targets,
            MacroTargets {
                calories: 1508,
                protein_g: 154,
                fats_g: 56,
                carbs_g: 97,
            }
        );
    }

    #[test]
    fn test_allocate_muscle_gain() {
        // adjusted = 2258.5, carbs = (2258.5 - 616 - 504) / 4 = 284.625
        let targets = allocate_macros(2008.5, Goal::MuscleGain, 70.0, false).unwrap();
        assert_eq!(targets.calories, 2258);
        assert_eq!(targets.carbs_g, 284);
    }

    #[test]
    fn test_carbs_use_truncated_protein_and_fat() {
        // protein 2.2 × 80.5 = 177.1 -> 177, fats 0.8 × 80.5 = 64.4 -> 64
        // carbs = (2500 - 708 - 576) / 4 = 304
        let targets = allocate_macros(2500.0, Goal::Maintenance, 80.5, false).unwrap();
        assert_eq!(targets.protein_g, 177);
        assert_eq!(targets.fats_g, 64);
        assert_eq!(targets.carbs_g, 304);
    }

    #[test]
    fn test_energy_balance_within_rounding() {
        let targets = allocate_macros(2731.4, Goal::Maintenance, 77.3, false).unwrap();
        let total = targets.protein_g * 4 + targets.fats_g * 9 + targets.carbs_g * 4;
        assert!((total - targets.calories).abs() <= 4);
    }

    #[test]
    fn test_negative_carbs_preserved_by_default() {
        // protein 330, fats 120 -> 1320 + 1080 = 2400 kcal fixed
        // carbs = (1500 - 2400) / 4 = -225
        let targets = allocate_macros(2000.0, Goal::FatLoss, 150.0, false).unwrap();
        assert_eq!(targets.carbs_g, -225);
    }

    #[test]
    fn test_negative_carbs_clamped_when_requested() {
        let targets = allocate_macros(2000.0, Goal::FatLoss, 150.0, true).unwrap();
        assert_eq!(targets.carbs_g, 0);
        assert_eq!(targets.calories, 1500);
    }

    #[test]
    fn test_negative_truncates_toward_zero() {
        assert_eq!(truncate("calories", -400.5).unwrap(), -400);
        assert_eq!(truncate("carbs_g", -6.75).unwrap(), -6);
    }

    #[test]
    fn test_truncate_rejects_non_finite() {
        assert!(matches!(
            truncate("calories", f64::INFINITY),
            Err(PlanError::NotRepresentable {
                field: "calories",
                ..
            })
        ));
        assert!(truncate("calories", f64::NAN).is_err());
        assert!(truncate("calories", 1e19).is_err());
        assert!(truncate("calories", -1e19).is_err());
    }

    #[test]
    fn test_allocate_rejects_infinite_energy() {
        let result = allocate_macros(f64::INFINITY, Goal::Maintenance, 70.0, false);
        assert!(matches!(
            result,
            Err(PlanError::NotRepresentable {
                field: "calories",
                ..
            })
        ));
    }
}
