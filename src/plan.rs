//! Plan generation: energy estimate, macro split, workouts and meals
//! assembled into a single response.

use crate::domain::{ClientProfile, Macros, PlanResponse};
use crate::error::PlanError;
use crate::formulas::calculate_tdee;
use crate::meals::select_meals;
use crate::nutrition::allocate_macros;
use crate::workout::schedule_workouts;

/// Process-wide options for plan generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanOptions {
    /// Raise negative carbohydrate targets to zero (default: false).
    pub clamp_negative_carbs: bool,
}

/// Stateless plan generator. Holds only read-only options.
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator {
    options: PlanOptions,
}

impl PlanGenerator {
    pub fn new(options: PlanOptions) -> Self {
        Self { options }
    }

    /// Generates a complete plan for a profile.
    pub fn generate(&self, profile: &ClientProfile) -> Result<PlanResponse, PlanError> {
        let tdee = calculate_tdee(profile);
        let targets = allocate_macros(
            tdee,
            profile.goal,
            profile.weight_kg,
            self.options.clamp_negative_carbs,
        )?;

        log::debug!(
            "Plan for {} {} ({}): TDEE {:.1} kcal, target {} kcal",
            profile.sex,
            profile.goal,
            profile.activity_level,
            tdee,
            targets.calories
        );

        Ok(PlanResponse {
            calories: targets.calories,
            macros: Macros {
                protein_g: targets.protein_g,
                fats_g: targets.fats_g,
                carbs_g: targets.carbs_g,
            },
            workout_plan: schedule_workouts(profile.workouts_per_week),
            meal_plan: select_meals(profile.diet_preference)
                .iter()
                .map(|meal| meal.to_string())
                .collect(),
        })
    }
}
