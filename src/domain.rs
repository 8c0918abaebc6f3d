//! Domain types for client profiles and generated plans.
//!
//! Profile fields that arrive as free-form labels are mapped onto enums by
//! total `from_label` functions. Every mapping has an explicit default branch,
//! so an unrecognised label never fails a request: it takes the documented
//! fallback instead.

use serde::{Deserialize, Serialize};

/// Biological sex used to select the BMR constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Maps a label to a sex. Only the exact label `"male"` selects
    /// [`Sex::Male`]; every other label selects [`Sex::Female`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "male" => Sex::Male,
            "female" => Sex::Female,
            other => {
                log::debug!("Unrecognised sex {:?}, using female constant", other);
                Sex::Female
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl From<String> for Sex {
    fn from(label: String) -> Self {
        Sex::from_label(&label)
    }
}

/// Training goal driving the calorie adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Goal {
    FatLoss,
    MuscleGain,
    Maintenance,
}

impl Goal {
    /// Maps a label to a goal. Unrecognised labels fall back to
    /// [`Goal::Maintenance`], which applies no calorie adjustment.
    pub fn from_label(label: &str) -> Self {
        match label {
            "fat_loss" => Goal::FatLoss,
            "muscle_gain" => Goal::MuscleGain,
            "maintenance" => Goal::Maintenance,
            other => {
                log::debug!("Unrecognised goal {:?}, using maintenance", other);
                Goal::Maintenance
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::FatLoss => "fat_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Maintenance => "maintenance",
        }
    }
}

impl From<String> for Goal {
    fn from(label: String) -> Self {
        Goal::from_label(&label)
    }
}

/// Self-reported daily activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Maps a label to an activity level. Unrecognised labels fall back to
    /// [`ActivityLevel::Sedentary`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            other => {
                log::debug!("Unrecognised activity level {:?}, using sedentary", other);
                ActivityLevel::Sedentary
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

/// Activity levels, least to most active.
#[cfg(test)]
pub const ACTIVITY_LEVELS: [ActivityLevel; 5] = [
    ActivityLevel::Sedentary,
    ActivityLevel::Light,
    ActivityLevel::Moderate,
    ActivityLevel::Active,
    ActivityLevel::VeryActive,
];

impl From<String> for ActivityLevel {
    fn from(label: String) -> Self {
        ActivityLevel::from_label(&label)
    }
}

/// Diet preference selecting the meal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum DietPreference {
    Vegan,
    Keto,
    /// Default for "none" and any other label.
    Omnivore,
}

impl DietPreference {
    /// Maps a label to a diet preference. Matching is exact and
    /// case-sensitive; anything other than `"vegan"` or `"keto"` is
    /// [`DietPreference::Omnivore`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "vegan" => DietPreference::Vegan,
            "keto" => DietPreference::Keto,
            "none" => DietPreference::Omnivore,
            other => {
                log::debug!("Unrecognised diet preference {:?}, using omnivore meals", other);
                DietPreference::Omnivore
            }
        }
    }
}

impl From<String> for DietPreference {
    fn from(label: String) -> Self {
        DietPreference::from_label(&label)
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A client's biometric and preference profile, as received in a request.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientProfile {
    pub age: i32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal: Goal,
    pub activity_level: ActivityLevel,
    pub diet_preference: DietPreference,
    pub workouts_per_week: i32,
}

/// Daily calorie target and macronutrient gram targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroTargets {
    pub calories: i64,
    pub protein_g: i64,
    pub fats_g: i64,
    pub carbs_g: i64,
}

/// Macronutrient block of a plan response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein_g: i64,
    pub fats_g: i64,
    pub carbs_g: i64,
}

/// A complete generated plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResponse {
    pub calories: i64,
    pub macros: Macros,
    pub workout_plan: Vec<String>,
    pub meal_plan: Vec<String>,
}
