//! Meal suggestions keyed by diet preference.

use crate::domain::DietPreference;

const VEGAN_MEALS: [&str; 3] = ["Tofu stir-fry", "Quinoa salad", "Oatmeal with almond butter"];

const KETO_MEALS: [&str; 3] = [
    "Bacon & eggs",
    "Avocado chicken salad",
    "Salmon with veggies",
];

const OMNIVORE_MEALS: [&str; 3] = [
    "Grilled chicken & rice",
    "Greek yogurt with honey",
    "Steak with sweet potatoes",
];

/// Returns the fixed meal list for a diet preference.
pub fn select_meals(diet: DietPreference) -> &'static [&'static str; 3] {
    match diet {
        DietPreference::Vegan => &VEGAN_MEALS,
        DietPreference::Keto => &KETO_MEALS,
        DietPreference::Omnivore => &OMNIVORE_MEALS,
    }
}
