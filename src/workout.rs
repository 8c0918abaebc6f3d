//! Weekly workout schedule.

/// Session assigned to every scheduled day.
const SESSION: &str = "Full Body Strength Training";

/// Builds one label per requested weekly session, numbered from 1.
///
/// Zero or negative counts produce an empty schedule. The count is not
/// capped: the schedule is built eagerly, one `String` per session, so a
/// count near `i32::MAX` allocates billions of labels and can exhaust memory.
pub fn schedule_workouts(workouts_per_week: i32) -> Vec<String> {
    (1..=workouts_per_week)
        .map(|day| format!("Day {}: {}", day, SESSION))
        .collect()
}
