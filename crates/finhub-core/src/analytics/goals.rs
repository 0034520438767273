//! Savings goal progress

use chrono::NaiveDate;
use serde::Serialize;

use crate::format::months_between;
use crate::models::SavingsGoal;

#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress {
    pub goal: SavingsGoal,
    /// Percent of target saved; may exceed 100
    pub progress: f64,
    /// Amount still to save, never negative
    pub remaining: f64,
    /// Whole calendar months until the target date, never negative
    pub months_left: i32,
    /// Contribution per month needed to hit the target on time
    pub required_monthly: f64,
    pub on_track: bool,
}

pub fn goal_progress(goal: &SavingsGoal, today: NaiveDate) -> GoalProgress {
    let progress = if goal.target_amount > 0.0 {
        goal.current_amount / goal.target_amount * 100.0
    } else {
        0.0
    };
    let remaining = (goal.target_amount - goal.current_amount).max(0.0);
    let months_left = months_between(today, goal.target_date).max(0);
    let required_monthly = if months_left > 0 {
        remaining / f64::from(months_left)
    } else {
        0.0
    };

    GoalProgress {
        goal: goal.clone(),
        progress,
        remaining,
        months_left,
        required_monthly,
        on_track: required_monthly <= goal.monthly_contribution,
    }
}

pub fn goals_progress(goals: &[SavingsGoal], today: NaiveDate) -> Vec<GoalProgress> {
    goals.iter().map(|g| goal_progress(g, today)).collect()
}
