//! Tests for goal models and progress computation.

#[cfg(test)]
mod tests {
    use crate::goals::{FinancialGoal, GoalWithProgress};
    use chrono::Utc;

    fn create_test_goal(target_amount: f64, current_amount: f64) -> FinancialGoal {
        FinancialGoal {
            id: "goal-1".to_string(),
            user_id: "user-1".to_string(),
            nama: "Dana Darurat".to_string(),
            target_amount,
            current_amount,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_progress_zero_target_is_zero() {
        let goal = create_test_goal(0.0, 500_000.0);
        assert_eq!(goal.progress_percentage(), 0.0);
    }

    #[test]
    fn test_progress_zero_current_is_zero() {
        let goal = create_test_goal(1_000_000.0, 0.0);
        assert_eq!(goal.progress_percentage(), 0.0);
    }

    #[test]
    fn test_progress_partial() {
        let goal = create_test_goal(1_000_000.0, 250_000.0);
        assert!((goal.progress_percentage() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_exactly_complete() {
        let goal = create_test_goal(750_000.0, 750_000.0);
        assert_eq!(goal.progress_percentage(), 100.0);
    }

    #[test]
    fn test_progress_clamped_at_100() {
        let goal = create_test_goal(100_000.0, 250_000.0);
        assert_eq!(goal.progress_percentage(), 100.0);
    }

    #[test]
    fn test_goal_with_progress_serialization_is_flat() {
        let view = GoalWithProgress::from(create_test_goal(200_000.0, 50_000.0));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["nama"], "Dana Darurat");
        assert_eq!(json["target_amount"], 200_000.0);
        assert_eq!(json["progress_percentage"], 25.0);
        // Flattened: the goal fields sit beside progress_percentage.
        assert!(json.get("goal").is_none());
    }
}
