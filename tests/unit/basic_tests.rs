/// Unit tests covering the store operations against an in-memory backend
use habit_streaks::*;
use chrono::NaiveDate;

fn day(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

#[cfg(test)]
mod store_tests {
    use super::*;

    #[test]
    fn test_add_habit_creates_empty_record() {
        let store = HabitStore::in_memory();
        store.add_habit("Morning Run").expect("add should succeed");

        let habits = store.habits();
        assert_eq!(habits.len(), 1);
        assert!(habits["Morning Run"].dates.is_empty());
    }

    #[test]
    fn test_add_habit_is_idempotent() {
        let store = HabitStore::in_memory();
        store.add_habit("Read").expect("add should succeed");
        store
            .mark_date("Read", day("2024-01-01"))
            .expect("mark should succeed");

        // Adding again must not reset the record
        store.add_habit("Read").expect("second add should succeed");
        assert_eq!(store.habits()["Read"].dates, vec![day("2024-01-01")]);
    }

    #[test]
    fn test_add_habit_rejects_empty_name() {
        let store = HabitStore::in_memory();
        assert!(matches!(
            store.add_habit("   "),
            Err(TrackerError::Domain(_))
        ));
        assert!(store.habits().is_empty());
    }

    #[test]
    fn test_mark_date_deduplicates() {
        let store = HabitStore::in_memory();
        store.add_habit("Stretch").expect("add should succeed");

        assert!(store.mark_date("Stretch", day("2024-01-01")).unwrap());
        assert!(!store.mark_date("Stretch", day("2024-01-01")).unwrap());
        assert_eq!(store.habits()["Stretch"].dates.len(), 1);
    }

    #[test]
    fn test_mark_date_on_missing_habit_is_noop() {
        let store = HabitStore::in_memory();
        assert!(!store.mark_date("Ghost", day("2024-01-01")).unwrap());
        assert!(store.habits().is_empty());
    }

    #[test]
    fn test_rename_preserves_dates() {
        let store = HabitStore::in_memory();
        store.add_habit("Jog").expect("add should succeed");
        store.mark_date("Jog", day("2024-01-01")).unwrap();
        store.mark_date("Jog", day("2024-01-02")).unwrap();

        assert!(store.rename_habit("Jog", "Run").unwrap());

        let habits = store.habits();
        assert!(!habits.contains_key("Jog"));
        assert_eq!(habits["Run"].dates, vec![day("2024-01-01"), day("2024-01-02")]);
    }

    #[test]
    fn test_rename_fails_on_collision() {
        let store = HabitStore::in_memory();
        store.add_habit("A").unwrap();
        store.add_habit("B").unwrap();
        store.mark_date("B", day("2024-01-01")).unwrap();

        assert!(!store.rename_habit("A", "B").unwrap());

        // Both records untouched
        let habits = store.habits();
        assert!(habits["A"].dates.is_empty());
        assert_eq!(habits["B"].dates, vec![day("2024-01-01")]);
    }

    #[test]
    fn test_rename_fails_on_missing_source() {
        let store = HabitStore::in_memory();
        assert!(!store.rename_habit("Nope", "Still Nope").unwrap());
    }

    #[test]
    fn test_rename_round_trip_restores_state() {
        let store = HabitStore::in_memory();
        store.add_habit("A").unwrap();
        store.mark_date("A", day("2024-01-01")).unwrap();
        let before = store.habits();

        assert!(store.rename_habit("A", "B").unwrap());
        assert!(store.rename_habit("B", "A").unwrap());

        assert_eq!(store.habits(), before);
    }

    #[test]
    fn test_delete_habit() {
        let store = HabitStore::in_memory();
        store.add_habit("Gone Soon").unwrap();

        assert!(store.delete_habit("Gone Soon").unwrap());
        assert!(!store.delete_habit("Gone Soon").unwrap());
        assert!(store.habits().is_empty());
    }

    #[test]
    fn test_habit_names_are_case_sensitive() {
        let store = HabitStore::in_memory();
        store.add_habit("run").unwrap();
        store.add_habit("Run").unwrap();
        assert_eq!(store.habits().len(), 2);
    }

    #[test]
    fn test_streak_for_reads_through_store() {
        let store = HabitStore::in_memory();
        store.add_habit("Meditate").unwrap();
        store.mark_date("Meditate", day("2024-01-01")).unwrap();
        store.mark_date("Meditate", day("2024-01-02")).unwrap();
        store.mark_date("Meditate", day("2024-01-03")).unwrap();

        let streak = store
            .streak_for("Meditate", day("2024-01-03"))
            .expect("habit exists");
        assert_eq!(streak, Streak { current: 3, longest: 3 });

        assert!(store.streak_for("Ghost", day("2024-01-03")).is_none());
    }
}
