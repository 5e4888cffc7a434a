#[cfg(test)]
mod tests {
    use blokk::libs::block::{BlockError, TimeBlock};

    #[test]
    fn test_new_block_starts_unstarted() {
        let block = TimeBlock::new("Work", "09:00", "11:00", "#4F46E5");

        assert!(!block.id.is_empty());
        assert!(!block.is_active);
        assert!(!block.is_completed);
        assert_eq!(block.progress, 0);
    }

    #[test]
    fn test_new_blocks_get_unique_ids() {
        let first = TimeBlock::new("Work", "09:00", "11:00", "#4F46E5");
        let second = TimeBlock::new("Work", "09:00", "11:00", "#4F46E5");

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_duration_hours() {
        let block = TimeBlock::new("Work", "09:00", "10:30", "#4F46E5");
        assert_eq!(block.duration_hours().unwrap(), 1.5);

        let block = TimeBlock::new("Work", "09:00", "17:00", "#4F46E5");
        assert_eq!(block.duration_hours().unwrap(), 8.0);
    }

    #[test]
    fn test_unparseable_time_is_a_typed_error() {
        let block = TimeBlock::new("Work", "nine", "11:00", "#4F46E5");
        assert_eq!(block.duration().unwrap_err(), BlockError::InvalidTimeFormat("nine".to_string()));

        let block = TimeBlock::new("Work", "09:00", "11h00", "#4F46E5");
        assert!(matches!(block.duration().unwrap_err(), BlockError::InvalidTimeFormat(_)));
    }

    #[test]
    fn test_inverted_and_empty_ranges_are_rejected() {
        let block = TimeBlock::new("Work", "14:00", "13:00", "#4F46E5");
        assert!(matches!(block.duration().unwrap_err(), BlockError::InvalidTimeRange { .. }));

        let block = TimeBlock::new("Work", "14:00", "14:00", "#4F46E5");
        assert!(matches!(block.duration().unwrap_err(), BlockError::InvalidTimeRange { .. }));
    }

    #[test]
    fn test_time_values_are_trimmed_before_parsing() {
        let block = TimeBlock::new("Work", " 09:00 ", "11:00", "#4F46E5");
        assert_eq!(block.duration_hours().unwrap(), 2.0);
    }

    #[test]
    fn test_effective_progress() {
        let mut block = TimeBlock::new("Work", "09:00", "11:00", "#4F46E5");
        block.progress = 60;
        assert_eq!(block.effective_progress(), 60);

        // Completed blocks always report 100 regardless of stored progress.
        block.is_completed = true;
        block.progress = 10;
        assert_eq!(block.effective_progress(), 100);
    }

    #[test]
    fn test_serializes_with_camel_case_field_names() {
        let block = TimeBlock::new("Work", "09:00", "11:00", "#4F46E5");
        let json = serde_json::to_string(&block).unwrap();

        assert!(json.contains("\"startTime\":\"09:00\""));
        assert!(json.contains("\"endTime\":\"11:00\""));
        assert!(json.contains("\"isActive\":false"));
        assert!(json.contains("\"isCompleted\":false"));
    }

    #[test]
    fn test_deserializes_with_missing_state_fields() {
        // Records written before progress tracking existed carry only the
        // time range and category.
        let json = r#"{"id":"b-1","startTime":"09:00","endTime":"11:00","category":"Work","color":"blue"}"#;
        let block: TimeBlock = serde_json::from_str(json).unwrap();

        assert_eq!(block.id, "b-1");
        assert!(!block.is_active);
        assert!(!block.is_completed);
        assert_eq!(block.progress, 0);
    }
}
