#[cfg(test)]
mod tests {
    use blokk::libs::block::TimeBlock;
    use blokk::libs::week::duplicate_for_next_week;
    use std::collections::HashSet;

    fn template() -> Vec<TimeBlock> {
        let mut work = TimeBlock::new("Work", "09:00", "11:00", "#4F46E5");
        work.is_completed = true;
        work.progress = 100;
        let mut rest = TimeBlock::new("Rest", "13:00", "14:00", "#10B981");
        rest.is_active = true;
        rest.progress = 40;
        vec![work, rest]
    }

    #[test]
    fn test_copy_preserves_count() {
        let blocks = template();
        let copies = duplicate_for_next_week(&blocks);

        assert_eq!(copies.len(), blocks.len());
    }

    #[test]
    fn test_copy_resets_state() {
        for copy in duplicate_for_next_week(&template()) {
            assert!(!copy.is_active);
            assert!(!copy.is_completed);
            assert_eq!(copy.progress, 0);
        }
    }

    #[test]
    fn test_copy_generates_fresh_unique_ids() {
        let blocks = template();
        let copies = duplicate_for_next_week(&blocks);

        let original_ids: HashSet<&str> = blocks.iter().map(|block| block.id.as_str()).collect();
        let copy_ids: HashSet<&str> = copies.iter().map(|block| block.id.as_str()).collect();

        assert_eq!(copy_ids.len(), copies.len());
        assert!(copy_ids.is_disjoint(&original_ids));
    }

    #[test]
    fn test_copy_keeps_other_fields_verbatim() {
        let blocks = template();
        let copies = duplicate_for_next_week(&blocks);

        for (original, copy) in blocks.iter().zip(&copies) {
            assert_eq!(copy.category, original.category);
            assert_eq!(copy.start_time, original.start_time);
            assert_eq!(copy.end_time, original.end_time);
            assert_eq!(copy.color, original.color);
        }
    }

    #[test]
    fn test_copy_does_not_mutate_input() {
        let blocks = template();
        let snapshot = blocks.clone();
        let _ = duplicate_for_next_week(&blocks);

        assert_eq!(blocks, snapshot);
    }

    #[test]
    fn test_copy_of_empty_template() {
        assert!(duplicate_for_next_week(&[]).is_empty());
    }
}
