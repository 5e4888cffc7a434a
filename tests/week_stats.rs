#[cfg(test)]
mod tests {
    use blokk::libs::block::TimeBlock;
    use blokk::libs::week::{compute_stats, summary_text, DAYS_PER_WEEK};

    fn block(category: &str, start: &str, end: &str, completed: bool) -> TimeBlock {
        let mut block = TimeBlock::new(category, start, end, "#4F46E5");
        block.is_completed = completed;
        block
    }

    #[test]
    fn test_empty_collection() {
        let stats = compute_stats(&[]);

        assert_eq!(stats.total_blocks, 0);
        assert_eq!(stats.completed_blocks, 0);
        assert_eq!(stats.total_hours, 0.0);
        assert!(stats.category_hours.is_empty());
        // Completion rate is defined as 0, not a division error.
        assert_eq!(stats.completion_rate(), 0.0);
    }

    #[test]
    fn test_totals_carry_weekly_factor() {
        let blocks = vec![
            block("Work", "09:00", "11:00", false),
            block("Work", "13:00", "15:00", false),
            block("Rest", "20:00", "21:00", false),
        ];

        let stats = compute_stats(&blocks);
        assert_eq!(stats.total_blocks, 3 * DAYS_PER_WEEK);
        assert_eq!(stats.total_hours, (2.0 + 2.0 + 1.0) * 7.0);
    }

    #[test]
    fn test_worked_example() {
        // Two-block template: a completed 2h Work block and an open 1h Rest block.
        let blocks = vec![block("Work", "09:00", "11:00", true), block("Rest", "13:00", "14:00", false)];

        let stats = compute_stats(&blocks);
        assert_eq!(stats.total_blocks, 14);
        assert_eq!(stats.completed_blocks, 7);
        assert_eq!(stats.total_hours, 21.0);
        assert_eq!(stats.completion_rate(), 50.0);
        assert_eq!(stats.category_hours.get("Work"), Some(&14.0));
        assert_eq!(stats.category_hours.get("Rest"), Some(&7.0));
    }

    #[test]
    fn test_category_grouping_sums_within_category() {
        let blocks = vec![
            block("Work", "09:00", "10:30", false),
            block("Work", "11:00", "12:00", false),
            block("Study", "13:00", "14:00", false),
        ];

        let stats = compute_stats(&blocks);
        assert_eq!(stats.category_hours.get("Work"), Some(&(2.5 * 7.0)));
        assert_eq!(stats.category_hours.get("Study"), Some(&7.0));
        assert_eq!(stats.category_hours.len(), 2);
    }

    #[test]
    fn test_inverted_range_excluded_from_hours() {
        let blocks = vec![
            block("Work", "09:00", "11:00", false),
            // Inverted range: must contribute zero hours without corrupting
            // the totals of the valid block.
            block("Broken", "14:00", "13:00", false),
        ];

        let stats = compute_stats(&blocks);
        assert_eq!(stats.total_hours, 14.0);
        assert!(!stats.category_hours.contains_key("Broken"));
        // The record still counts toward the planned block total.
        assert_eq!(stats.total_blocks, 2 * DAYS_PER_WEEK);
    }

    #[test]
    fn test_unparseable_time_excluded_from_hours() {
        let blocks = vec![block("Work", "09:00", "11:00", false), block("Bad", "9 o'clock", "11:00", false)];

        let stats = compute_stats(&blocks);
        assert_eq!(stats.total_hours, 14.0);
        assert!(!stats.category_hours.contains_key("Bad"));
    }

    #[test]
    fn test_completed_malformed_block_still_counts_as_completed() {
        let blocks = vec![block("Broken", "14:00", "13:00", true)];

        let stats = compute_stats(&blocks);
        assert_eq!(stats.completed_blocks, DAYS_PER_WEEK);
        assert_eq!(stats.total_hours, 0.0);
        assert_eq!(stats.completion_rate(), 100.0);
    }

    #[test]
    fn test_compute_stats_is_idempotent() {
        let blocks = vec![block("Work", "09:00", "11:00", true), block("Rest", "13:00", "14:00", false)];

        let first = compute_stats(&blocks);
        let second = compute_stats(&blocks);
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_text_rounds_and_orders() {
        let blocks = vec![
            block("Work", "09:00", "11:20", true),  // 2h20 -> 16.33h weekly
            block("Rest", "13:00", "14:00", false), // 7h weekly
        ];

        let stats = compute_stats(&blocks);
        let text = summary_text(&stats);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Weekly Summary");
        assert_eq!(lines[1], "Planned: 23h across 14 blocks");
        assert_eq!(lines[2], "Completed: 50%");
        // Categories render in stable sorted order.
        assert_eq!(lines[3], "Rest: 7h");
        assert_eq!(lines[4], "Work: 16h");
    }

    #[test]
    fn test_summary_text_empty_collection() {
        let text = summary_text(&compute_stats(&[]));

        assert!(text.contains("Planned: 0h across 0 blocks"));
        assert!(text.contains("Completed: 0%"));
    }
}
