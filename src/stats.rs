//! Aggregate counters over the task list
//!
//! Statistics are always computed over the full list; list filters do not
//! apply to them.

use crate::models::{Statistics, Task};

/// Count total, active and completed tasks and the rounded completion rate
pub fn derive_statistics(tasks: &[Task]) -> Statistics {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let completion_rate = if total > 0 {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    } else {
        0
    };

    Statistics {
        total,
        active: total - completed,
        completed,
        completion_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskDraft;

    fn tasks(completed: &[bool]) -> Vec<Task> {
        completed
            .iter()
            .map(|&done| {
                let mut task = Task::from_draft(TaskDraft::new("t"));
                task.completed = done;
                task
            })
            .collect()
    }

    #[test]
    fn test_empty_list_has_zero_rate() {
        assert_eq!(derive_statistics(&[]), Statistics::default());
    }

    #[test]
    fn test_one_of_three_completed() {
        let stats = derive_statistics(&tasks(&[false, true, false]));
        assert_eq!(
            stats,
            Statistics {
                total: 3,
                active: 2,
                completed: 1,
                completion_rate: 33,
            }
        );
    }

    #[test]
    fn test_rounding() {
        assert_eq!(derive_statistics(&tasks(&[true, true, false])).completion_rate, 67);
        assert_eq!(derive_statistics(&tasks(&[true, false])).completion_rate, 50);

        let mut one_of_eight = vec![true];
        one_of_eight.extend([false; 7]);
        assert_eq!(derive_statistics(&tasks(&one_of_eight)).completion_rate, 13);

        assert_eq!(derive_statistics(&tasks(&[true; 4])).completion_rate, 100);
    }

    #[test]
    fn test_counts_are_consistent() {
        let patterns: [&[bool]; 5] = [
            &[],
            &[true],
            &[false, false],
            &[true, false, true, false, false],
            &[true, true, true, false, true, false, true],
        ];
        for pattern in patterns {
            let stats = derive_statistics(&tasks(pattern));
            assert_eq!(stats.active + stats.completed, stats.total);
            assert!(stats.completion_rate <= 100);
        }
    }
}
