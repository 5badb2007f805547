use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

use super::Task;

/// How far back the streak scan looks, counting today.
pub const STREAK_WINDOW_DAYS: u64 = 30;

pub const POINTS_PER_COMPLETION: u64 = 10;
pub const POINTS_PER_OVERDUE_COMPLETION: u64 = 5;
pub const POINTS_PER_NOTE: u64 = 1;

const DEADLINE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Summary computed fresh over the whole task list on every request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Analytics {
    pub total: usize,
    pub completed: usize,
    pub by_category: CategoryBreakdown,
    pub streak: u32,
    pub points: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct CategoryCounts {
    pub total: usize,
    pub completed: usize,
}

/// Per-category counts, in order of each category's first appearance.
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown(Vec<(String, CategoryCounts)>);

impl CategoryBreakdown {
    fn record(&mut self, task: &Task) {
        let idx = match self.0.iter().position(|(c, _)| *c == task.category) {
            Some(idx) => idx,
            None => {
                self.0.push((task.category.clone(), CategoryCounts::default()));
                self.0.len() - 1
            }
        };
        let counts = &mut self.0[idx].1;
        counts.total += 1;
        if task.completed {
            counts.completed += 1;
        }
    }

    pub fn get(&self, category: &str) -> Option<&CategoryCounts> {
        self.0.iter().find(|(c, _)| c == category).map(|(_, counts)| counts)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(c, _)| c.as_str())
    }
}

impl Serialize for CategoryBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(c, counts)| (c, counts)))
    }
}

impl Analytics {
    pub fn compute(tasks: &[Task], now: NaiveDateTime) -> Self {
        let mut by_category = CategoryBreakdown::default();
        for task in tasks {
            by_category.record(task);
        }

        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
            by_category,
            streak: streak(tasks, now.date()),
            points: points(tasks),
        }
    }
}

/// Consecutive days ending `today` with at least one completion.
fn streak(tasks: &[Task], today: NaiveDate) -> u32 {
    let completion_days: Vec<NaiveDate> = tasks
        .iter()
        .filter(|t| t.completed)
        .filter_map(|t| t.completed_at.map(|at| at.date()))
        .collect();

    let mut streak = 0;
    for offset in 0..STREAK_WINDOW_DAYS {
        let Some(day) = today.checked_sub_days(Days::new(offset)) else {
            break;
        };
        if !completion_days.contains(&day) {
            break;
        }
        streak += 1;
    }
    streak
}

fn points(tasks: &[Task]) -> u64 {
    tasks
        .iter()
        .map(|task| {
            let mut score = 0;
            if task.completed {
                score += POINTS_PER_COMPLETION;
                if is_overdue_completion(task) {
                    score += POINTS_PER_OVERDUE_COMPLETION;
                }
            }
            if task.has_notes() {
                score += POINTS_PER_NOTE;
            }
            score
        })
        .sum()
}

fn is_overdue_completion(task: &Task) -> bool {
    let (Some(completed_at), Some(deadline)) = (task.completed_at, task.deadline.as_deref()) else {
        return false;
    };
    parse_deadline(deadline).is_some_and(|deadline| completed_at > deadline)
}

/// Parses a deadline as submitted by clients. A bare date counts as midnight.
pub fn parse_deadline(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    DEADLINE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
