use chrono::NaiveDateTime;

use crate::models::{Category, Item, Task};

/// The wellness tasks a fresh task store starts with. Every seed shares
/// `now` as its creation time; the barefoot walk is already completed.
pub fn seed_tasks(now: NaiveDateTime) -> Vec<Task> {
    let seeds: [(&str, &str, &str, bool, &str); 10] = [
        ("mental", "Meditate for 10 minutes under a tree", "2025-07-20T09:00:00", false, "Try to focus on breathing."),
        ("physical", "Do 25 push-ups and 30 squats", "2025-07-19T18:00:00", false, "Warm up first."),
        ("nutrition", "Make a smoothie with 5 different greens", "2025-07-21T08:00:00", false, "Spinach, kale, mint, parsley, celery."),
        ("experimental", "Try cold shower challenge for 7 days", "2025-07-25T07:00:00", false, "Start with 30 seconds."),
        ("nature", "Take a barefoot walk on grass", "2025-07-19T07:00:00", true, "Felt refreshing!"),
        ("adventurous", "Try goat yoga in a nearby farm", "2025-07-22T10:00:00", false, "Book a slot online."),
        ("mental", "Write a gratitude journal entry", "2025-07-19T21:00:00", false, "Reflect on the day."),
        ("physical", "Go for a sunrise jog in the neighborhood", "2025-07-20T06:00:00", false, "Set alarm for 5:30am."),
        ("nutrition", "Try going sugar-free for a day", "2025-07-23T00:00:00", false, "Check all food labels."),
        ("experimental", "Track sleep with a wearable and adjust routine", "2025-07-24T23:00:00", false, "Analyze sleep data."),
    ];

    seeds
        .into_iter()
        .zip(0u64..)
        .map(|((category, description, deadline, completed, notes), id)| Task {
            id,
            category: category.to_string(),
            description: description.to_string(),
            deadline: Some(deadline.to_string()),
            completed,
            notes: Some(notes.to_string()),
            file: None,
            created_at: now,
            completed_at: completed.then_some(now),
            archived: None,
        })
        .collect()
}

/// The categorized items a fresh item store starts with.
pub fn seed_items() -> Vec<Item> {
    use Category::*;

    vec![
        Item::new(Mental, "Meditate for 10 minutes"),
        Item::new(Physical, "Walk 8,000 steps"),
        Item::new(Nutrition, "Drink 8 glasses of water"),
        Item::new(Nature, "Spend 20 minutes in a park"),
        Item::new(Nutrition, "Eat a serving of leafy greens"),
        Item::new(Experimental, "Try a 5-minute cold shower"),
        Item::new(Adventurous, "Hike a trail you have never walked"),
        Item::new(Nutrition, "Cook a meal from scratch"),
        Item::new(Mental, "Write three things you are grateful for"),
        Item::new(Physical, "Stretch for 15 minutes before bed"),
        Item::new(Nutrition, "Swap a snack for fresh fruit"),
        Item::new(Nature, "Watch the sunrise outside"),
        Item::new(Adventurous, "Sign up for a climbing class"),
        Item::new(Nutrition, "Skip added sugar for a day"),
    ]
}
