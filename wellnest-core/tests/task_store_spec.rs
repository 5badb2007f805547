use speculate2::speculate;

speculate! {
    use chrono::{Duration, Local};
    use wellnest_core::models::*;
    use wellnest_core::store::TaskStore;

    fn input(category: &str, description: &str) -> CreateTaskInput {
        CreateTaskInput {
            category: category.to_string(),
            description: description.to_string(),
            deadline: None,
            notes: None,
        }
    }

    fn query(show: ShowFilter) -> TaskQuery {
        TaskQuery { show, ..TaskQuery::default() }
    }

    describe "seeded store" {
        it "starts with ten tasks and continues the counter at ten" {
            let store = TaskStore::seeded();
            assert_eq!(store.len().unwrap(), 10);

            let task = store.create_task(input("mental", "Breathe"), None).unwrap();
            assert_eq!(task.id, 10);
            assert!(!task.completed);
            assert!(task.completed_at.is_none());
        }

        it "lists only open tasks by default" {
            let store = TaskStore::seeded();
            let active = store.list_tasks(&TaskQuery::default()).unwrap();
            assert_eq!(active.len(), 9);
            assert!(active.iter().all(|t| !t.completed));
        }

        it "starts with a one day streak from the completed seed" {
            let store = TaskStore::seeded();
            let analytics = store.analytics().unwrap();
            assert_eq!(analytics.completed, 1);
            assert_eq!(analytics.streak, 1);
            // one completion, past its deadline, plus ten notes
            assert_eq!(analytics.points, 10 + 5 + 10);
        }
    }

    describe "create_task" {
        it "assigns strictly increasing ids and grows the list by one" {
            let store = TaskStore::new();
            let mut last = None;
            for i in 0..5 {
                let before = store.len().unwrap();
                let task = store.create_task(input("physical", &format!("Task {}", i)), None).unwrap();
                assert_eq!(store.len().unwrap(), before + 1);
                if let Some(last) = last {
                    assert!(task.id > last);
                }
                last = Some(task.id);
            }
        }

        it "never reuses the id of a deleted task" {
            let store = TaskStore::new();
            let first = store.create_task(input("mental", "One"), None).unwrap();
            assert!(store.delete_task(first.id).unwrap());

            let second = store.create_task(input("mental", "Two"), None).unwrap();
            assert!(second.id > first.id);
        }

        it "burns reserved ids that never become tasks" {
            let store = TaskStore::new();
            let reserved = store.reserve_id().unwrap();
            let task = store.create_task(input("nature", "Hug a tree"), None).unwrap();
            assert_eq!(task.id, reserved + 1);
            assert!(store.get_task(reserved).unwrap().is_none());
        }

        it "accepts any category" {
            let store = TaskStore::new();
            let task = store.create_task(input("underwater basket weaving", "Try it"), None).unwrap();
            assert_eq!(task.category, "underwater basket weaving");
        }
    }

    describe "update_task" {
        it "overwrites fields but keeps the attachment when none is given" {
            let store = TaskStore::new();
            let task = store
                .create_task(input("mental", "Journal"), Some("uploads/0_page.png".into()))
                .unwrap();

            let updated = store
                .update_task(task.id, UpdateTaskInput {
                    category: "nature".into(),
                    description: "Journal outside".into(),
                    deadline: Some("2025-08-01T09:00".into()),
                    notes: None,
                }, None)
                .unwrap()
                .unwrap();

            assert_eq!(updated.category, "nature");
            assert_eq!(updated.description, "Journal outside");
            assert_eq!(updated.deadline.as_deref(), Some("2025-08-01T09:00"));
            assert_eq!(updated.file.as_deref(), Some("uploads/0_page.png"));
        }

        it "does not touch completion state" {
            let store = TaskStore::new();
            let task = store.create_task(input("mental", "Journal"), None).unwrap();
            let done = store.complete_task(task.id).unwrap().unwrap();

            let updated = store
                .update_task(task.id, UpdateTaskInput {
                    category: "mental".into(),
                    description: "Journal again".into(),
                    deadline: None,
                    notes: None,
                }, Some("uploads/0_new.txt".into()))
                .unwrap()
                .unwrap();

            assert!(updated.completed);
            assert_eq!(updated.completed_at, done.completed_at);
            assert_eq!(updated.file.as_deref(), Some("uploads/0_new.txt"));
        }

        it "returns none for an unknown id" {
            let store = TaskStore::new();
            let result = store.update_task(42, UpdateTaskInput {
                category: "mental".into(),
                description: "Ghost".into(),
                deadline: None,
                notes: None,
            }, None).unwrap();
            assert!(result.is_none());
        }
    }

    describe "complete_task" {
        it "sets completed and stamps a time after creation" {
            let store = TaskStore::new();
            let task = store.create_task(input("mental", "Breathe"), None).unwrap();
            let done = store.complete_task(task.id).unwrap().unwrap();

            assert!(done.completed);
            assert!(done.completed_at.unwrap() >= task.created_at);
        }

        it "refreshes completed_at when called again" {
            let store = TaskStore::new();
            let task = store.create_task(input("mental", "Breathe"), None).unwrap();
            let first = store.complete_task(task.id).unwrap().unwrap();
            let second = store.complete_task(task.id).unwrap().unwrap();

            assert!(second.completed);
            assert!(second.completed_at.unwrap() >= first.completed_at.unwrap());
        }

        it "returns none for an unknown id" {
            let store = TaskStore::new();
            assert!(store.complete_task(7).unwrap().is_none());
        }
    }

    describe "delete_task" {
        it "removes by id and keeps the order of the rest" {
            let store = TaskStore::new();
            let a = store.create_task(input("mental", "A"), None).unwrap();
            let b = store.create_task(input("mental", "B"), None).unwrap();
            let c = store.create_task(input("mental", "C"), None).unwrap();

            assert!(store.delete_task(b.id).unwrap());
            assert!(!store.delete_task(b.id).unwrap());

            let ids: Vec<u64> = store.list_tasks(&TaskQuery::default()).unwrap().iter().map(|t| t.id).collect();
            assert_eq!(ids, vec![a.id, c.id]);
        }
    }

    describe "list_tasks" {
        it "matches search against description or notes ignoring case" {
            let store = TaskStore::new();
            store.create_task(input("mental", "Morning YOGA"), None).unwrap();
            store.create_task(CreateTaskInput {
                notes: Some("bring the yoga mat".into()),
                ..input("physical", "Stretch")
            }, None).unwrap();
            store.create_task(input("physical", "Run"), None).unwrap();

            let found = store.list_tasks(&TaskQuery {
                search: Some("Yoga".into()),
                ..TaskQuery::default()
            }).unwrap();
            assert_eq!(found.len(), 2);
        }

        it "filters category by exact match" {
            let store = TaskStore::seeded();
            let found = store.list_tasks(&TaskQuery {
                category: Some("nutrition".into()),
                ..TaskQuery::default()
            }).unwrap();
            assert_eq!(found.len(), 2);
            assert!(found.iter().all(|t| t.category == "nutrition"));

            let none = store.list_tasks(&TaskQuery {
                category: Some("Nutrition".into()),
                ..TaskQuery::default()
            }).unwrap();
            assert!(none.is_empty());
        }

        it "shows completed tasks regardless of archived" {
            let mut tasks = wellnest_core::store::seed_tasks(Local::now().naive_local());
            tasks[4].archived = Some(true);
            tasks[0].archived = Some(true);
            let store = TaskStore::from_tasks(tasks);

            let completed = store.list_tasks(&query(ShowFilter::Completed)).unwrap();
            assert_eq!(completed.len(), 1);
            assert_eq!(completed[0].id, 4);

            let archived = store.list_tasks(&query(ShowFilter::Archived)).unwrap();
            let ids: Vec<u64> = archived.iter().map(|t| t.id).collect();
            assert_eq!(ids, vec![0, 4]);

            let active = store.list_tasks(&query(ShowFilter::Active)).unwrap();
            assert_eq!(active.len(), 8);
        }

        it "sorts by deadline with missing deadlines first" {
            let store = TaskStore::new();
            store.create_task(CreateTaskInput { deadline: Some("2025-07-22T10:00:00".into()), ..input("mental", "Late") }, None).unwrap();
            store.create_task(input("mental", "Whenever"), None).unwrap();
            store.create_task(CreateTaskInput { deadline: Some("2025-07-19T07:00:00".into()), ..input("mental", "Early") }, None).unwrap();

            let sorted = store.list_tasks(&TaskQuery { sort: Some(SortOrder::Date), ..TaskQuery::default() }).unwrap();
            let names: Vec<&str> = sorted.iter().map(|t| t.description.as_str()).collect();
            assert_eq!(names, vec!["Whenever", "Early", "Late"]);
        }

        it "sorts by category and keeps insertion order for ties" {
            let store = TaskStore::seeded();
            let sorted = store.list_tasks(&TaskQuery { sort: Some(SortOrder::Category), ..TaskQuery::default() }).unwrap();
            let ids: Vec<u64> = sorted.iter().map(|t| t.id).collect();
            assert_eq!(ids, vec![5, 3, 9, 0, 6, 2, 8, 1, 7]);
        }

        it "puts completed tasks first when sorting by status" {
            let store = TaskStore::new();
            for name in ["A", "B", "C", "D"] {
                store.create_task(input("mental", name), None).unwrap();
            }
            store.complete_task(2).unwrap();
            store.complete_task(3).unwrap();

            let mut sorted = store.list_tasks(&TaskQuery { sort: Some(SortOrder::Status), ..query(ShowFilter::Completed) }).unwrap();
            assert_eq!(sorted.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 3]);

            // status sort over a mixed slice
            let mut all: Vec<Task> = store.list_tasks(&query(ShowFilter::Active)).unwrap();
            all.append(&mut sorted);
            all.sort_by_key(|t| t.id);
            SortOrder::Status.apply(&mut all);
            assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 3, 0, 1]);
        }
    }

    describe "analytics" {
        it "recounts completions on every call" {
            let store = TaskStore::new();
            for name in ["A", "B", "C"] {
                store.create_task(input("mental", name), None).unwrap();
            }
            assert_eq!(store.analytics().unwrap().completed, 0);
            assert_eq!(store.analytics().unwrap().streak, 0);

            store.complete_task(1).unwrap();
            let analytics = store.analytics().unwrap();
            assert_eq!(analytics.completed, 1);
            assert!(analytics.streak >= 1);

            store.delete_task(1).unwrap();
            assert_eq!(store.analytics().unwrap().completed, 0);
        }

        it "ends the streak on the day analytics is viewed" {
            let store = TaskStore::new();
            store.create_task(input("mental", "A"), None).unwrap();
            store.complete_task(0).unwrap();

            let tomorrow = Local::now().naive_local() + Duration::days(1);
            assert_eq!(store.analytics_at(tomorrow).unwrap().streak, 0);
        }
    }
}
