use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDateTime};

use super::{lock, seed_tasks};
use crate::models::{Analytics, CreateTaskInput, Task, TaskQuery, UpdateTaskInput};

#[derive(Debug, Default)]
struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

/// Ordered, in-memory task list with a monotonic id counter.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    inner: Arc<Mutex<TaskList>>,
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl TaskStore {
    /// An empty store whose first task gets id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the seed tasks, created now.
    pub fn seeded() -> Self {
        Self::from_tasks(seed_tasks(now()))
    }

    /// The counter resumes past both the list length and the highest id.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .map(|t| t.id + 1)
            .max()
            .unwrap_or(0)
            .max(tasks.len() as u64);
        Self {
            inner: Arc::new(Mutex::new(TaskList { tasks, next_id })),
        }
    }

    pub fn len(&self) -> anyhow::Result<usize> {
        Ok(lock(&self.inner)?.tasks.len())
    }

    /// Filtered, optionally sorted copy of the list. Never mutates the store.
    pub fn list_tasks(&self, query: &TaskQuery) -> anyhow::Result<Vec<Task>> {
        let mut tasks: Vec<Task> = lock(&self.inner)?
            .tasks
            .iter()
            .filter(|t| query.matches(t))
            .cloned()
            .collect();
        if let Some(sort) = query.sort {
            sort.apply(&mut tasks);
        }
        Ok(tasks)
    }

    pub fn get_task(&self, id: u64) -> anyhow::Result<Option<Task>> {
        Ok(lock(&self.inner)?.tasks.iter().find(|t| t.id == id).cloned())
    }

    /// Takes the next id off the counter without creating a task. Used when an
    /// attachment must be stored under the id before the task exists.
    pub fn reserve_id(&self) -> anyhow::Result<u64> {
        let mut list = lock(&self.inner)?;
        let id = list.next_id;
        list.next_id += 1;
        Ok(id)
    }

    pub fn create_task(&self, input: CreateTaskInput, file: Option<String>) -> anyhow::Result<Task> {
        let id = self.reserve_id()?;
        self.insert_task(id, input, file)
    }

    /// Appends a task under an id obtained from [`TaskStore::reserve_id`].
    pub fn insert_task(
        &self,
        id: u64,
        input: CreateTaskInput,
        file: Option<String>,
    ) -> anyhow::Result<Task> {
        let task = Task {
            id,
            category: input.category,
            description: input.description,
            deadline: input.deadline,
            completed: false,
            notes: input.notes,
            file,
            created_at: now(),
            completed_at: None,
            archived: None,
        };

        lock(&self.inner)?.tasks.push(task.clone());
        tracing::debug!(id, "Task created");
        Ok(task)
    }

    /// Overwrites the editable fields. A `None` file keeps the current
    /// attachment. Returns `None` when no task has this id.
    pub fn update_task(
        &self,
        id: u64,
        input: UpdateTaskInput,
        file: Option<String>,
    ) -> anyhow::Result<Option<Task>> {
        let mut list = lock(&self.inner)?;
        let Some(task) = list.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        task.category = input.category;
        task.description = input.description;
        task.deadline = input.deadline;
        task.notes = input.notes;
        if file.is_some() {
            task.file = file;
        }
        Ok(Some(task.clone()))
    }

    /// Marks the task completed. Completing again refreshes `completed_at`.
    pub fn complete_task(&self, id: u64) -> anyhow::Result<Option<Task>> {
        let mut list = lock(&self.inner)?;
        let Some(task) = list.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        task.completed = true;
        task.completed_at = Some(now());
        Ok(Some(task.clone()))
    }

    pub fn delete_task(&self, id: u64) -> anyhow::Result<bool> {
        let mut list = lock(&self.inner)?;
        match list.tasks.iter().position(|t| t.id == id) {
            Some(idx) => {
                list.tasks.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn analytics(&self) -> anyhow::Result<Analytics> {
        self.analytics_at(now())
    }

    /// Analytics as seen at `now`, which fixes the day the streak ends on.
    pub fn analytics_at(&self, now: NaiveDateTime) -> anyhow::Result<Analytics> {
        Ok(Analytics::compute(&lock(&self.inner)?.tasks, now))
    }
}
