use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schedule {
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

/// Execution priority; tasks with a lower value run first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Highest = 0,
    High = 3,
    Normal = 5,
    Low = 7,
    Lowest = 10,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub plugin: String,
    pub method: String,
    pub schedule: Schedule,
    pub priority: TaskPriority,
}

impl ScheduledTask {
    #[must_use]
    pub fn new(
        plugin: impl Into<String>,
        method: impl Into<String>,
        schedule: Schedule,
        priority: TaskPriority,
    ) -> Self {
        Self {
            plugin: plugin.into(),
            method: method.into(),
            schedule,
            priority,
        }
    }

    /// Identifier of the form `Plugin.method`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}.{}", self.plugin, self.method)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRegistry {
    tasks: Vec<ScheduledTask>,
}

impl TaskRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: ScheduledTask) {
        self.tasks.push(task);
    }

    #[must_use]
    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in execution order: by priority, then registration order.
    #[must_use]
    pub fn in_execution_order(&self) -> Vec<&ScheduledTask> {
        let mut ordered: Vec<&ScheduledTask> = self.tasks.iter().collect();
        ordered.sort_by_key(|task| task.priority);
        ordered
    }
}
