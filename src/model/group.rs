use super::task::{Task, percentage};

/// A named, ordered bucket of tasks. The name lives in the owning
/// `TaskListState` map key, so it is not repeated here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    /// Tasks in user-controlled order
    pub tasks: Vec<Task>,
    /// Collapsed flag (UI hint only)
    pub collapsed: Option<bool>,
    /// In-progress "new task" text for this group
    pub draft: Option<String>,
}

impl Group {
    pub fn new() -> Self {
        Group::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Group {
            tasks,
            ..Group::default()
        }
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn find_task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn contains_task(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// (completed, total)
    pub fn progress(&self) -> (usize, usize) {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        (completed, self.tasks.len())
    }

    pub fn percentage(&self) -> u8 {
        let (completed, total) = self.progress();
        percentage(completed, total)
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_group() -> Group {
        let mut done = Task::new("b", "Done one");
        done.completed = true;
        Group::with_tasks(vec![Task::new("a", "Open one"), done, Task::new("c", "Open two")])
    }

    #[test]
    fn test_progress_counts() {
        let group = sample_group();
        assert_eq!(group.progress(), (1, 3));
        assert_eq!(group.percentage(), 33);
    }

    #[test]
    fn test_empty_group_progress() {
        let group = Group::new();
        assert_eq!(group.progress(), (0, 0));
        assert_eq!(group.percentage(), 0);
    }

    #[test]
    fn test_find_by_id() {
        let mut group = sample_group();
        assert_eq!(group.position("c"), Some(2));
        assert!(group.find_task("missing").is_none());
        group.find_task_mut("a").unwrap().description = "Edited".into();
        assert_eq!(group.tasks[0].description, "Edited");
    }
}
