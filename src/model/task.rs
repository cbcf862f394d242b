use serde::{Deserialize, Serialize};

/// A single task inside a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier, unique within the owning group
    pub id: String,
    /// Free-form task text
    pub description: String,
    /// Completion flag (absent in a payload means open)
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new open task
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            description: description.into(),
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Rounded completion percentage; an empty collection is 0%.
pub fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_completed_defaults_open() {
        let task: Task = serde_json::from_str(r#"{"id":"a","description":"x"}"#).unwrap();
        assert!(!task.completed);
    }

    #[test]
    fn test_toggle_flips() {
        let mut task = Task::new("a", "x");
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(4, 4), 100);
    }
}
