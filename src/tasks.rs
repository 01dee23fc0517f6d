//! Task List Logic
//!
//! Pure helpers for applying fetched pages and reconciling the in-memory
//! list after acknowledged mutations.

use crate::models::{Task, TaskListResponse};

/// Apply a fetched page payload against the requested page and limit.
///
/// Returns `(tasks, total, pages, page)` with the list truncated to `limit`,
/// `pages` at least 1 and `page` clamped into `1..=pages`.
pub fn apply_page(
    response: TaskListResponse,
    requested_page: u32,
    limit: u32,
) -> (Vec<Task>, u32, u32, u32) {
    let mut tasks = response.data;
    tasks.truncate(limit as usize);
    let pages = response.pages.max(1);
    let page = requested_page.clamp(1, pages);
    (tasks, response.total, pages, page)
}

/// Rename a task in place, if present.
pub fn rename_in_place(tasks: &mut [Task], id: u32, name: &str) {
    if let Some(task) = tasks.iter_mut().find(|task| task.id == id) {
        task.name = name.to_string();
    }
}

/// Set a task's completion flag in place, if present.
pub fn set_done(tasks: &mut [Task], id: u32, done: bool) {
    if let Some(task) = tasks.iter_mut().find(|task| task.id == id) {
        task.done = done;
    }
}

/// Remove a task from the list by id.
pub fn remove(tasks: &mut Vec<Task>, id: u32) {
    tasks.retain(|task| task.id != id);
}

/// Count the not-yet-done tasks on the current page.
pub fn pending_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.done).count()
}

/// Effective search value if the trimmed input differs from the current one.
pub fn search_changed(current: &str, input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed == current {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Single-slot edit session: at most one task is in edit mode at a time.
///
/// Starting an edit on another task silently discards the previous
/// in-progress text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSlot {
    id: Option<u32>,
    name: String,
}

impl EditSlot {
    /// Enter edit mode for `task`, replacing any other in-progress edit.
    pub fn start(&mut self, task: &Task) {
        self.id = Some(task.id);
        self.name = task.name.clone();
    }

    /// Leave edit mode.
    pub fn clear(&mut self) {
        self.id = None;
        self.name.clear();
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, name: &str, done: bool) -> Task {
        Task {
            id,
            name: name.to_string(),
            done,
        }
    }

    fn make_page(count: u32, total: u32, pages: u32) -> TaskListResponse {
        TaskListResponse {
            data: (1..=count).map(|id| make_task(id, "task", false)).collect(),
            total,
            page: 1,
            pages,
        }
    }

    #[test]
    fn test_apply_page_initial_load() {
        // 23 tasks on the server, limit 10: first page holds 10 of 23
        let (tasks, total, pages, page) = apply_page(make_page(10, 23, 3), 1, 10);
        assert_eq!(tasks.len(), 10);
        assert_eq!(total, 23);
        assert_eq!(pages, 3);
        assert_eq!(page, 1);
    }

    #[test]
    fn test_apply_page_truncates_to_limit() {
        let (tasks, _, _, _) = apply_page(make_page(12, 12, 1), 1, 10);
        assert_eq!(tasks.len(), 10);
    }

    #[test]
    fn test_apply_page_clamps_page_and_pages() {
        // Server reports zero pages: keep a sane single empty page
        let (tasks, _, pages, page) = apply_page(make_page(0, 0, 0), 5, 10);
        assert!(tasks.is_empty());
        assert_eq!(pages, 1);
        assert_eq!(page, 1);

        // Requested page past the end clamps back to the last page
        let (_, _, pages, page) = apply_page(make_page(3, 23, 3), 9, 10);
        assert_eq!(pages, 3);
        assert_eq!(page, 3);
    }

    #[test]
    fn test_remove_without_refetch() {
        let (mut tasks, total, _, _) = apply_page(make_page(10, 23, 3), 1, 10);
        remove(&mut tasks, 4);
        assert_eq!(tasks.len(), 9);
        // Total stays stale until the next fetch
        assert_eq!(total, 23);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut tasks = vec![make_task(1, "a", false)];
        remove(&mut tasks, 99);
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_set_done_flips_only_matching() {
        let mut tasks: Vec<Task> = (1..=6).map(|id| make_task(id, "task", false)).collect();
        set_done(&mut tasks, 5, true);
        for task in &tasks {
            assert_eq!(task.done, task.id == 5);
        }
    }

    #[test]
    fn test_rename_in_place() {
        let mut tasks = vec![make_task(1, "old", false), make_task(2, "other", true)];
        rename_in_place(&mut tasks, 1, "new");
        assert_eq!(tasks[0].name, "new");
        assert_eq!(tasks[1].name, "other");
    }

    #[test]
    fn test_pending_count() {
        let tasks = vec![
            make_task(1, "a", false),
            make_task(2, "b", true),
            make_task(3, "c", false),
        ];
        assert_eq!(pending_count(&tasks), 2);
    }

    #[test]
    fn test_search_changed() {
        assert_eq!(search_changed("", "  foo "), Some("foo".to_string()));
        assert_eq!(search_changed("foo", "foo"), None);
        assert_eq!(search_changed("foo", "  foo  "), None);
        assert_eq!(search_changed("foo", ""), Some(String::new()));
    }

    #[test]
    fn test_edit_slot_is_single_slot() {
        let mut slot = EditSlot::default();
        assert_eq!(slot.id(), None);

        let a = make_task(1, "first", false);
        let b = make_task(2, "second", false);

        slot.start(&a);
        slot.set_name("first (edited)".to_string());
        assert_eq!(slot.id(), Some(1));

        // Starting on another task drops the in-progress text
        slot.start(&b);
        assert_eq!(slot.id(), Some(2));
        assert_eq!(slot.name(), "second");

        slot.clear();
        assert_eq!(slot.id(), None);
        assert_eq!(slot.name(), "");
    }
}
