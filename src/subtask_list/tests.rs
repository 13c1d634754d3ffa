//! Sub-task List Tests
//!
//! Exercises list operations against a surface that records every effect.

#[cfg(test)]
mod tests {
    use crate::models::{TaskId, TaskItem};
    use crate::subtask_list::{
        BulkTogglePolicy, NullSurface, RenderSurface, SubTaskList, ValidationError,
        DEFAULT_ERROR_MESSAGE,
    };

    /// Effects seen by the surface, in call order
    #[derive(Debug, Clone, PartialEq)]
    enum Effect {
        Render(TaskId, String),
        Remove(TaskId),
        Completed(TaskId, bool),
        Clear,
        Note(Option<String>),
    }

    #[derive(Debug, Default)]
    struct RecordingSurface {
        effects: Vec<Effect>,
    }

    impl RenderSurface for RecordingSurface {
        fn render_row(&mut self, item: &TaskItem) {
            self.effects.push(Effect::Render(item.id, item.text.clone()));
        }
        fn remove_row(&mut self, id: TaskId) {
            self.effects.push(Effect::Remove(id));
        }
        fn set_row_completed(&mut self, id: TaskId, completed: bool) {
            self.effects.push(Effect::Completed(id, completed));
        }
        fn clear_rows(&mut self) {
            self.effects.push(Effect::Clear);
        }
        fn set_error_note(&mut self, note: Option<&str>) {
            self.effects.push(Effect::Note(note.map(str::to_string)));
        }
    }

    fn recording_list() -> SubTaskList<RecordingSurface> {
        SubTaskList::new(RecordingSurface::default())
    }

    fn completed_flags<R: RenderSurface>(list: &SubTaskList<R>) -> Vec<bool> {
        list.items().iter().map(|item| item.completed).collect()
    }

    #[test]
    fn test_add_appends_open_task() {
        let mut list = recording_list();

        let first = list.add("Buy milk").expect("valid text");
        let second = list.add("Pay bills").expect("valid text");

        assert_eq!(list.len(), 2);
        assert!(!first.completed);
        assert!(!second.completed);
        assert_eq!(list.items()[0].text, "Buy milk");
        assert_eq!(list.items()[1].text, "Pay bills");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_add_renders_one_row_and_clears_note() {
        let mut list = recording_list();
        let item = list.add("Buy milk").unwrap();

        assert_eq!(
            list.surface().effects,
            vec![
                Effect::Note(None),
                Effect::Render(item.id, "Buy milk".to_string()),
            ]
        );
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut list = recording_list();
        list.add("Keep me").unwrap();

        assert_eq!(list.add(""), Err(ValidationError::EmptyText));
        assert_eq!(list.add("   "), Err(ValidationError::EmptyText));
        assert_eq!(list.add("\t\n"), Err(ValidationError::EmptyText));
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].text, "Keep me");
    }

    #[test]
    fn test_add_rejection_shows_note() {
        let mut list = recording_list();
        let _ = list.add("  ");

        assert_eq!(
            list.surface().effects,
            vec![
                Effect::Note(None),
                Effect::Note(Some(DEFAULT_ERROR_MESSAGE.to_string())),
            ]
        );
        assert_eq!(ValidationError::EmptyText.to_string(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_custom_error_message() {
        let mut list =
            SubTaskList::new(RecordingSurface::default()).with_error_message("Type something first");
        let _ = list.add("");

        assert_eq!(
            list.surface().effects.last(),
            Some(&Effect::Note(Some("Type something first".to_string())))
        );
    }

    #[test]
    fn test_add_keeps_text_as_entered() {
        let mut list = recording_list();
        let item = list.add("  padded  ").unwrap();
        assert_eq!(item.text, "  padded  ");
    }

    #[test]
    fn test_toggle_completed_is_an_involution() {
        let mut list = recording_list();
        let item = list.add("Buy milk").unwrap();

        list.toggle_completed(item.id);
        assert!(list.get(item.id).unwrap().completed);

        list.toggle_completed(item.id);
        assert!(!list.get(item.id).unwrap().completed);

        let effects = &list.surface().effects;
        assert_eq!(effects[effects.len() - 2], Effect::Completed(item.id, true));
        assert_eq!(effects[effects.len() - 1], Effect::Completed(item.id, false));
    }

    #[test]
    fn test_toggle_completed_absent_is_noop() {
        let mut list = recording_list();
        list.add("Only").unwrap();
        let before = list.surface().effects.len();

        list.toggle_completed(TaskId(999));

        assert_eq!(completed_flags(&list), vec![false]);
        assert_eq!(list.surface().effects.len(), before);
    }

    #[test]
    fn test_delete_removes_only_that_task() {
        let mut list = recording_list();
        let a = list.add("A").unwrap();
        let b = list.add("B").unwrap();
        let c = list.add("C").unwrap();

        list.delete(b.id);

        let ids: Vec<TaskId> = list.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
        assert_eq!(list.surface().effects.last(), Some(&Effect::Remove(b.id)));
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut list = recording_list();
        let a = list.add("A").unwrap();
        list.delete(a.id);
        let before = list.surface().effects.len();

        list.delete(a.id);
        list.delete(TaskId(42));

        assert!(list.is_empty());
        assert_eq!(list.surface().effects.len(), before);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut list = recording_list();
        let a = list.add("A").unwrap();
        list.delete(a.id);
        let b = list.add("B").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_clear_all_empties_list() {
        let mut list = recording_list();
        list.clear_all();
        assert_eq!(list.len(), 0);

        list.add("A").unwrap();
        list.add("B").unwrap();
        list.toggle_all_completed();
        list.clear_all();

        assert_eq!(list.len(), 0);
        assert_eq!(list.surface().effects.last(), Some(&Effect::Clear));
    }

    #[test]
    fn test_bulk_toggle_parity_scenario() {
        let mut list = recording_list();

        list.add("Buy milk").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(completed_flags(&list), vec![false]);

        list.toggle_all_completed();
        assert_eq!(completed_flags(&list), vec![true]);

        list.toggle_all_completed();
        assert_eq!(completed_flags(&list), vec![false]);

        list.add("Pay bills").unwrap();
        list.toggle_all_completed();
        assert_eq!(completed_flags(&list), vec![true, true]);
        assert_eq!(list.bulk_toggle_count(), 3);
    }

    #[test]
    fn test_bulk_toggle_parity_ignores_manual_state() {
        let mut list = recording_list();
        let a = list.add("A").unwrap();
        list.add("B").unwrap();
        list.toggle_completed(a.id);

        // First call is odd: everything becomes completed
        list.toggle_all_completed();
        assert_eq!(completed_flags(&list), vec![true, true]);

        // Manually reopen one, second call still reopens all
        list.toggle_completed(a.id);
        list.toggle_all_completed();
        assert_eq!(completed_flags(&list), vec![false, false]);

        // Manually complete both, third call completes all (no visible change)
        for id in list.items().iter().map(|item| item.id).collect::<Vec<_>>() {
            list.toggle_completed(id);
        }
        list.toggle_all_completed();
        assert_eq!(completed_flags(&list), vec![true, true]);
    }

    #[test]
    fn test_bulk_toggle_emits_row_effects() {
        let mut list = recording_list();
        let a = list.add("A").unwrap();
        let b = list.add("B").unwrap();
        let before = list.surface().effects.len();

        list.toggle_all_completed();

        assert_eq!(
            list.surface().effects[before..],
            [Effect::Completed(a.id, true), Effect::Completed(b.id, true)]
        );
    }

    #[test]
    fn test_clear_all_keeps_bulk_counter() {
        let mut list = recording_list();
        list.add("A").unwrap();
        list.toggle_all_completed();
        list.clear_all();
        assert_eq!(list.bulk_toggle_count(), 1);

        // Counter is odd, so the next bulk toggle reopens
        list.add("B").unwrap();
        list.toggle_all_completed();
        assert_eq!(completed_flags(&list), vec![false]);
    }

    #[test]
    fn test_bulk_toggle_derived_follows_item_state() {
        let mut list = SubTaskList::with_policy(NullSurface, BulkTogglePolicy::Derived);
        let a = list.add("A").unwrap();
        list.add("B").unwrap();
        list.toggle_completed(a.id);

        list.toggle_all_completed();
        assert_eq!(completed_flags(&list), vec![true, true]);

        list.toggle_all_completed();
        assert_eq!(completed_flags(&list), vec![false, false]);

        list.toggle_completed(a.id);
        list.toggle_all_completed();
        assert_eq!(completed_flags(&list), vec![true, true]);

        // Fourth call: parity would reopen, derived completes because A is open
        list.toggle_completed(a.id);
        list.toggle_all_completed();
        assert_eq!(completed_flags(&list), vec![true, true]);
        assert_eq!(list.bulk_toggle_count(), 4);
    }

    #[test]
    fn test_completed_count_and_all_completed() {
        let mut list = SubTaskList::new(NullSurface);
        assert!(list.all_completed());
        assert_eq!(list.completed_count(), 0);

        let a = list.add("A").unwrap();
        list.add("B").unwrap();
        list.toggle_completed(a.id);

        assert_eq!(list.completed_count(), 1);
        assert!(!list.all_completed());
    }

    #[test]
    fn test_policy_serde_names() {
        let parsed: BulkTogglePolicy = serde_json::from_str("\"derived\"").unwrap();
        assert_eq!(parsed, BulkTogglePolicy::Derived);
        assert_eq!(
            serde_json::to_string(&BulkTogglePolicy::Parity).unwrap(),
            "\"parity\""
        );
    }
}
