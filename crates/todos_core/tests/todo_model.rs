use todos_core::{next_id, Todo};

#[test]
fn new_todo_is_open_and_keeps_title_verbatim() {
    for title in ["Buy milk", "  padded  ", "", "ÜNICODE ✓"] {
        let todo = Todo::new(title);
        assert!(!todo.is_done());
        assert_eq!(todo.title(), title);
    }
}

#[test]
fn done_then_undone_matches_fresh_state() {
    let fresh = Todo::new("Walk dog");
    let mut todo = Todo::new("Walk dog");

    todo.mark_done();
    assert!(todo.is_done());
    todo.mark_undone();
    assert_eq!(todo.is_done(), fresh.is_done());
}

#[test]
fn marking_is_idempotent() {
    let mut todo = Todo::new("Water plants");
    todo.mark_done();
    todo.mark_done();
    assert!(todo.is_done());

    todo.mark_undone();
    todo.mark_undone();
    assert!(!todo.is_done());
}

#[test]
fn set_title_replaces_without_validation() {
    let mut todo = Todo::new("draft");
    let id = todo.id();

    todo.set_title("");
    assert_eq!(todo.title(), "");
    assert_eq!(todo.id(), id);
}

#[test]
fn ids_come_from_shared_monotonic_counter() {
    let before = next_id();
    let todo = Todo::new("a");
    let after = next_id();

    assert!(todo.id() > before);
    assert!(after > todo.id());
}

#[test]
fn display_marks_done_state() {
    let mut todo = Todo::new("Chat");
    assert_eq!(format!("{todo}"), "[ ] Chat");
    todo.mark_done();
    assert_eq!(format!("{todo}"), "[X] Chat");
}
