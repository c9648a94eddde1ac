//! Starter lists for sessions that have no stored state yet.

use crate::model::todo::Todo;
use crate::model::todo_list::TodoList;

/// Returns freshly minted starter lists.
pub(crate) fn seed_lists() -> Vec<TodoList> {
    vec![
        seeded_list(
            "Work Todos",
            &["Get coffee", "Chat with colleagues", "meeting"],
            &["Get coffee", "Chat with colleagues"],
        ),
        seeded_list(
            "Home Todos",
            &["Feed the cats", "Go to bed", "Buy milk", "Study for Launch School"],
            &["Feed the cats", "Go to bed", "Buy milk", "Study for Launch School"],
        ),
        seeded_list("Additional Todos", &["Feed the cats"], &["Feed the cats"]),
    ]
}

fn seeded_list(title: &str, todos: &[&str], done: &[&str]) -> TodoList {
    let todos = todos.iter().map(|name| Todo::new(*name)).collect();
    let mut list = TodoList::from_distinct(title, todos);
    for title in done {
        list.mark_done_by_title(title);
    }
    list
}
