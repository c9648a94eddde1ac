//! Display ordering for lists and todos.
//!
//! # Responsibility
//! - Order items open-first, then done, each group by title.
//!
//! # Invariants
//! - Title comparison lower-cases both sides, then compares code points.
//! - Sorting is stable: equal keys keep their input order.
//! - Inputs are never mutated; callers receive borrowed, reordered views.

use crate::model::todo::Todo;
use crate::model::todo_list::TodoList;

/// Anything that can be ordered by completion state and title.
pub trait Completable {
    fn title(&self) -> &str;
    fn is_done(&self) -> bool;
}

impl Completable for Todo {
    fn title(&self) -> &str {
        Todo::title(self)
    }

    fn is_done(&self) -> bool {
        Todo::is_done(self)
    }
}

impl Completable for TodoList {
    fn title(&self) -> &str {
        TodoList::title(self)
    }

    fn is_done(&self) -> bool {
        TodoList::is_done(self)
    }
}

/// Orders lists: not-done lists first, then done lists, each by title.
pub fn sort_todo_lists(lists: &[TodoList]) -> Vec<&TodoList> {
    sort_by_completion(lists)
}

/// Orders the todos of `list`: open todos first, then done todos, each by title.
pub fn sort_todos(list: &TodoList) -> Vec<&Todo> {
    sort_by_completion(list)
}

/// Partitions `items` by completion and stably sorts each group by title.
pub fn sort_by_completion<'a, T, I>(items: I) -> Vec<&'a T>
where
    T: Completable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let (mut done, mut open): (Vec<&T>, Vec<&T>) =
        items.into_iter().partition(|item| item.is_done());

    open.sort_by_cached_key(|item| title_key(item.title()));
    done.sort_by_cached_key(|item| title_key(item.title()));

    open.extend(done);
    open
}

fn title_key(title: &str) -> String {
    title.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::title_key;

    #[test]
    fn title_key_folds_case() {
        assert_eq!(title_key("Get Coffee"), "get coffee");
        assert!(title_key("Chat") < title_key("get coffee"));
    }
}
