use todos_core::{sort_todo_lists, sort_todos, Todo, TodoList, TodoLists};

fn list_titled(title: &str, done: Option<bool>) -> TodoList {
    let mut list = TodoList::new(title);
    if let Some(done) = done {
        let mut todo = Todo::new("item");
        if done {
            todo.mark_done();
        }
        list.add(todo).unwrap();
    }
    list
}

#[test]
fn lists_sort_case_insensitively_and_stably() {
    let lists = vec![
        list_titled("b", None),
        list_titled("A", None),
        list_titled("a", None),
    ];
    let sorted: Vec<&str> = sort_todo_lists(&lists).into_iter().map(|l| l.title()).collect();
    assert_eq!(sorted, vec!["A", "a", "b"]);

    let swapped = vec![
        list_titled("b", None),
        list_titled("a", None),
        list_titled("A", None),
    ];
    let sorted: Vec<&str> = sort_todo_lists(&swapped).into_iter().map(|l| l.title()).collect();
    assert_eq!(sorted, vec!["a", "A", "b"]);
}

#[test]
fn done_lists_follow_open_lists() {
    let lists = vec![
        list_titled("Alpha", Some(true)),
        list_titled("zulu", Some(false)),
        list_titled("Empty", None),
        list_titled("beta", Some(true)),
    ];

    let sorted: Vec<&str> = sort_todo_lists(&lists).into_iter().map(|l| l.title()).collect();
    assert_eq!(sorted, vec!["Empty", "zulu", "Alpha", "beta"]);
}

#[test]
fn todos_sort_open_first_then_by_title() {
    let mut list = TodoList::new("Work Todos");
    list.add(Todo::new("Get coffee")).unwrap();
    list.add(Todo::new("Chat")).unwrap();
    list.add(Todo::new("meeting")).unwrap();
    list.mark_done_by_title("Get coffee");
    list.mark_done_by_title("Chat");

    let sorted: Vec<&str> = sort_todos(&list).into_iter().map(|t| t.title()).collect();
    assert_eq!(sorted, vec!["meeting", "Chat", "Get coffee"]);
}

#[test]
fn sorting_does_not_reorder_the_source() {
    let mut list = TodoList::new("l");
    list.add(Todo::new("b")).unwrap();
    list.add(Todo::new("a")).unwrap();
    let before = list.clone();

    let _ = sort_todos(&list);
    assert_eq!(list, before);
}

#[test]
fn seed_root_sorts_work_first() {
    let root = TodoLists::seed();
    let sorted: Vec<&str> = root.sorted().into_iter().map(|l| l.title()).collect();
    assert_eq!(sorted, vec!["Work Todos", "Additional Todos", "Home Todos"]);
}
