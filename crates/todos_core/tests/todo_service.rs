use rusqlite::Connection;
use todos_core::db::open_db_in_memory;
use todos_core::{
    new_session_id, SqliteSessionRepository, TitleError, TitleKind, TodoLists, TodoService,
    TodoServiceError, MAX_TITLE_CHARS,
};

fn service(conn: &Connection) -> TodoService<SqliteSessionRepository<'_>> {
    TodoService::new(SqliteSessionRepository::new(conn))
}

#[test]
fn new_session_starts_from_seed_lists() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let lists = service.open_session(new_session_id()).unwrap();
    assert_eq!(lists.len(), 3);
    assert!(lists.has_title("Work Todos"));
}

#[test]
fn saved_session_reopens_with_same_ids() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let session_id = new_session_id();

    let mut lists = service.open_session(session_id).unwrap();
    let list_id = service.create_list(&mut lists, "Garden").unwrap();
    let todo_id = service.add_todo(&mut lists, list_id, "Rake leaves").unwrap();
    service.save_session(session_id, &lists).unwrap();

    let reopened = service.open_session(session_id).unwrap();
    assert_eq!(reopened, lists);
    assert_eq!(
        reopened.find_todo(list_id, todo_id).unwrap().title(),
        "Rake leaves"
    );
}

#[test]
fn ended_session_falls_back_to_seed() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let session_id = new_session_id();

    service.save_session(session_id, &TodoLists::new()).unwrap();
    assert!(service.open_session(session_id).unwrap().is_empty());

    service.end_session(session_id).unwrap();
    assert_eq!(service.open_session(session_id).unwrap().len(), 3);
}

#[test]
fn create_list_trims_and_enforces_unique_titles() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let mut lists = TodoLists::new();

    let id = service.create_list(&mut lists, "  Groceries ").unwrap();
    assert_eq!(lists.find_list(id).unwrap().title(), "Groceries");

    let err = service.create_list(&mut lists, "Groceries").unwrap_err();
    assert!(matches!(
        err,
        TodoServiceError::InvalidTitle(TitleError::Duplicate)
    ));
    assert_eq!(err.to_string(), "List title must be unique.");

    service.create_list(&mut lists, "groceries").unwrap();
    assert_eq!(lists.len(), 2);
}

#[test]
fn create_list_rejects_blank_and_long_titles() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let mut lists = TodoLists::new();

    let err = service.create_list(&mut lists, " \t").unwrap_err();
    assert!(matches!(
        err,
        TodoServiceError::InvalidTitle(TitleError::Empty(TitleKind::List))
    ));

    let long = "x".repeat(MAX_TITLE_CHARS + 1);
    let err = service.create_list(&mut lists, &long).unwrap_err();
    assert!(matches!(
        err,
        TodoServiceError::InvalidTitle(TitleError::TooLong { chars: 101, .. })
    ));
    assert!(lists.is_empty());
}

#[test]
fn rename_list_allows_own_title_but_not_a_sibling_title() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let mut lists = TodoLists::new();
    let work = service.create_list(&mut lists, "Work").unwrap();
    service.create_list(&mut lists, "Home").unwrap();

    service.rename_list(&mut lists, work, "Work").unwrap();
    service.rename_list(&mut lists, work, " Office ").unwrap();
    assert_eq!(lists.find_list(work).unwrap().title(), "Office");

    let err = service.rename_list(&mut lists, work, "Home").unwrap_err();
    assert!(matches!(
        err,
        TodoServiceError::InvalidTitle(TitleError::Duplicate)
    ));
    assert_eq!(lists.find_list(work).unwrap().title(), "Office");

    let err = service.rename_list(&mut lists, 0, "Elsewhere").unwrap_err();
    assert!(matches!(err, TodoServiceError::ListNotFound(0)));
}

#[test]
fn rename_of_unknown_list_is_not_found_even_with_a_taken_title() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let mut lists = TodoLists::new();
    service.create_list(&mut lists, "Home").unwrap();

    let err = service.rename_list(&mut lists, 0, "Home").unwrap_err();
    assert!(matches!(err, TodoServiceError::ListNotFound(0)));

    let err = service.rename_list(&mut lists, 0, "  ").unwrap_err();
    assert!(matches!(err, TodoServiceError::ListNotFound(0)));
}

#[test]
fn session_stays_reopenable_after_rejected_duplicates() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let session_id = new_session_id();

    let mut lists = service.open_session(session_id).unwrap();
    let list_id = lists.iter().next().unwrap().id();
    let list = lists.find_list_mut(list_id).unwrap();
    let copy = list.first().unwrap().clone();
    assert!(list.add(copy).is_err());

    let cloned_list = lists.find_list(list_id).unwrap().clone();
    assert!(lists.push(cloned_list).is_err());

    service.save_session(session_id, &lists).unwrap();
    let reopened = service.open_session(session_id).unwrap();
    assert_eq!(reopened, lists);
}

#[test]
fn todo_lifecycle_through_the_service() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let mut lists = TodoLists::new();
    let list_id = service.create_list(&mut lists, "Errands").unwrap();

    let bank = service.add_todo(&mut lists, list_id, "Bank").unwrap();
    let post = service.add_todo(&mut lists, list_id, "post office").unwrap();

    assert!(service.toggle_todo(&mut lists, list_id, bank).unwrap());
    assert!(!service.toggle_todo(&mut lists, list_id, bank).unwrap());

    service.complete_all(&mut lists, list_id).unwrap();
    assert!(lists.find_list(list_id).unwrap().is_done());

    let removed = service.delete_todo(&mut lists, list_id, post).unwrap();
    assert_eq!(removed.title(), "post office");
    assert_eq!(lists.find_list(list_id).unwrap().size(), 1);

    let deleted = service.delete_list(&mut lists, list_id).unwrap();
    assert_eq!(deleted.size(), 1);
    assert!(lists.is_empty());
}

#[test]
fn unknown_ids_map_to_not_found_errors() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let mut lists = TodoLists::seed();
    let list_id = lists.iter().next().unwrap().id();
    let before = lists.clone();

    assert!(matches!(
        service.add_todo(&mut lists, 0, "x"),
        Err(TodoServiceError::ListNotFound(0))
    ));
    assert!(matches!(
        service.toggle_todo(&mut lists, list_id, 0),
        Err(TodoServiceError::TodoNotFound { todo_id: 0, .. })
    ));
    assert!(matches!(
        service.delete_todo(&mut lists, list_id, 0),
        Err(TodoServiceError::TodoNotFound { .. })
    ));
    assert!(matches!(
        service.complete_all(&mut lists, 0),
        Err(TodoServiceError::ListNotFound(0))
    ));
    assert!(matches!(
        service.delete_list(&mut lists, 0),
        Err(TodoServiceError::ListNotFound(0))
    ));
    assert!(service.list_detail(&lists, 0).is_err());
    assert_eq!(lists, before);
}

#[test]
fn add_todo_validates_title() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let mut lists = TodoLists::new();
    let list_id = service.create_list(&mut lists, "Errands").unwrap();

    let err = service.add_todo(&mut lists, list_id, "").unwrap_err();
    assert_eq!(err.to_string(), "A title was not provided.");

    let long = "y".repeat(MAX_TITLE_CHARS + 1);
    let err = service.add_todo(&mut lists, list_id, &long).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Todo title must be between 1 and 100 characters."
    );
    assert_eq!(lists.find_list(list_id).unwrap().size(), 0);
}

#[test]
fn overview_and_detail_are_in_display_order() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let lists = TodoLists::seed();

    let overview = service.list_overview(&lists);
    let titles: Vec<&str> = overview.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Work Todos", "Additional Todos", "Home Todos"]);

    let work = &overview[0];
    assert!(!work.done);
    assert_eq!((work.done_count, work.size), (2, 3));

    let detail = service.list_detail(&lists, work.id).unwrap();
    assert_eq!(detail.list.title(), "Work Todos");
    let todos: Vec<&str> = detail.todos.iter().map(|t| t.title()).collect();
    assert_eq!(todos, vec!["meeting", "Chat with colleagues", "Get coffee"]);
}
