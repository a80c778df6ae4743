use super::*;

fn list_with(names: &[&str]) -> TodoList {
    let mut list = TodoList::new();
    for name in names {
        list.set_pending_name(*name);
        list.add_item().unwrap();
    }
    list
}

fn ids_and_names(list: &TodoList) -> Vec<(usize, String)> {
    list.snapshot()
        .iter()
        .map(|item| (item.id(), item.name().to_string()))
        .collect()
}

#[test]
fn new_list_is_empty_with_empty_buffer() {
    let list = TodoList::new();
    assert!(list.is_empty());
    assert_eq!(list.pending_name(), "");
    assert!(list.snapshot().is_empty());
}

#[test]
fn set_pending_name_replaces_buffer_without_touching_items() {
    let mut list = list_with(&["A"]);
    list.set_pending_name("draft");
    list.set_pending_name("");
    list.set_pending_name("again");

    assert_eq!(list.pending_name(), "again");
    assert_eq!(ids_and_names(&list), vec![(1, "A".to_string())]);
}

#[test]
fn add_with_empty_buffer_is_noop() {
    let mut list = list_with(&["A"]);

    assert_eq!(list.add_item(), None);
    assert_eq!(list.len(), 1);
    assert_eq!(list.pending_name(), "");
}

#[test]
fn add_appends_with_next_id_and_clears_buffer() {
    let mut list = list_with(&["A", "B"]);
    list.set_pending_name("Buy milk");

    let key = list.add_item().unwrap();

    assert_eq!(list.len(), 3);
    let last = list.get(2).unwrap();
    assert_eq!(last.id(), 3);
    assert_eq!(last.name(), "Buy milk");
    assert_eq!(last.key(), key);
    assert_eq!(list.pending_name(), "");
}

#[test]
fn add_does_not_trim_whitespace() {
    let mut list = TodoList::new();
    list.set_pending_name("  ");

    assert!(list.add_item().is_some());
    assert_eq!(list.get(0).unwrap().name(), "  ");
}

#[test]
fn deleting_middle_item_renumbers_tail() {
    let mut list = list_with(&["A", "B", "C"]);
    let b = list.get(1).unwrap().key();

    assert!(list.delete_item(b));

    assert_eq!(
        ids_and_names(&list),
        vec![(1, "A".to_string()), (2, "C".to_string())]
    );
}

#[test]
fn deleting_first_item_renumbers_everything() {
    let mut list = list_with(&["A", "B", "C"]);
    let a = list.get(0).unwrap().key();

    list.delete_item(a);

    assert_eq!(
        ids_and_names(&list),
        vec![(1, "B".to_string()), (2, "C".to_string())]
    );
}

#[test]
fn deleting_absent_key_leaves_list_unchanged() {
    let mut list = list_with(&["A", "B"]);
    let removed = list.get(0).unwrap().key();
    list.delete_item(removed);
    let before = list.snapshot().to_vec();

    assert!(!list.delete_item(removed));
    assert_eq!(list.snapshot(), before.as_slice());
}

#[test]
fn keys_stay_stable_across_renumbering() {
    let mut list = list_with(&["A", "B", "C"]);
    let a = list.get(0).unwrap().key();
    let c = list.get(2).unwrap().key();

    list.delete_item(a);

    let c_item = list.get(list.position(c).unwrap()).unwrap();
    assert_eq!(c_item.name(), "C");
    assert_eq!(c_item.id(), 2);
    assert_eq!(c_item.key(), c);
}

#[test]
fn keys_are_not_reused_after_deletion() {
    let mut list = list_with(&["A"]);
    let a = list.get(0).unwrap().key();
    list.delete_item(a);

    list.set_pending_name("A");
    let again = list.add_item().unwrap();

    assert_ne!(a, again);
    assert!(!list.delete_item(a));
    assert_eq!(list.len(), 1);
}

#[test]
fn equal_names_are_deleted_by_key() {
    let mut list = list_with(&["same", "same"]);
    let second = list.get(1).unwrap().key();
    let first = list.get(0).unwrap().key();

    list.delete_item(second);

    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0).unwrap().key(), first);
}

#[test]
fn deleting_everything_ends_empty() {
    let mut list = list_with(&["A", "B", "C", "D"]);
    while let Some(item) = list.get(0) {
        let key = item.key();
        assert!(list.delete_item(key));
    }

    assert!(list.is_empty());
    assert_eq!(list.pending_name(), "");
}

#[test]
fn snapshot_is_idempotent() {
    let list = list_with(&["A", "B"]);
    let first = list.snapshot().to_vec();
    let second = list.snapshot().to_vec();
    assert_eq!(first, second);
}
