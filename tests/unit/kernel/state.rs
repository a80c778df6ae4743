use super::*;

fn view(height: usize, len: usize) -> ListViewState {
    let mut view = ListViewState::default();
    view.set_view_height(height, len);
    view
}

#[test]
fn focus_cycles_between_input_and_list() {
    assert_eq!(FocusTarget::default(), FocusTarget::Input);
    assert_eq!(FocusTarget::Input.next(), FocusTarget::List);
    assert_eq!(FocusTarget::List.next(), FocusTarget::Input);
    assert_eq!(FocusTarget::Input.prev(), FocusTarget::List);
}

#[test]
fn move_selection_starts_at_edges_when_nothing_selected() {
    let mut down = view(3, 5);
    assert!(down.move_selection(1, 5));
    assert_eq!(down.selected(), Some(0));

    let mut up = view(3, 5);
    assert!(up.move_selection(-1, 5));
    assert_eq!(up.selected(), Some(4));
    assert_eq!(up.scroll_offset(), 2);
}

#[test]
fn move_selection_clamps_and_scrolls() {
    let mut v = view(2, 5);
    v.select(0, 5);

    assert!(v.move_selection(10, 5));
    assert_eq!(v.selected(), Some(4));
    assert_eq!(v.scroll_offset(), 3);

    assert!(v.move_selection(-1, 5));
    assert!(v.move_selection(-1, 5));
    assert_eq!(v.selected(), Some(2));
    assert_eq!(v.scroll_offset(), 2);

    assert!(!v.move_selection(0, 5));
}

#[test]
fn move_selection_on_empty_list_is_noop() {
    let mut v = view(3, 0);
    assert!(!v.move_selection(1, 0));
    assert_eq!(v.selected(), None);
}

#[test]
fn select_rejects_out_of_range() {
    let mut v = view(3, 2);
    assert!(!v.select(2, 2));
    assert_eq!(v.selected(), None);
}

#[test]
fn scroll_is_clamped() {
    let mut v = view(2, 5);
    assert!(v.scroll(10, 5));
    assert_eq!(v.scroll_offset(), 3);
    assert!(!v.scroll(1, 5));
    assert!(v.scroll(-10, 5));
    assert_eq!(v.scroll_offset(), 0);
}

#[test]
fn sync_len_clamps_selection_and_scroll() {
    let mut v = view(2, 5);
    v.select(4, 5);

    v.sync_len(3);
    assert_eq!(v.selected(), Some(2));
    assert_eq!(v.scroll_offset(), 1);

    v.sync_len(0);
    assert_eq!(v.selected(), None);
    assert_eq!(v.scroll_offset(), 0);
}

#[test]
fn set_view_height_keeps_selection_visible() {
    let mut v = view(5, 10);
    v.select(8, 10);
    assert_eq!(v.scroll_offset(), 4);

    assert!(v.set_view_height(2, 10));
    assert_eq!(v.scroll_offset(), 7);
    assert!(!v.set_view_height(2, 10));
}

#[test]
fn input_insert_and_delete_respect_graphemes() {
    let mut input = InputState::default();
    let text = input.insert("", "Купити");
    assert_eq!(text, "Купити");
    assert_eq!(input.cursor(), text.len());

    let text = input.delete_backward(&text).unwrap();
    assert_eq!(text, "Купит");

    assert!(input.move_home());
    assert_eq!(input.delete_backward(&text), None);

    let text = input.delete_forward(&text).unwrap();
    assert_eq!(text, "упит");
    assert_eq!(input.cursor(), 0);
}

#[test]
fn input_cursor_moves_over_combined_grapheme() {
    let text = "e\u{301}x";
    let mut input = InputState::default();

    assert!(input.move_right(text));
    assert_eq!(input.cursor(), "e\u{301}".len());
    assert!(input.move_left(text));
    assert_eq!(input.cursor(), 0);
    assert!(!input.move_left(text));

    assert!(input.move_end(text));
    assert!(!input.move_right(text));
    assert!(!input.move_end(text));
}

#[test]
fn input_insert_in_the_middle() {
    let mut input = InputState::default();
    let text = "Buy milk";
    input.move_right(text);
    input.move_right(text);
    input.move_right(text);

    let text = input.insert(text, " more");
    assert_eq!(text, "Buy more milk");
    assert_eq!(input.cursor(), "Buy more".len());
}
