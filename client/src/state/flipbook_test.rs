use super::*;

#[test]
fn spreads_for_even_count_isolate_back_cover() {
    assert_eq!(spreads(8), vec![0..1, 1..3, 3..5, 5..7, 7..8]);
}

#[test]
fn spreads_for_odd_count_pair_to_end() {
    assert_eq!(spreads(7), vec![0..1, 1..3, 3..5, 5..7]);
}

#[test]
fn spreads_small_counts() {
    assert!(spreads(0).is_empty());
    assert_eq!(spreads(1), vec![0..1]);
    assert_eq!(spreads(2), vec![0..1, 1..2]);
    assert_eq!(spreads(3), vec![0..1, 1..3]);
}

#[test]
fn navigation_clamps_at_bounds() {
    let mut book = FlipBook::new(8);
    assert_eq!(book.prev(), None);
    assert_eq!(book.label(), "1 / 8");
    for _ in 0..10 {
        book.next();
    }
    assert_eq!(book.visible_pages(), 7..8);
    assert!(!book.can_next());
    assert_eq!(book.next(), None);
    assert_eq!(book.label(), "8 / 8");
}

#[test]
fn turning_direction_is_recorded_and_cleared() {
    let mut book = FlipBook::new(8);
    let id = book.next().unwrap();
    assert_eq!(book.turning, Some(Direction::Forward));
    assert_eq!(book.label(), "2-3 / 8");
    book.finish_turn(id);
    assert_eq!(book.turning, None);
    book.prev();
    assert_eq!(book.turning, Some(Direction::Backward));
}

#[test]
fn stale_turn_does_not_clear_a_later_turn() {
    let mut book = FlipBook::new(8);
    let first = book.next().unwrap();
    let second = book.next().unwrap();
    assert_ne!(first, second);

    book.finish_turn(first);
    assert_eq!(book.turning, Some(Direction::Forward));
    book.finish_turn(second);
    assert_eq!(book.turning, None);
}

#[test]
fn go_to_page_finds_containing_spread() {
    let mut book = FlipBook::new(8);
    book.go_to_page(4);
    assert_eq!(book.visible_pages(), 3..5);
    book.go_to_page(100);
    assert_eq!(book.visible_pages(), 7..8);
}

#[test]
fn single_mode_keeps_first_visible_page() {
    let mut book = FlipBook::new(8);
    book.go_to_page(3);
    book.set_spreads(false);
    assert_eq!(book.visible_pages(), 3..4);
    assert_eq!(book.view_count(), 8);
    book.next();
    book.set_spreads(true);
    assert_eq!(book.visible_pages(), 3..5);
}

#[test]
fn empty_book() {
    let mut book = FlipBook::new(0);
    assert_eq!(book.next(), None);
    assert_eq!(book.label(), "0 / 0");
}
