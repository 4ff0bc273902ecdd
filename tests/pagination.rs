// tests/pagination.rs
//
// Slicing math and the windowed page-number strip.
//
use docente::paginate::{PageToken, clamp_page, page_bounds, page_numbers, total_pages};

use PageToken::{Gap, Num};

#[test]
fn total_pages_rounds_up_and_never_hits_zero() {
    assert_eq!(total_pages(23, 10), 3);
    assert_eq!(total_pages(20, 10), 2);
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(0, 10), 1);
}

#[test]
fn page_bounds_slices_and_caps_the_last_page() {
    assert_eq!(page_bounds(23, 1, 10), 0..10);
    assert_eq!(page_bounds(23, 2, 10), 10..20);
    assert_eq!(page_bounds(23, 3, 10), 20..23);
    assert_eq!(page_bounds(0, 1, 10), 0..0);
}

#[test]
fn clamping_is_the_callers_tool() {
    assert_eq!(clamp_page(7, 3), 3);
    assert_eq!(clamp_page(0, 3), 1);
    assert_eq!(clamp_page(2, 3), 2);
    // empty collection still has page 1
    assert_eq!(clamp_page(5, 1), 1);
}

#[test]
fn strip_suppressed_for_single_page() {
    assert_eq!(page_numbers(1, 1), vec![]);
    assert_eq!(page_numbers(1, 0), vec![]);
}

#[test]
fn strip_small_totals_list_every_page() {
    assert_eq!(page_numbers(1, 2), vec![Num(1), Num(2)]);
    assert_eq!(page_numbers(2, 3), vec![Num(1), Num(2), Num(3)]);
    assert_eq!(page_numbers(3, 5), vec![Num(1), Num(2), Num(3), Num(4), Num(5)]);
}

#[test]
fn strip_collapses_wide_gaps_to_one_ellipsis() {
    assert_eq!(page_numbers(1, 10), vec![Num(1), Num(2), Num(3), Gap, Num(10)]);
    assert_eq!(page_numbers(10, 10), vec![Num(1), Gap, Num(8), Num(9), Num(10)]);
    assert_eq!(
        page_numbers(6, 12),
        vec![Num(1), Gap, Num(4), Num(5), Num(6), Num(7), Num(8), Gap, Num(12)]
    );
}

#[test]
fn strip_shows_the_number_when_exactly_one_page_is_skipped() {
    // window around 5 is 3..=7; between 1 and 3 only page 2 is missing,
    // so it is listed instead of an ellipsis
    assert_eq!(
        page_numbers(5, 10),
        vec![Num(1), Num(2), Num(3), Num(4), Num(5), Num(6), Num(7), Gap, Num(10)]
    );
    // mirrored at the tail: window around 6 ends at 8, only 9 is missing
    assert_eq!(
        page_numbers(6, 10),
        vec![Num(1), Gap, Num(4), Num(5), Num(6), Num(7), Num(8), Num(9), Num(10)]
    );
}

#[test]
fn strip_clamps_a_stale_current_page() {
    assert_eq!(page_numbers(99, 3), vec![Num(1), Num(2), Num(3)]);
}
