use daykeep_core::{filter_and_sort, sort_key, Category, Item, SortKey};
use std::collections::HashSet;

// Epoch milliseconds for a few fixed calendar days.
const JAN_1_2024: i64 = 1_704_067_200_000;
const FEB_1_2024: i64 = 1_706_745_600_000;
const MAR_1_2024: i64 = 1_709_251_200_000;

fn item(category: Category) -> Item {
    let mut item = Item::new();
    item.category = category;
    item
}

#[test]
fn scheduled_tab_orders_by_due_date() {
    let mut late = item(Category::Scheduled);
    late.date_due = MAR_1_2024;
    let mut early = item(Category::Scheduled);
    early.date_due = JAN_1_2024;
    let mut other = item(Category::Work);
    other.date_due = FEB_1_2024;

    let items = vec![late.clone(), early.clone(), other];
    let view = filter_and_sort(&items, Category::Scheduled);

    assert_eq!(view.len(), 2);
    assert_eq!(view[0].id, early.id);
    assert_eq!(view[1].id, late.id);
}

#[test]
fn view_contains_exactly_the_matching_subset() {
    let items = vec![
        item(Category::Work),
        item(Category::Scheduled),
        item(Category::Work),
        item(Category::Ideas),
        item(Category::Work),
    ];

    let view = filter_and_sort(&items, Category::Work);

    let expected: HashSet<_> = items
        .iter()
        .filter(|i| i.category == Category::Work)
        .map(|i| i.id)
        .collect();
    let got: HashSet<_> = view.iter().map(|i| i.id).collect();
    assert_eq!(got, expected);
    assert_eq!(view.len(), 3);
}

#[test]
fn equal_keys_keep_input_order() {
    let mut first = item(Category::Scheduled);
    first.date_due = FEB_1_2024;
    first.title = "first".to_string();
    let mut second = item(Category::Scheduled);
    second.date_due = FEB_1_2024;
    second.title = "second".to_string();

    let items = vec![first.clone(), second.clone()];
    let view = filter_and_sort(&items, Category::Scheduled);
    assert_eq!(view[0].id, first.id);
    assert_eq!(view[1].id, second.id);

    // Stability holds for the reversed input too.
    let reversed = vec![second.clone(), first.clone()];
    let view = filter_and_sort(&reversed, Category::Scheduled);
    assert_eq!(view[0].id, second.id);
    assert_eq!(view[1].id, first.id);
}

#[test]
fn view_derivation_is_idempotent() {
    let mut a = item(Category::Upcoming);
    a.date_added = FEB_1_2024;
    let mut b = item(Category::Upcoming);
    b.date_added = JAN_1_2024;
    let items = vec![a, b];

    let first: Vec<_> = filter_and_sort(&items, Category::Upcoming)
        .iter()
        .map(|i| i.id)
        .collect();
    let second: Vec<_> = filter_and_sort(&items, Category::Upcoming)
        .iter()
        .map(|i| i.id)
        .collect();

    assert_eq!(first, second);
}

#[test]
fn ideas_tab_orders_by_title() {
    let mut zebra = item(Category::Ideas);
    zebra.title = "zebra garden".to_string();
    let mut apple = item(Category::Ideas);
    apple.title = "apple stand".to_string();
    let mut mango = item(Category::Ideas);
    mango.title = "mango sorbet".to_string();

    let items = vec![zebra.clone(), apple.clone(), mango.clone()];
    let view = filter_and_sort(&items, Category::Ideas);

    let titles: Vec<_> = view.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["apple stand", "mango sorbet", "zebra garden"]);
}

#[test]
fn completed_tab_orders_by_completion_date() {
    let mut recent = item(Category::Completed);
    recent.date_completed = MAR_1_2024;
    let mut old = item(Category::Completed);
    old.date_completed = JAN_1_2024;

    let items = vec![recent.clone(), old.clone()];
    let view = filter_and_sort(&items, Category::Completed);

    assert_eq!(view[0].id, old.id);
    assert_eq!(view[1].id, recent.id);
}

#[test]
fn categories_without_a_dedicated_key_order_by_age() {
    assert_eq!(sort_key(Category::Work), SortKey::DateAdded);
    assert_eq!(sort_key(Category::Today), SortKey::DateAdded);

    let mut newer = item(Category::Work);
    newer.date_added = MAR_1_2024;
    let mut older = item(Category::Work);
    older.date_added = JAN_1_2024;

    let items = vec![newer.clone(), older.clone()];
    let view = filter_and_sort(&items, Category::Work);
    assert_eq!(view[0].id, older.id);
    assert_eq!(view[1].id, newer.id);
}

#[test]
fn empty_tab_yields_empty_sequence() {
    let items = vec![item(Category::Work), item(Category::Ideas)];
    assert!(filter_and_sort(&items, Category::Family).is_empty());
    assert!(filter_and_sort(&[], Category::Scheduled).is_empty());
}

#[test]
fn sort_key_table_matches_the_product_decision() {
    assert_eq!(sort_key(Category::Scheduled), SortKey::DateDue);
    assert_eq!(sort_key(Category::Upcoming), SortKey::DateAdded);
    assert_eq!(sort_key(Category::Ideas), SortKey::Title);
    assert_eq!(sort_key(Category::Completed), SortKey::DateCompleted);
}
