use daykeep_core::{Category, Item, ItemStatus, ItemValidationError, DEFAULT_TINT};
use uuid::Uuid;

const MS_PER_DAY: i64 = 86_400_000;

#[test]
fn item_new_sets_form_defaults() {
    let item = Item::new();

    assert!(!item.id.is_nil());
    assert!(item.title.is_empty());
    assert!(item.remarks.is_empty());
    assert_eq!(item.category, Category::Today);
    assert_eq!(item.status, ItemStatus::Active);
    assert_eq!(item.tint, DEFAULT_TINT);
    assert!(item.tags.is_empty());
    assert!(item.tasks.is_empty());

    // All four dates default to the same "now" snapshot.
    assert_eq!(item.date_added, item.date_due);
    assert_eq!(item.date_added, item.date_started);
    assert_eq!(item.date_added, item.date_completed);
}

#[test]
fn is_completed_is_a_snapshot_time_check() {
    let mut item = Item::new();
    item.date_completed = 1_000;

    assert!(item.is_completed_at(1_000));
    assert!(item.is_completed_at(1_001));
    assert!(!item.is_completed_at(999));
}

#[test]
fn days_until_due_counts_whole_calendar_days() {
    let noon = MS_PER_DAY / 2;
    let mut item = Item::new();

    item.date_due = noon + 3 * MS_PER_DAY;
    assert_eq!(item.days_until_due_at(noon), Some(3));

    // Same calendar day, different time of day.
    item.date_due = MS_PER_DAY - 1;
    assert_eq!(item.days_until_due_at(noon), Some(0));

    // Past due days come back negative.
    item.date_due = noon - MS_PER_DAY;
    assert_eq!(item.days_until_due_at(noon), Some(-1));
}

#[test]
fn days_until_due_stays_computable_at_extreme_dates() {
    // Day buckets span roughly +/-106.8 billion, so the difference fits
    // comfortably in i64 even between the timestamp extremes.
    let mut item = Item::new();

    item.date_due = i64::MIN;
    assert_eq!(item.days_until_due_at(i64::MAX), Some(-213_503_982_335));

    item.date_due = i64::MAX;
    assert_eq!(item.days_until_due_at(i64::MIN), Some(213_503_982_335));
}

#[test]
fn date_fields_are_independent() {
    let mut item = Item::new();
    item.date_completed = item.date_added - 10 * MS_PER_DAY;
    item.date_due = item.date_added - MS_PER_DAY;

    // Reversed date combinations are allowed by design.
    assert!(item.validate().is_ok());
}

#[test]
fn validate_rejects_nil_item_id() {
    let mut item = Item::new();
    item.id = Uuid::nil();

    assert_eq!(item.validate().unwrap_err(), ItemValidationError::NilId);
}

#[test]
fn validate_rejects_foreign_task_backreference() {
    let mut item = Item::new();
    let task_id = item.add_task("buy milk");
    item.tasks[0].item_id = Uuid::new_v4();

    let err = item.validate().unwrap_err();
    assert!(matches!(
        err,
        ItemValidationError::TaskParentMismatch { task, expected }
            if task == task_id && expected == item.id
    ));
}

#[test]
fn add_task_wires_the_owning_backreference() {
    let mut item = Item::new();
    item.add_task("call dentist");

    assert_eq!(item.tasks.len(), 1);
    assert_eq!(item.tasks[0].item_id, item.id);
    assert!(!item.tasks[0].is_completed);
    assert_eq!(item.tasks[0].due_date, None);
    assert_eq!(item.tasks[0].due_time, None);
    assert!(item.validate().is_ok());
}

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let mut item = Item::new();
    item.title = "water plants".to_string();
    item.category = Category::Scheduled;
    item.status = ItemStatus::Hold;
    item.tint = "green".to_string();
    item.add_task("fill watering can");

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], item.id.to_string());
    assert_eq!(json["title"], "water plants");
    assert_eq!(json["category"], "scheduled");
    assert_eq!(json["status"], "hold");
    assert_eq!(json["tint"], "green");
    assert_eq!(json["tasks"][0]["name"], "fill watering can");
    assert_eq!(json["tasks"][0]["is_completed"], false);

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn edit_flow_seeds_a_draft_from_existing_values() {
    let mut original = Item::new();
    original.title = "renew passport".to_string();
    original.category = Category::Work;

    let mut draft = original.clone();
    draft.status = ItemStatus::Hold;

    assert_eq!(draft.id, original.id);
    assert_eq!(draft.title, original.title);
    assert_eq!(original.status, ItemStatus::Active);
}
