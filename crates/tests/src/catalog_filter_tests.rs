//! Record list search tests

use shared_types::catalog::{filter_records, next_id, records_for, RecordStatus};
use shared_types::Screen;

#[test]
fn blank_query_keeps_everything() {
    let records = records_for(Screen::Institutions);
    assert_eq!(filter_records(&records, ""), records);
    assert_eq!(filter_records(&records, "   "), records);
}

#[test]
fn search_is_case_insensitive_over_title_and_detail() {
    let records = records_for(Screen::Institutions);
    let by_title = filter_records(&records, "GREENWOOD");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Greenwood International School");

    let by_detail = filter_records(&records, "icse");
    assert_eq!(by_detail.len(), 1);
    assert_eq!(by_detail[0].title, "St. Mary's Convent");
}

#[test]
fn search_matches_status_label() {
    let records = records_for(Screen::Subscriptions);
    let overdue = filter_records(&records, RecordStatus::Overdue.label());
    assert!(!overdue.is_empty());
    assert!(overdue.iter().all(|r| r.status == RecordStatus::Overdue));
}

#[test]
fn no_match_is_empty() {
    assert!(filter_records(&records_for(Screen::MasterData), "zzz-nothing").is_empty());
}

#[test]
fn filtered_results_keep_original_order() {
    let records = records_for(Screen::Institutions);
    let filtered = filter_records(&records, "school");
    let ids: Vec<u32> = filtered.iter().map(|r| r.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn seeded_ids_are_sequential_and_next_id_follows() {
    let records = records_for(Screen::Institutions);
    let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=records.len() as u32).collect::<Vec<_>>());
    assert_eq!(next_id(&records), records.len() as u32 + 1);
    assert_eq!(next_id(&[]), 1);
}

#[test]
fn screens_without_lists_have_no_records() {
    for screen in [Screen::Login, Screen::Dashboard, Screen::Settings, Screen::Profile] {
        assert!(records_for(screen).is_empty(), "{screen} has seed records");
    }
}
