//! End-to-end model workflow tests: populate, project, filter, select.

mod common;

use common::builders::ImportRecordBuilder;
use std::thread;
use std::time::{Duration, Instant};
use treelist::records::imports::{EMPTY_IMPORTS_TEXT, LOADING_IMPORTS_TEXT};
use treelist::records::{ImportColumn, ImportRecord, ThreadColumn, ThreadRecord};
use treelist::{
    ModelConfig, RecordSink, RecordSource, Result, SortOrder, SortSpec, TreeListModel,
};

struct FixtureSource(Vec<ImportRecord>);

impl RecordSource<ImportRecord> for FixtureSource {
    fn enumerate(&mut self, sink: &RecordSink<ImportRecord>) -> Result<()> {
        for record in self.0.drain(..) {
            sink.push(record);
        }
        Ok(())
    }
}

struct EmptySource;

impl RecordSource<ImportRecord> for EmptySource {
    fn enumerate(&mut self, _sink: &RecordSink<ImportRecord>) -> Result<()> {
        Ok(())
    }
}

fn import_model() -> TreeListModel<ImportRecord> {
    let config = ModelConfig::new(SortSpec::new(
        ImportColumn::Index.id(),
        SortOrder::Ascending,
    ))
    .drain_interval(Duration::from_millis(5))
    .placeholder_text(LOADING_IMPORTS_TEXT, EMPTY_IMPORTS_TEXT);
    TreeListModel::new(config)
}

fn pump_until_done(model: &mut TreeListModel<ImportRecord>) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while model.is_populating() {
        model.pump_events();
        assert!(Instant::now() < deadline, "population never finished");
        thread::sleep(Duration::from_millis(2));
    }
}

fn fixture_records() -> Vec<ImportRecord> {
    vec![
        ImportRecordBuilder::new(0)
            .rva(0x2f40)
            .dll("kernel32.dll")
            .name("CreateFileW")
            .hint(120)
            .build(),
        ImportRecordBuilder::new(1)
            .rva(0x2f48)
            .dll("kernel32.dll")
            .name("ReadFile")
            .hint(900)
            .build(),
        ImportRecordBuilder::new(2)
            .rva(0x2f50)
            .dll("comctl32.dll")
            .ordinal(17)
            .build(),
        ImportRecordBuilder::new(3)
            .rva(0x2f58)
            .dll("advapi32.dll")
            .name("RegOpenKeyExW")
            .hint(3)
            .delay_load()
            .build(),
    ]
}

#[test]
fn test_full_import_view_workflow() {
    let mut model = import_model();

    // Before any population the view reports the nothing-found text.
    assert_eq!(model.empty_text(), EMPTY_IMPORTS_TEXT);

    model.populate(FixtureSource(fixture_records())).unwrap();
    assert_eq!(model.empty_text(), LOADING_IMPORTS_TEXT);

    pump_until_done(&mut model);
    assert_eq!(model.empty_text(), EMPTY_IMPORTS_TEXT);
    assert_eq!(model.len(), 4);

    // Default projection: index ascending, everything visible.
    let keys: Vec<u64> = model.children().iter().map(|n| n.key()).collect();
    assert_eq!(keys, [0, 1, 2, 3]);

    // Cell text is rendered per column, including the formatted special cases.
    assert_eq!(
        model.cell_text(&2, ImportColumn::Name.id()),
        Some("(Ordinal 17)")
    );
    assert_eq!(
        model.cell_text(&3, ImportColumn::Dll.id()),
        Some("advapi32.dll (Delay)")
    );
    assert_eq!(model.cell_text(&0, ImportColumn::Rva.id()), Some("0x2f40"));

    // Delimited filter: both terms are independent, case-insensitive.
    model.set_filter_text("KERNEL|comctl");
    let keys: Vec<u64> = model.children().iter().map(|n| n.key()).collect();
    assert_eq!(keys, [0, 1, 2]);

    // Selection survives filtering; keys come back in insertion order.
    model.select(&1, true);
    model.select(&2, true);
    assert_eq!(model.selected_keys(), [1, 2]);
    assert_eq!(model.first_selected().map(|r| r.unique_id), Some(1));

    model.set_filter_text("");
    model.clear_selection();
    assert_eq!(model.selected_count(), 0);
    assert_eq!(model.children().len(), 4);
}

#[test]
fn test_empty_enumeration_transitions_to_empty_text() {
    let mut model = import_model();
    model.populate(EmptySource).unwrap();
    assert_eq!(model.empty_text(), LOADING_IMPORTS_TEXT);

    pump_until_done(&mut model);
    assert!(model.is_empty());
    assert_eq!(model.empty_text(), EMPTY_IMPORTS_TEXT);
}

#[test]
fn test_sort_by_dll_breaks_ties_by_key() {
    let mut model = import_model();
    for record in fixture_records() {
        model.add(record);
    }

    // kernel32 rows (keys 0 and 1) tie on the DLL column; the key decides.
    model.set_sort_spec(SortSpec::new(ImportColumn::Dll.id(), SortOrder::Ascending));
    let keys: Vec<u64> = model.children().iter().map(|n| n.key()).collect();
    assert_eq!(keys, [3, 2, 0, 1]);

    model.set_sort_spec(SortSpec::new(
        ImportColumn::Dll.id(),
        SortOrder::Descending,
    ));
    let keys: Vec<u64> = model.children().iter().map(|n| n.key()).collect();
    assert_eq!(keys, [1, 0, 2, 3]);
}

#[test]
fn test_thread_view_refresh_cycle() {
    let mut model = TreeListModel::new(ModelConfig::new(SortSpec::new(
        ThreadColumn::Cpu.id(),
        SortOrder::Descending,
    )));

    model.add(ThreadRecord::new(100, 0x7ff6_1000, 8).named("main"));
    model.add(ThreadRecord::new(200, 0x7ff6_2000, 8).named("worker"));
    model.add(ThreadRecord::new(300, 0x7ff6_3000, 10));

    // First provider tick: worker hottest, unnamed thread idle.
    model.refresh(&100, |t| t.tick(0.10, 5_000, 12));
    model.refresh(&200, |t| t.tick(0.45, 90_000, 80));

    let tids: Vec<u32> = model.children().iter().map(|n| n.key()).collect();
    assert_eq!(tids, [200, 100, 300]);
    assert_eq!(model.cell_text(&200, ThreadColumn::Cpu.id()), Some("45.00"));

    // Second tick flips the ordering and the cached text follows.
    model.refresh(&100, |t| t.tick(0.60, 120_000, 200));
    model.refresh(&200, |t| t.tick(0.05, 1_000, 4));

    let tids: Vec<u32> = model.children().iter().map(|n| n.key()).collect();
    assert_eq!(tids, [100, 200, 300]);
    assert_eq!(model.cell_text(&200, ThreadColumn::Cpu.id()), Some("5.00"));

    // The unnamed thread renders the sentinel and is findable through it.
    assert_eq!(
        model.cell_text(&300, ThreadColumn::Name.id()),
        Some("(unnamed)")
    );
    model.set_filter_text("unnamed");
    let tids: Vec<u32> = model.children().iter().map(|n| n.key()).collect();
    assert_eq!(tids, [300]);
}
