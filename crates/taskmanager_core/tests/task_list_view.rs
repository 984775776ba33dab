use taskmanager_core::{Gesture, TaskListStore, TaskListView};

#[test]
fn view_tracks_store_through_gestures() {
    let mut store = TaskListStore::new();
    store.dispatch(Gesture::TextChanged("write report".to_string()));

    let typing = TaskListView::from_snapshot(&store.snapshot());
    assert_eq!(typing.draft_text, "write report");
    assert_eq!(typing.empty_message, Some("No tasks added yet."));

    store.dispatch(Gesture::AddButtonPressed);
    let added = TaskListView::from_snapshot(&store.snapshot());
    assert_eq!(added.draft_text, "");
    assert_eq!(added.empty_message, None);
    assert_eq!(added.rows.len(), 1);

    let id = added.rows[0].key.parse().expect("row key is a task id");
    store.dispatch(Gesture::TaskPressed(id));
    let toggled = TaskListView::from_snapshot(&store.snapshot());
    assert!(toggled.rows[0].completed);

    store.dispatch(Gesture::DeletePressed(id));
    let emptied = TaskListView::from_snapshot(&store.snapshot());
    assert!(emptied.rows.is_empty());
    assert_eq!(emptied.empty_message, Some("No tasks added yet."));
}

#[test]
fn row_keys_are_unique_and_ordered() {
    let mut store = TaskListStore::new();
    for text in ["one", "two", "three"] {
        store.set_draft_text(text);
        store.add_task().expect("add");
    }

    let view = TaskListView::from_snapshot(&store.snapshot());
    let keys = view.rows.iter().map(|row| row.key.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["1", "2", "3"]);
    let labels = view
        .rows
        .iter()
        .map(|row| row.delete_label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["Delete one", "Delete two", "Delete three"]);
}
