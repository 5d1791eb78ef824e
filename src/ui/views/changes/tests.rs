use super::*;
use crate::model::{ResourceOrder, StatusCode};
use crate::svn::parser::Parser;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Terminal, backend::TestBackend, style::Modifier};

const STATUS: &str = "\
M       src/a.rs
D       old.rs
?       notes.txt
--- Changelist 'feature':
A       src/new.rs
";

fn reconciliation(output: &str) -> Reconciliation {
    Parser::reconcile(output, Path::new("/wc"), ResourceOrder::Scan)
}

fn loaded_view() -> ChangesView {
    let mut view = ChangesView::new();
    view.set_reconciliation(&reconciliation(STATUS));
    view
}

fn press(view: &mut ChangesView, c: char) -> ChangesAction {
    view.handle_key(KeyEvent::from(KeyCode::Char(c)))
}

fn row_texts(view: &ChangesView) -> Vec<String> {
    view.rows()
        .iter()
        .map(|row| match row {
            Row::Header { label, count, .. } => format!("[{}] {}", label, count),
            Row::Resource { resource, .. } => {
                format!("{} {}", resource.status(), resource.relative())
            }
        })
        .collect()
}

#[test]
fn test_rows_are_grouped_default_pending_unversioned() {
    let view = loaded_view();
    assert_eq!(
        row_texts(&view),
        vec![
            "[default] 2",
            "M src/a.rs",
            "D old.rs",
            "[feature] 1",
            "A src/new.rs",
            "[unversioned] 1",
            "? notes.txt",
        ]
    );
}

#[test]
fn test_empty_unversioned_group_is_hidden() {
    let mut view = ChangesView::new();
    view.set_reconciliation(&reconciliation("M       a.rs\n"));
    assert_eq!(row_texts(&view), vec!["[default] 1", "M a.rs"]);
}

#[test]
fn test_clean_working_copy_keeps_default_header() {
    let mut view = ChangesView::new();
    assert!(!view.is_loaded());
    view.set_reconciliation(&reconciliation(""));
    assert!(view.is_loaded());
    assert!(view.is_clean());
    assert_eq!(row_texts(&view), vec!["[default] 0"]);
}

#[test]
fn test_navigation_is_clamped() {
    let mut view = loaded_view();
    assert_eq!(press(&mut view, 'k'), ChangesAction::None);
    assert_eq!(view.selected_index, 0);

    press(&mut view, 'G');
    assert_eq!(view.selected_index, 6);
    press(&mut view, 'j');
    assert_eq!(view.selected_index, 6);

    press(&mut view, 'g');
    assert_eq!(view.selected_index, 0);
}

#[test]
fn test_group_jumps() {
    let mut view = loaded_view();
    press(&mut view, ']');
    assert_eq!(view.selected_index, 3);
    press(&mut view, ']');
    assert_eq!(view.selected_index, 5);
    // No further header
    press(&mut view, ']');
    assert_eq!(view.selected_index, 5);

    press(&mut view, 'j');
    press(&mut view, '[');
    assert_eq!(view.selected_index, 5);
    press(&mut view, '[');
    assert_eq!(view.selected_index, 3);
}

#[test]
fn test_selected_target_for_header_and_file() {
    let mut view = loaded_view();
    assert_eq!(
        view.selected_target(),
        Some(ScmTarget::Group(GroupId::Default))
    );
    assert_eq!(view.selection_kind(), SelectionKind::OtherGroup);

    press(&mut view, 'j');
    assert_eq!(
        view.selected_target(),
        Some(ScmTarget::File(PathBuf::from("/wc/src/a.rs")))
    );
    assert_eq!(view.selection_kind(), SelectionKind::File);

    press(&mut view, ']');
    assert_eq!(view.selection_kind(), SelectionKind::Changelist);
}

#[test]
fn test_file_actions_require_a_file() {
    let mut view = loaded_view();
    assert_eq!(press(&mut view, 'd'), ChangesAction::NoSelection);
    assert_eq!(press(&mut view, 'm'), ChangesAction::NoSelection);
    assert_eq!(
        view.handle_key(KeyEvent::from(KeyCode::Enter)),
        ChangesAction::None
    );

    press(&mut view, 'j');
    assert_eq!(
        press(&mut view, 'd'),
        ChangesAction::DiffHead(PathBuf::from("/wc/src/a.rs"))
    );
    assert_eq!(
        press(&mut view, 'h'),
        ChangesAction::PickRevision(PathBuf::from("/wc/src/a.rs"))
    );
    assert_eq!(
        press(&mut view, 'm'),
        ChangesAction::MoveToChangelist(PathBuf::from("/wc/src/a.rs"))
    );
    match view.handle_key(KeyEvent::from(KeyCode::Enter)) {
        ChangesAction::Open(resource) => assert_eq!(resource.status(), StatusCode::Modified),
        other => panic!("expected Open, got {:?}", other),
    }
}

#[test]
fn test_group_actions_carry_the_group() {
    let mut view = loaded_view();
    press(&mut view, ']');
    let feature = ScmTarget::Group(GroupId::pending("feature"));
    assert_eq!(press(&mut view, 'c'), ChangesAction::Commit(feature.clone()));
    assert_eq!(press(&mut view, 'u'), ChangesAction::Revert(feature.clone()));
    assert_eq!(press(&mut view, 'D'), ChangesAction::DeleteChangelist(feature));
}

#[test]
fn test_selection_follows_file_across_refresh() {
    let mut view = loaded_view();
    // Select src/new.rs
    press(&mut view, ']');
    press(&mut view, 'j');
    assert_eq!(view.selected_path(), Some(Path::new("/wc/src/new.rs")));

    // src/new.rs moved to the default group
    view.set_reconciliation(&reconciliation("A       src/new.rs\nM       src/a.rs\n"));
    assert_eq!(view.selected_index, 1);
    assert_eq!(view.selected_path(), Some(Path::new("/wc/src/new.rs")));
}

#[test]
fn test_selection_is_clamped_when_row_disappears() {
    let mut view = loaded_view();
    press(&mut view, 'G');
    view.set_reconciliation(&reconciliation("M       src/a.rs\n"));
    assert_eq!(view.selected_index, 1);
}

#[test]
fn test_global_keys_are_not_consumed() {
    let mut view = loaded_view();
    assert_eq!(press(&mut view, 'q'), ChangesAction::None);
    assert_eq!(press(&mut view, 'C'), ChangesAction::CommitChangelist);
    assert_eq!(press(&mut view, 'U'), ChangesAction::RevertWorkingCopy);
    assert_eq!(press(&mut view, 'p'), ChangesAction::UpdateWorkingCopy);
    assert_eq!(press(&mut view, 'i'), ChangesAction::Info);
}

#[test]
fn test_deleted_resource_is_crossed_out() {
    let view = loaded_view();
    let line = render::build_row_line(&view.rows()[2], false);
    let path_span = line.spans.last().unwrap();
    assert_eq!(path_span.content, "old.rs");
    assert!(path_span.style.add_modifier.contains(Modifier::CROSSED_OUT));
}

#[test]
fn test_render_shows_groups() {
    let mut view = loaded_view();
    let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), None))
        .unwrap();
    let buffer = terminal.backend().buffer();
    let screen: Vec<String> = (0..12)
        .map(|y| (0..50).map(|x| buffer[(x, y)].symbol().to_string()).collect())
        .collect();

    assert!(screen[0].contains("svn-panel - Changes"));
    assert!(screen[1].contains("▶ ▾ default (2)"));
    assert!(screen[2].contains("● M src/a.rs"));
    assert!(screen[4].contains("▾ feature (1)"));
    assert!(screen[7].contains("? ? notes.txt"));
}
