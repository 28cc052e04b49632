use super::{EditorIntent, PathEditor};
use crate::core::{ControlPointId, PathType, SliderPath};
use glam::Vec2;

fn editor_with_line(count: usize) -> PathEditor {
    let entries: Vec<(Vec2, Option<PathType>)> = (0..count)
        .map(|i| {
            let ty = if i == 0 { Some(PathType::Bezier) } else { None };
            (Vec2::new(i as f32 * 10.0, 0.0), ty)
        })
        .collect();
    PathEditor::new(SliderPath::with_points(&entries), true)
}

fn id_at(editor: &PathEditor, index: usize) -> ControlPointId {
    editor.path().point_at(index).expect("Punkt erwartet").id
}

// ── Mutationen & Synchronisation ───────────────────────────────

#[test]
fn append_keeps_overlay_in_sync() {
    let mut editor = editor_with_line(2);
    let id = editor.append_point(Vec2::new(20.0, 0.0), None);

    assert_eq!(editor.path().len(), 3);
    assert_eq!(editor.overlay().pieces().len(), 3);
    assert_eq!(editor.overlay().connections().len(), 3);
    assert_eq!(editor.path().index_of(id), Some(2));
    assert!(editor.can_undo());
}

#[test]
fn insert_points_records_single_undo_step() {
    let mut editor = editor_with_line(3);
    assert!(editor.insert_points(
        1,
        &[(Vec2::new(1.0, 1.0), None), (Vec2::new(2.0, 2.0), None)],
    ));

    assert_eq!(editor.path().len(), 5);
    assert_eq!(editor.undo_depth(), 1);

    assert!(editor.undo());
    assert_eq!(editor.path().len(), 3);
}

#[test]
fn insert_with_empty_block_records_nothing() {
    let mut editor = editor_with_line(3);
    assert!(!editor.insert_points(1, &[]));
    assert_eq!(editor.undo_depth(), 0);
}

#[test]
fn set_point_position_with_same_value_records_nothing() {
    let mut editor = editor_with_line(3);
    let id = id_at(&editor, 1);

    assert!(!editor.set_point_position(id, Vec2::new(10.0, 0.0)));
    assert_eq!(editor.undo_depth(), 0);

    assert!(editor.set_point_position(id, Vec2::new(10.0, 5.0)));
    assert_eq!(editor.undo_depth(), 1);
}

// ── Schutzregeln ───────────────────────────────────────────────

#[test]
fn head_point_survives_removal_request() {
    let mut editor = editor_with_line(4);
    let head = id_at(&editor, 0);
    let second = id_at(&editor, 1);

    let removed = editor.remove_points(&[head, second]);
    assert_eq!(removed, 1);
    assert!(editor.path().contains(head));
    assert!(!editor.path().contains(second));
}

#[test]
fn removal_request_is_truncated_to_keep_two_points() {
    let mut editor = editor_with_line(4);
    let ids: Vec<ControlPointId> = (1..4).map(|i| id_at(&editor, i)).collect();

    // Alle drei hinteren Punkte angefragt — nur zwei dürfen weg
    let removed = editor.remove_points(&ids);
    assert_eq!(removed, 2);
    assert_eq!(editor.path().len(), 2);
}

#[test]
fn removal_of_unknown_ids_is_noop() {
    let mut editor = editor_with_line(3);
    assert_eq!(editor.remove_points(&[ControlPointId(99)]), 0);
    assert_eq!(editor.undo_depth(), 0);
}

// ── Löschen über Selektion ─────────────────────────────────────

#[test]
fn delete_with_zero_selected_returns_failure_without_bracket() {
    let mut editor = editor_with_line(4);
    assert!(!editor.delete_selected());
    assert_eq!(editor.undo_depth(), 0);
    assert!(!editor.can_undo());
}

#[test]
fn delete_selected_removes_points_and_clears_selection() {
    let mut editor = editor_with_line(4);
    let id_b = id_at(&editor, 1);
    let id_c = id_at(&editor, 2);

    editor.select_piece(id_b, false);
    editor.select_piece(id_c, true);

    assert!(editor.delete_selected());
    assert_eq!(editor.path().len(), 2);
    assert!(!editor.overlay().any_selected());
    assert_eq!(editor.undo_depth(), 1);
}

#[test]
fn delete_with_only_head_selected_fails_and_clears_selection() {
    let mut editor = editor_with_line(3);
    editor.select_piece(id_at(&editor, 0), false);

    assert!(!editor.delete_selected());
    assert_eq!(editor.path().len(), 3);
    assert!(!editor.overlay().any_selected());
    assert_eq!(editor.undo_depth(), 0);
}

// ── Undo/Redo ──────────────────────────────────────────────────

#[test]
fn undo_restores_points_and_selection() {
    let mut editor = editor_with_line(4);
    let id_b = id_at(&editor, 1);
    editor.select_piece(id_b, false);

    assert!(editor.delete_selected());
    assert!(!editor.path().contains(id_b));

    assert!(editor.undo());
    assert!(editor.path().contains(id_b));
    assert_eq!(editor.path().len(), 4);
    // Selektion aus dem Snapshot vor der Löschung
    let selected = editor.overlay().selected_control_points(editor.path());
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, id_b);
}

#[test]
fn redo_restores_undone_deletion() {
    let mut editor = editor_with_line(4);
    let id_b = id_at(&editor, 1);
    editor.select_piece(id_b, false);
    editor.delete_selected();

    assert!(editor.undo());
    assert!(editor.redo());
    assert_eq!(editor.path().len(), 3);
    assert!(!editor.path().contains(id_b));
}

#[test]
fn undo_on_empty_history_returns_false() {
    let mut editor = editor_with_line(2);
    assert!(!editor.undo());
    assert!(!editor.redo());
}

#[test]
fn bulk_type_change_is_one_undo_step() {
    let mut editor = editor_with_line(4);
    editor.select_piece(id_at(&editor, 1), false);
    editor.select_piece(id_at(&editor, 2), true);

    let changed = editor.set_type_of_selected(Some(PathType::Linear));
    assert_eq!(changed, 2);
    assert_eq!(editor.undo_depth(), 1);

    assert!(editor.undo());
    assert_eq!(editor.path().point_at(1).unwrap().path_type, None);
    assert_eq!(editor.path().point_at(2).unwrap().path_type, None);
}

// ── Automatische Typ-Korrektur ─────────────────────────────────

#[test]
fn dragging_arc_point_onto_chord_downgrades_segment() {
    let mut editor = PathEditor::new(
        SliderPath::with_points(&[
            (Vec2::new(0.0, 0.0), Some(PathType::PerfectCurve)),
            (Vec2::new(5.0, 5.0), None),
            (Vec2::new(10.0, 0.0), None),
        ]),
        true,
    );
    let head = id_at(&editor, 0);
    let id_b = id_at(&editor, 1);

    // Mittelpunkt auf die Sehne ziehen → Kreisbogen entartet
    assert!(editor.set_point_position(id_b, Vec2::new(5.0, 0.0)));
    assert_eq!(
        editor.path().point(head).unwrap().path_type,
        Some(PathType::Bezier)
    );

    // Korrektur und Positions-Änderung bilden EINEN Undo-Schritt
    assert_eq!(editor.undo_depth(), 1);
    assert!(editor.undo());
    assert_eq!(
        editor.path().point(head).unwrap().path_type,
        Some(PathType::PerfectCurve)
    );
    assert_eq!(
        editor.path().point(id_b).unwrap().position,
        Vec2::new(5.0, 5.0)
    );
}

#[test]
fn setting_perfect_curve_on_collinear_segment_downgrades_immediately() {
    let mut editor = editor_with_line(3);
    let head = id_at(&editor, 0);
    editor.select_piece(head, false);

    editor.set_type_of_selected(Some(PathType::PerfectCurve));
    assert_eq!(
        editor.path().point(head).unwrap().path_type,
        Some(PathType::Bezier)
    );
}

// ── Intent-Routing ─────────────────────────────────────────────

#[test]
fn intents_drive_selection_and_deletion() {
    let mut editor = editor_with_line(4);
    let id_b = id_at(&editor, 1);
    let id_c = id_at(&editor, 2);

    editor.handle_intent(EditorIntent::SelectPieceRequested {
        id: id_b,
        additive: false,
    });
    editor.handle_intent(EditorIntent::SelectPieceRequested {
        id: id_c,
        additive: true,
    });
    assert_eq!(editor.overlay().selected_count(), 2);

    editor.handle_intent(EditorIntent::DeleteSelectedRequested);
    assert_eq!(editor.path().len(), 2);
    assert!(!editor.overlay().any_selected());
}

#[test]
fn clear_selection_intent_resets_flags() {
    let mut editor = editor_with_line(3);
    editor.select_piece(id_at(&editor, 1), false);

    editor.handle_intent(EditorIntent::ClearSelectionRequested);
    assert!(!editor.overlay().any_selected());
}

#[test]
fn curve_type_intent_updates_selected_points() {
    let mut editor = editor_with_line(3);
    let id_b = id_at(&editor, 1);
    editor.select_piece(id_b, false);

    editor.handle_intent(EditorIntent::SetCurveTypeRequested {
        path_type: Some(PathType::Catmull),
    });
    assert_eq!(
        editor.path().point(id_b).unwrap().path_type,
        Some(PathType::Catmull)
    );
}
