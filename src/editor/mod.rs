//! Editor-Layer: Eigentümer von Pfad, Overlay und History.
//!
//! Der `PathEditor` führt alle Mutationen aus, stellt die entstehenden
//! Events synchron dem Overlay zu und spielt Typ-Korrekturen des Validators
//! über die Sequenz zurück. Er ist damit der "externe Eigentümer" aus Sicht
//! des Overlays: Lösch-Anfragen laufen als Intent hier auf und werden unter
//! Beachtung der Pfad-Schutzregeln ausgeführt.

pub mod history;
mod intent;

#[cfg(test)]
mod tests;

pub use history::{EditHistory, Snapshot};
pub use intent::EditorIntent;

use crate::core::{ControlPointId, PathChange, PathType, SliderPath};
use crate::overlay::ControlPointOverlay;
use glam::Vec2;
use std::collections::HashSet;

/// Mindestanzahl verbleibender Punkte — ein Slider braucht Start und Ende.
const MIN_REMAINING_POINTS: usize = 2;

/// Maximale Undo-Tiefe
const HISTORY_DEPTH: usize = 200;

/// Eigentümer eines Slider-Pfads mit Overlay und Undo/Redo-History.
pub struct PathEditor {
    path: SliderPath,
    overlay: ControlPointOverlay,
    history: EditHistory,
}

impl PathEditor {
    /// Erstellt den Editor für den übergebenen Pfad.
    ///
    /// `selection_enabled` steuert, ob das Overlay interaktive Selektion
    /// zulässt (false = reines Anzeige-Overlay).
    pub fn new(path: SliderPath, selection_enabled: bool) -> Self {
        let overlay = ControlPointOverlay::new(&path, selection_enabled);
        Self {
            path,
            overlay,
            history: EditHistory::new_with_capacity(HISTORY_DEPTH),
        }
    }

    /// Read-only Zugriff auf den Pfad
    pub fn path(&self) -> &SliderPath {
        &self.path
    }

    /// Read-only Zugriff auf das Overlay (für den Render-Layer)
    pub fn overlay(&self) -> &ControlPointOverlay {
        &self.overlay
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Anzahl der aufgezeichneten Undo-Schritte (für UI-Anzeige)
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            points: self.path.points().copied().collect(),
            selected: self
                .overlay
                .selected_control_points(&self.path)
                .iter()
                .map(|point| point.id)
                .collect(),
        }
    }

    /// Stellt einen Event-Block synchron dem Overlay zu und spielt
    /// Typ-Korrekturen zurück, bis keine mehr anfallen (konvergiert, da die
    /// Herabstufung idempotent ist).
    fn dispatch(&mut self, changes: Vec<PathChange>) {
        let mut corrections = Vec::new();
        for change in &changes {
            corrections.extend(self.overlay.apply(&self.path, change));
        }

        while !corrections.is_empty() {
            let mut followup = Vec::new();
            for correction in corrections {
                if let Some(change) = self
                    .path
                    .set_path_type(correction.id, Some(correction.new_type))
                {
                    followup.extend(self.overlay.apply(&self.path, &change));
                }
            }
            corrections = followup;
        }

        self.overlay.debug_validate(&self.path);
    }

    // ── Mutationen ─────────────────────────────────────────────

    /// Hängt einen Punkt ans Ende an und gibt seine ID zurück.
    pub fn append_point(&mut self, position: Vec2, path_type: Option<PathType>) -> ControlPointId {
        let snapshot = self.snapshot();
        self.history.begin_change(snapshot);
        let (id, change) = self.path.append(position, path_type);
        self.dispatch(vec![change]);
        self.history.end_change();
        id
    }

    /// Fügt einen Block von Punkten ab `index` ein.
    pub fn insert_points(&mut self, index: usize, entries: &[(Vec2, Option<PathType>)]) -> bool {
        let snapshot = self.snapshot();
        let Some(change) = self.path.insert_at(index, entries) else {
            return false;
        };
        self.history.begin_change(snapshot);
        self.dispatch(vec![change]);
        self.history.end_change();
        true
    }

    /// Entfernt Kontrollpunkte per Identität unter Beachtung der Schutzregeln.
    ///
    /// Gibt die Anzahl der tatsächlich entfernten Punkte zurück.
    pub fn remove_points(&mut self, ids: &[ControlPointId]) -> usize {
        let allowed = self.guard_removal(ids);
        if allowed.is_empty() {
            return 0;
        }
        let snapshot = self.snapshot();
        self.history.begin_change(snapshot);
        let removed = self.remove_allowed(&allowed);
        self.history.end_change();
        removed
    }

    fn remove_allowed(&mut self, ids: &[ControlPointId]) -> usize {
        let changes = self.path.remove_by_ids(ids);
        let removed = changes.iter().map(PathChange::len).sum();
        self.dispatch(changes);
        removed
    }

    /// Schutzregel des Eigentümers: der erste Punkt wird nie entfernt und es
    /// verbleiben mindestens zwei Punkte im Pfad. Überzählige IDs am Ende
    /// der Anfrage werden verworfen.
    fn guard_removal(&self, ids: &[ControlPointId]) -> Vec<ControlPointId> {
        let mut seen = HashSet::new();
        let mut allowed: Vec<ControlPointId> = ids
            .iter()
            .copied()
            .filter(|&id| self.path.contains(id))
            .filter(|&id| self.path.index_of(id) != Some(0))
            .filter(|&id| seen.insert(id))
            .collect();

        let max_removable = self.path.len().saturating_sub(MIN_REMAINING_POINTS);
        if allowed.len() > max_removable {
            log::debug!(
                "Lösch-Anfrage auf {max_removable} Punkt(e) gekürzt (Minimum {MIN_REMAINING_POINTS} verbleibend)"
            );
            allowed.truncate(max_removable);
        }
        allowed
    }

    /// Setzt die Position eines Punkts. Gibt `false` zurück wenn der Punkt
    /// unbekannt ist oder sich der Wert nicht ändert.
    pub fn set_point_position(&mut self, id: ControlPointId, position: Vec2) -> bool {
        let snapshot = self.snapshot();
        let Some(change) = self.path.set_position(id, position) else {
            return false;
        };
        self.history.begin_change(snapshot);
        self.dispatch(vec![change]);
        self.history.end_change();
        true
    }

    /// Setzt den Segment-Typ eines Punkts (`None` = Typ erben).
    pub fn set_point_type(&mut self, id: ControlPointId, path_type: Option<PathType>) -> bool {
        let snapshot = self.snapshot();
        let Some(change) = self.path.set_path_type(id, path_type) else {
            return false;
        };
        self.history.begin_change(snapshot);
        self.dispatch(vec![change]);
        self.history.end_change();
        true
    }

    /// Setzt den Kurventyp aller selektierten Punkte in einem Change-Bracket.
    ///
    /// Gibt die Anzahl der geänderten Punkte zurück.
    pub fn set_type_of_selected(&mut self, path_type: Option<PathType>) -> usize {
        let selected = self.overlay.selected_control_points(&self.path);
        if selected.is_empty() || selected.iter().all(|point| point.path_type == path_type) {
            return 0;
        }

        let snapshot = self.snapshot();
        self.history.begin_change(snapshot);
        let mut changed = 0;
        for point in &selected {
            if let Some(change) = self.path.set_path_type(point.id, path_type) {
                changed += 1;
                self.dispatch(vec![change]);
            }
        }
        self.history.end_change();
        changed
    }

    // ── Selektion & Löschen ────────────────────────────────────

    /// Selektiert ein Piece per Klick (siehe `ControlPointOverlay::select_piece`).
    pub fn select_piece(&mut self, id: ControlPointId, additive: bool) -> bool {
        self.overlay.select_piece(id, additive)
    }

    /// Klick auf leere Fläche: hebt jede Selektion auf.
    pub fn clear_selection(&mut self) {
        self.overlay.clear_selection();
    }

    /// Löscht alle selektierten Kontrollpunkte.
    ///
    /// Ohne Selektion passiert nichts (insbesondere wird kein Change-Bracket
    /// geöffnet). Die Schutzregel hält den ersten Punkt und mindestens zwei
    /// verbleibende Punkte im Pfad; bleibt danach nichts Löschbares übrig,
    /// wird nur die Selektion aufgehoben. Gibt zurück ob etwas gelöscht wurde.
    pub fn delete_selected(&mut self) -> bool {
        let selected = self.overlay.selected_control_points(&self.path);
        if selected.is_empty() {
            log::debug!("Nichts zum Löschen selektiert");
            return false;
        }

        let ids: Vec<ControlPointId> = selected.iter().map(|point| point.id).collect();
        let allowed = self.guard_removal(&ids);
        if allowed.is_empty() {
            self.overlay.clear_selection();
            return false;
        }

        let snapshot = self.snapshot();
        self.history.begin_change(snapshot);
        let removed = self.remove_allowed(&allowed);
        self.history.end_change();

        // Defensiv: entfernte Identitäten könnten später neu vergeben werden
        // und dürften dann nicht selektiert wiederauftauchen
        self.overlay.clear_selection();

        log::info!("{removed} Kontrollpunkt(e) gelöscht");
        removed > 0
    }

    /// Führt einen Intent aus (Kontextmenü, Klick-Handling des Hosts).
    pub fn handle_intent(&mut self, intent: EditorIntent) {
        match intent {
            EditorIntent::SelectPieceRequested { id, additive } => {
                self.select_piece(id, additive);
            }
            EditorIntent::ClearSelectionRequested => self.clear_selection(),
            EditorIntent::DeleteSelectedRequested => {
                self.delete_selected();
            }
            EditorIntent::SetCurveTypeRequested { path_type } => {
                self.set_type_of_selected(path_type);
            }
        }
    }

    // ── Undo/Redo ──────────────────────────────────────────────

    /// Macht den letzten Undo-Schritt rückgängig.
    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        let Some(snapshot) = self.history.pop_undo_with_current(current) else {
            return false;
        };
        self.apply_snapshot(snapshot);
        true
    }

    /// Stellt den zuletzt rückgängig gemachten Schritt wieder her.
    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        let Some(snapshot) = self.history.pop_redo_with_current(current) else {
            return false;
        };
        self.apply_snapshot(snapshot);
        true
    }

    fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.path.restore(snapshot.points);
        self.overlay.rebuild(&self.path);
        self.overlay.restore_selection(&snapshot.selected);
        self.overlay.debug_validate(&self.path);
    }
}
