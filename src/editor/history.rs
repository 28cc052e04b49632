use crate::core::{ControlPoint, ControlPointId};

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile:
/// Punktbestand in Sequenz-Reihenfolge plus Selektions-IDs.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Punktbestand in Sequenz-Reihenfolge
    pub points: Vec<ControlPoint>,
    /// IDs der selektierten Pieces zum Zeitpunkt des Snapshots
    pub selected: Vec<ControlPointId>,
}

/// Undo/Redo-Manager mit Snapshotting und Change-Bracket.
///
/// Ein Bracket (`begin_change`/`end_change`) fasst alle Mutationen dazwischen
/// zu einem Undo-Schritt zusammen; verschachtelte Brackets zählen als eines.
/// Der Snapshot wird beim äußersten `begin_change` aufgenommen und beim
/// zugehörigen `end_change` auf den Undo-Stack gelegt.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
    /// Verschachtelungstiefe offener Change-Brackets
    bracket_depth: usize,
    /// Snapshot vom äußersten `begin_change`
    pending: Option<Snapshot>,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
            bracket_depth: 0,
            pending: None,
        }
    }

    /// Öffnet ein Change-Bracket. Nur das äußerste Bracket nimmt den
    /// übergebenen Zustand als Pending-Snapshot auf.
    pub fn begin_change(&mut self, current: Snapshot) {
        if self.bracket_depth == 0 {
            self.pending = Some(current);
        }
        self.bracket_depth += 1;
    }

    /// Schließt ein Change-Bracket; beim äußersten wird der Pending-Snapshot
    /// als ein Undo-Schritt aufgezeichnet.
    pub fn end_change(&mut self) {
        debug_assert!(self.bracket_depth > 0, "end_change ohne begin_change");
        if self.bracket_depth == 0 {
            log::warn!("end_change ohne offenes Bracket — ignoriert");
            return;
        }
        self.bracket_depth -= 1;
        if self.bracket_depth == 0 {
            if let Some(snapshot) = self.pending.take() {
                self.record_snapshot(snapshot);
            }
        }
    }

    /// Prüft ob aktuell ein Change-Bracket offen ist.
    pub fn in_change(&self) -> bool {
        self.bracket_depth > 0
    }

    /// Record a pre-built snapshot. Innerhalb eines offenen Brackets wird
    /// nichts aufgezeichnet — das Bracket gruppiert bereits.
    pub fn record_snapshot(&mut self, snapshot: Snapshot) {
        if self.bracket_depth > 0 {
            return;
        }
        if self.max_depth > 0 && self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl der aufgezeichneten Undo-Schritte
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(previous) = self.undo_stack.pop() {
            if self.max_depth > 0 && self.redo_stack.len() >= self.max_depth {
                self.redo_stack.remove(0);
            }
            self.redo_stack.push(current);
            Some(previous)
        } else {
            None
        }
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(next) = self.redo_stack.pop() {
            if self.max_depth > 0 && self.undo_stack.len() >= self.max_depth {
                self.undo_stack.remove(0);
            }
            self.undo_stack.push(current);
            Some(next)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PathType;
    use glam::Vec2;

    fn snapshot_with_point_count(count: usize) -> Snapshot {
        let points = (0..count)
            .map(|i| {
                let ty = if i == 0 { Some(PathType::Bezier) } else { None };
                ControlPoint::new(ControlPointId(i as u64 + 1), Vec2::new(i as f32, 0.0), ty)
            })
            .collect();
        Snapshot {
            points,
            selected: Vec::new(),
        }
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_enables_undo() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_point_count(1));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_point_count(2));

        let restored = history
            .pop_undo_with_current(snapshot_with_point_count(5))
            .expect("undo vorhanden");

        assert_eq!(restored.points.len(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_point_count(2));

        let _restored = history.pop_undo_with_current(snapshot_with_point_count(5));
        let redone = history
            .pop_redo_with_current(snapshot_with_point_count(2))
            .expect("redo vorhanden");

        assert_eq!(redone.points.len(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_point_count(1));

        let _restored = history.pop_undo_with_current(snapshot_with_point_count(3));
        assert!(history.can_redo());

        history.record_snapshot(snapshot_with_point_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(snapshot_with_point_count(i));
        }

        // Nur 3 Undo-Schritte sollten möglich sein
        let mut undo_count = 0;
        while history.can_undo() {
            history.pop_undo_with_current(snapshot_with_point_count(99));
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }

    #[test]
    fn bracket_groups_records_into_one_step() {
        let mut history = EditHistory::new_with_capacity(10);

        history.begin_change(snapshot_with_point_count(2));
        assert!(history.in_change());
        // Aufzeichnungen innerhalb des Brackets werden verschluckt
        history.record_snapshot(snapshot_with_point_count(3));
        history.record_snapshot(snapshot_with_point_count(4));
        history.end_change();

        assert!(!history.in_change());
        assert_eq!(history.undo_depth(), 1);
        let restored = history
            .pop_undo_with_current(snapshot_with_point_count(5))
            .expect("undo vorhanden");
        assert_eq!(restored.points.len(), 2);
    }

    #[test]
    fn nested_brackets_count_as_one() {
        let mut history = EditHistory::new_with_capacity(10);

        history.begin_change(snapshot_with_point_count(2));
        history.begin_change(snapshot_with_point_count(3));
        history.end_change();
        assert!(history.in_change());
        assert_eq!(history.undo_depth(), 0);

        history.end_change();
        assert_eq!(history.undo_depth(), 1);
        // Der Snapshot des ÄUSSERSTEN begin_change zählt
        let restored = history
            .pop_undo_with_current(snapshot_with_point_count(9))
            .expect("undo vorhanden");
        assert_eq!(restored.points.len(), 2);
    }

    #[test]
    fn pop_undo_on_empty_returns_none() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(history
            .pop_undo_with_current(snapshot_with_point_count(1))
            .is_none());
    }

    #[test]
    fn pop_redo_on_empty_returns_none() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(history
            .pop_redo_with_current(snapshot_with_point_count(1))
            .is_none());
    }
}
