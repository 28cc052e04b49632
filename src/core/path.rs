//! Die zentrale SliderPath-Datenstruktur: geordnete Kontrollpunkt-Sequenz mit Änderungs-Events.

use super::{ControlPoint, ControlPointId, PathChange, PathType};
use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Geordnete, identitäts-adressierbare Sequenz aller Kontrollpunkte eines Sliders.
///
/// Die Einfüge-Reihenfolge ist signifikant — sie definiert den Pfadverlauf.
/// Jede mutierende Operation gibt ihre Änderung als `PathChange` zurück;
/// der Aufrufer stellt die synchrone Zustellung an die Abonnenten sicher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderPath {
    /// Alle Kontrollpunkte, indexiert nach ID, in Sequenz-Reihenfolge
    points: IndexMap<ControlPointId, ControlPoint>,
    /// Nächste zu vergebende ID — monoton, IDs werden nie wiederverwendet
    next_id: u64,
}

impl SliderPath {
    /// Erstellt einen leeren Pfad
    pub fn new() -> Self {
        Self {
            points: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Erstellt einen Pfad aus Positions-/Typ-Paaren (ohne Events, für den Initialbestand)
    pub fn with_points(entries: &[(Vec2, Option<PathType>)]) -> Self {
        let mut path = Self::new();
        for &(position, path_type) in entries {
            let id = path.allocate_id();
            path.points
                .insert(id, ControlPoint::new(id, position, path_type));
        }
        path
    }

    fn allocate_id(&mut self) -> ControlPointId {
        let id = ControlPointId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Prüft ob der Pfad leer ist
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterator über alle Kontrollpunkte in Sequenz-Reihenfolge (read-only).
    pub fn points(&self) -> impl Iterator<Item = &ControlPoint> {
        self.points.values()
    }

    /// Findet einen Kontrollpunkt per ID — O(1)
    pub fn point(&self, id: ControlPointId) -> Option<&ControlPoint> {
        self.points.get(&id)
    }

    /// Gibt den Kontrollpunkt am Sequenz-Index zurück
    pub fn point_at(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get_index(index).map(|(_, point)| point)
    }

    /// Gibt den aktuellen Sequenz-Index eines Punkts zurück — O(1)
    pub fn index_of(&self, id: ControlPointId) -> Option<usize> {
        self.points.get_index_of(&id)
    }

    /// Prüft ob ein Punkt mit dieser ID existiert
    pub fn contains(&self, id: ControlPointId) -> bool {
        self.points.contains_key(&id)
    }

    /// Hängt einen Punkt ans Ende an und gibt seine ID samt Event zurück
    pub fn append(
        &mut self,
        position: Vec2,
        path_type: Option<PathType>,
    ) -> (ControlPointId, PathChange) {
        let index = self.points.len();
        let id = self.allocate_id();
        self.points
            .insert(id, ControlPoint::new(id, position, path_type));
        (
            id,
            PathChange::Inserted {
                index,
                ids: vec![id],
            },
        )
    }

    /// Fügt einen Block von Punkten ab `index` ein.
    ///
    /// Gibt `None` zurück wenn der Block leer ist oder der Index außerhalb
    /// der Sequenz liegt (Logik-Fehler des Aufrufers, kein Laufzeit-Fehlerpfad).
    pub fn insert_at(
        &mut self,
        index: usize,
        entries: &[(Vec2, Option<PathType>)],
    ) -> Option<PathChange> {
        if entries.is_empty() {
            return None;
        }
        if index > self.points.len() {
            debug_assert!(
                false,
                "insert_at: Index {index} außerhalb der Sequenz (len {})",
                self.points.len()
            );
            log::warn!("Einfügen verworfen: Index {index} außerhalb der Sequenz");
            return None;
        }

        let mut ids = Vec::with_capacity(entries.len());
        for (offset, &(position, path_type)) in entries.iter().enumerate() {
            let id = self.allocate_id();
            self.points
                .shift_insert(index + offset, id, ControlPoint::new(id, position, path_type));
            ids.push(id);
        }
        Some(PathChange::Inserted { index, ids })
    }

    /// Entfernt Punkte per Identität.
    ///
    /// Unbekannte IDs werden ignoriert. Nicht zusammenhängende Mengen werden
    /// als ein `Removed`-Event pro zusammenhängendem Block gemeldet; die
    /// Blöcke werden von hinten nach vorne entfernt, damit der Start-Index
    /// jedes Events zum Zeitpunkt seiner Emission exakt stimmt.
    pub fn remove_by_ids(&mut self, ids: &[ControlPointId]) -> Vec<PathChange> {
        let mut indices: Vec<usize> = ids
            .iter()
            .filter_map(|id| self.points.get_index_of(id))
            .collect();
        indices.sort_unstable();
        indices.dedup();

        let mut changes = Vec::new();
        let mut run_end = indices.len();
        while run_end > 0 {
            let mut run_start = run_end - 1;
            while run_start > 0 && indices[run_start - 1] + 1 == indices[run_start] {
                run_start -= 1;
            }

            let first = indices[run_start];
            let mut removed = Vec::with_capacity(run_end - run_start);
            for _ in run_start..run_end {
                // shift_remove_index erhält die Reihenfolge der übrigen Punkte
                if let Some((_, point)) = self.points.shift_remove_index(first) {
                    removed.push(point);
                }
            }
            changes.push(PathChange::Removed {
                index: first,
                points: removed,
            });

            run_end = run_start;
        }
        changes
    }

    /// Setzt die Position eines Punkts.
    ///
    /// Gibt `None` zurück wenn der Punkt unbekannt ist oder sich der Wert
    /// nicht ändert — unveränderte Zuweisungen erzeugen kein Event.
    pub fn set_position(&mut self, id: ControlPointId, position: Vec2) -> Option<PathChange> {
        let point = self.points.get_mut(&id)?;
        if point.position == position {
            return None;
        }
        point.position = position;
        Some(PathChange::PointChanged { id })
    }

    /// Setzt den Segment-Typ eines Punkts (`None` = Typ vom laufenden Segment erben).
    ///
    /// Gibt `None` zurück wenn der Punkt unbekannt ist oder sich der Wert nicht ändert.
    pub fn set_path_type(
        &mut self,
        id: ControlPointId,
        path_type: Option<PathType>,
    ) -> Option<PathChange> {
        let point = self.points.get_mut(&id)?;
        if point.path_type == path_type {
            return None;
        }
        point.path_type = path_type;
        Some(PathChange::PointChanged { id })
    }

    /// Stellt den Punktbestand aus einem Snapshot wieder her (Undo/Redo).
    ///
    /// Der ID-Zähler bleibt monoton — auch nach einem Undo werden entfernte
    /// IDs nicht neu vergeben.
    pub fn restore(&mut self, points: impl IntoIterator<Item = ControlPoint>) {
        self.points = points.into_iter().map(|p| (p.id, p)).collect();
        let max_id = self.points.keys().map(|id| id.0).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
    }
}

impl Default for SliderPath {
    fn default() -> Self {
        Self::new()
    }
}
