//! Overlay-Layer: hält die abgeleiteten Piece-/Connection-Sammlungen in
//! Gleichschritt mit der Kontrollpunkt-Sequenz.
//!
//! Struktur:
//! - `mod.rs`: `ControlPointOverlay` — Synchronisierer + Selektions-Logik
//! - `elements.rs`: `PieceElement` / `ConnectionElement`
//! - `validation.rs`: Pfadtyp-Validierung mit `TypeCorrection`-Aufträgen

mod elements;
pub mod validation;


pub use elements::{ConnectionElement, PieceElement};
pub use validation::TypeCorrection;

use crate::core::{ControlPoint, ControlPointId, PathChange, SliderPath};

/// Synchronisierer für die abgeleiteten Element-Sammlungen eines Slider-Pfads.
///
/// Invariante (nach jedem angewendeten Event):
/// `|pieces| == |connections| == |Kontrollpunkte|`, und die Connection mit
/// `control_point_index == i` referenziert den Punkt, der aktuell am
/// Sequenz-Index `i` steht.
///
/// Das Overlay besitzt die Kontrollpunkte nicht — es hält ausschließlich
/// ID-Back-Referenzen und bekommt die Sequenz bei jedem Event als Sicht
/// hereingereicht.
pub struct ControlPointOverlay {
    pieces: Vec<PieceElement>,
    connections: Vec<ConnectionElement>,
    /// Ob interaktive Selektion aktiviert ist (false = Anzeige-Overlay)
    selection_enabled: bool,
}

impl ControlPointOverlay {
    /// Erstellt das Overlay für einen Pfad und baut den Initialbestand auf.
    pub fn new(path: &SliderPath, selection_enabled: bool) -> Self {
        let mut overlay = Self {
            pieces: Vec::new(),
            connections: Vec::new(),
            selection_enabled,
        };
        overlay.rebuild(path);
        overlay
    }

    /// Baut beide abgeleiteten Sammlungen aus dem aktuellen Pfadbestand neu
    /// auf. Alle Selektions-Flags werden zurückgesetzt.
    pub fn rebuild(&mut self, path: &SliderPath) {
        self.pieces.clear();
        self.connections.clear();
        for (index, point) in path.points().enumerate() {
            self.pieces.push(PieceElement::new(point.id));
            self.connections
                .push(ConnectionElement::new(index, point.id));
        }
    }

    /// Read-only Zugriff für den Render-Layer
    pub fn pieces(&self) -> &[PieceElement] {
        &self.pieces
    }

    /// Read-only Zugriff für den Render-Layer
    pub fn connections(&self) -> &[ConnectionElement] {
        &self.connections
    }

    /// Ob interaktive Selektion aktiviert ist
    pub fn selection_enabled(&self) -> bool {
        self.selection_enabled
    }

    /// Wendet ein Sequenz-Event an und hält die Sammlungen synchron.
    ///
    /// Gibt die vom Pfadtyp-Validator angeforderten Korrekturen zurück;
    /// der Eigentümer spielt sie über die Sequenz zurück (siehe
    /// `validation::TypeCorrection`).
    pub fn apply(&mut self, path: &SliderPath, change: &PathChange) -> Vec<TypeCorrection> {
        match change {
            PathChange::Inserted { index, ids } => {
                self.on_inserted(*index, ids);
                Vec::new()
            }
            PathChange::Removed { index, points } => {
                self.on_removed(*index, points);
                Vec::new()
            }
            PathChange::PointChanged { id } => self.on_point_changed(path, *id),
        }
    }

    fn on_inserted(&mut self, index: usize, ids: &[ControlPointId]) {
        // Index-Verschiebung MUSS vor dem Anlegen der neuen Elemente laufen,
        // sonst würden die frisch erstellten Connections mitverschoben.
        if index < self.pieces.len() {
            let count = ids.len();
            for connection in &mut self.connections {
                if connection.control_point_index >= index {
                    connection.control_point_index += count;
                }
            }
        }

        for (offset, &id) in ids.iter().enumerate() {
            self.pieces.push(PieceElement::new(id));
            self.connections
                .push(ConnectionElement::new(index + offset, id));
        }
    }

    fn on_removed(&mut self, index: usize, points: &[ControlPoint]) {
        for point in points {
            // Identitäts-Suche: Positions-/Index-Angaben können hier bereits
            // veraltet sein
            match self
                .pieces
                .iter()
                .position(|piece| piece.control_point == point.id)
            {
                Some(i) => {
                    self.pieces.remove(i);
                }
                None => {
                    debug_assert!(false, "Kein Piece für Kontrollpunkt {:?}", point.id);
                    log::warn!("Kein Piece für Kontrollpunkt {:?} — übersprungen", point.id);
                }
            }
            match self
                .connections
                .iter()
                .position(|connection| connection.control_point == point.id)
            {
                Some(i) => {
                    self.connections.remove(i);
                }
                None => {
                    debug_assert!(false, "Keine Connection für Kontrollpunkt {:?}", point.id);
                    log::warn!(
                        "Keine Connection für Kontrollpunkt {:?} — übersprungen",
                        point.id
                    );
                }
            }
        }

        // Grenzprüfung gegen den Bestand NACH der Entfernung: eine reine
        // Tail-Entfernung verschiebt nichts mehr.
        if index < self.pieces.len() {
            let count = points.len();
            for connection in &mut self.connections {
                if connection.control_point_index >= index {
                    connection.control_point_index -= count;
                }
            }
        }
    }

    fn on_point_changed(&mut self, path: &SliderPath, id: ControlPointId) -> Vec<TypeCorrection> {
        if !self.is_watching(id) {
            debug_assert!(false, "PointChanged für unbeobachteten Punkt {id:?}");
            log::warn!("PointChanged für unbeobachteten Punkt {id:?} — ignoriert");
            return Vec::new();
        }
        validation::ensure_valid_path_types(path)
    }

    /// Prüft ob der Punkt von diesem Overlay beobachtet wird.
    ///
    /// Die Beobachtung beginnt mit dem `Inserted`-Event des Punkts und endet
    /// mit seinem `Removed`-Event — das Piece selbst ist die Registrierung.
    fn is_watching(&self, id: ControlPointId) -> bool {
        self.pieces.iter().any(|piece| piece.control_point == id)
    }

    // ── Selektion ──────────────────────────────────────────────

    /// Selektiert ein Piece per Klick.
    ///
    /// Ohne `additive` wird die bisherige Selektion verworfen und nur das
    /// Ziel selektiert; mit `additive` (Modifier-Taste) wird ausschließlich
    /// das Ziel umgeschaltet. Gibt `false` zurück wenn Selektion deaktiviert
    /// ist oder kein Piece zur ID existiert.
    pub fn select_piece(&mut self, id: ControlPointId, additive: bool) -> bool {
        if !self.selection_enabled {
            return false;
        }
        let Some(target) = self
            .pieces
            .iter()
            .position(|piece| piece.control_point == id)
        else {
            log::debug!("Selektion ignoriert: kein Piece für {id:?}");
            return false;
        };

        if additive {
            self.pieces[target].selected = !self.pieces[target].selected;
        } else {
            for (i, piece) in self.pieces.iter_mut().enumerate() {
                piece.selected = i == target;
            }
        }
        true
    }

    /// Klick auf leere Fläche: hebt jede Selektion auf.
    pub fn clear_selection(&mut self) {
        for piece in &mut self.pieces {
            piece.selected = false;
        }
    }

    /// Anzahl der selektierten Pieces
    pub fn selected_count(&self) -> usize {
        self.pieces.iter().filter(|piece| piece.selected).count()
    }

    /// Prüft ob mindestens ein Piece selektiert ist
    pub fn any_selected(&self) -> bool {
        self.pieces.iter().any(|piece| piece.selected)
    }

    /// Sammelt die Kontrollpunkte aller selektierten Pieces (deterministische
    /// Erstellungs-Reihenfolge). Pieces ohne lebenden Punkt werden übersprungen.
    pub fn selected_control_points(&self, path: &SliderPath) -> Vec<ControlPoint> {
        self.pieces
            .iter()
            .filter(|piece| piece.selected)
            .filter_map(|piece| path.point(piece.control_point).copied())
            .collect()
    }

    /// Stellt Selektions-Flags aus einem Snapshot wieder her (Undo/Redo).
    pub fn restore_selection(&mut self, ids: &[ControlPointId]) {
        if !self.selection_enabled {
            return;
        }
        for piece in &mut self.pieces {
            piece.selected = ids.contains(&piece.control_point);
        }
    }

    /// Invarianten-Prüfung — nur in Debug-Builds aktiv.
    ///
    /// Wird vom Eigentümer nach einem vollständig zugestellten Event-Block
    /// aufgerufen. Innerhalb eines Blocks (mehrere `Removed`-Events einer
    /// Batch-Entfernung) stimmen Zwischenstände bewusst noch nicht mit dem
    /// Endbestand der Sequenz überein.
    pub fn debug_validate(&self, path: &SliderPath) {
        debug_assert_eq!(
            self.pieces.len(),
            path.len(),
            "Piece-Anzahl weicht von Punktanzahl ab"
        );
        debug_assert_eq!(
            self.connections.len(),
            path.len(),
            "Connection-Anzahl weicht von Punktanzahl ab"
        );
        #[cfg(debug_assertions)]
        for connection in &self.connections {
            debug_assert_eq!(
                path.index_of(connection.control_point),
                Some(connection.control_point_index),
                "Connection-Index {} referenziert nicht den Punkt am Sequenz-Index",
                connection.control_point_index
            );
        }
    }
}
