//! Abgeleitete visuelle Proxy-Elemente: Pieces und Connections.

use crate::core::ControlPointId;

/// Visuelles Proxy-Element für genau einen Kontrollpunkt.
///
/// Lebenszyklus: erstellt beim Einfügen des Punkts, zerstört bei dessen
/// Entfernung. Die eigene Position in der abgeleiteten Sammlung ist ohne
/// Bedeutung — die Zuordnung läuft ausschließlich über die Back-Referenz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceElement {
    /// Back-Referenz auf den Kontrollpunkt (Identität, kein Zeiger)
    pub control_point: ControlPointId,
    /// Ob das Element aktuell selektiert ist
    pub selected: bool,
}

impl PieceElement {
    /// Erstellt ein unselektiertes Piece für den Kontrollpunkt
    pub fn new(control_point: ControlPointId) -> Self {
        Self {
            control_point,
            selected: false,
        }
    }
}

/// Verbindungs-Element: der Link vom Punkt am Index `control_point_index`
/// zu seinem Nachfolger, visuell am Index verankert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionElement {
    /// Sequenz-Index des zugehörigen Kontrollpunkts — wird bei Einfügungen
    /// und Entfernungen an anderer Stelle numerisch nachgeführt
    pub control_point_index: usize,
    /// Kontrollpunkt, der bei der Erstellung am Index stand (Identität)
    pub control_point: ControlPointId,
}

impl ConnectionElement {
    /// Erstellt eine Connection am Index
    pub fn new(control_point_index: usize, control_point: ControlPointId) -> Self {
        Self {
            control_point_index,
            control_point,
        }
    }
}
