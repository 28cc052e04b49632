//! Typisierte Änderungs-Events der Kontrollpunkt-Sequenz.

use super::{ControlPoint, ControlPointId};

/// Strukturierte Änderung der Kontrollpunkt-Sequenz.
///
/// Jede mutierende Operation auf `SliderPath` gibt ihre Änderung(en) als
/// Wert zurück; der Aufrufer reicht sie synchron an die Abonnenten weiter
/// (z.B. `ControlPointOverlay::apply`). Es gibt keine Warteschlange über
/// den mutierenden Aufruf hinaus.
#[derive(Debug, Clone, PartialEq)]
pub enum PathChange {
    /// Punkte wurden als zusammenhängender Block ab `index` eingefügt.
    Inserted {
        /// Start-Index des Blocks in der Sequenz
        index: usize,
        /// IDs der neuen Punkte, in Sequenz-Reihenfolge
        ids: Vec<ControlPointId>,
    },
    /// Ein zusammenhängender Block ab `index` wurde entfernt.
    ///
    /// `points` ist ein Snapshot der entfernten Punkte (inkl. ID) — die
    /// Abonnenten räumen ihre abgeleiteten Elemente per Identität ab, da
    /// Index-Angaben dort bereits veraltet sein können.
    Removed {
        /// Start-Index des Blocks zum Zeitpunkt der Entfernung
        index: usize,
        /// Entfernte Punkte in ihrer bisherigen Reihenfolge
        points: Vec<ControlPoint>,
    },
    /// Position oder Typ eines Punkts hat sich geändert.
    ///
    /// Wird nur emittiert wenn sich der Feldwert tatsächlich geändert hat.
    PointChanged {
        /// ID des geänderten Punkts
        id: ControlPointId,
    },
}

impl PathChange {
    /// Anzahl der von diesem Event betroffenen Punkte
    pub fn len(&self) -> usize {
        match self {
            PathChange::Inserted { ids, .. } => ids.len(),
            PathChange::Removed { points, .. } => points.len(),
            PathChange::PointChanged { .. } => 1,
        }
    }

    /// Prüft ob das Event keine Punkte betrifft (leerer Block)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
