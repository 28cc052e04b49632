//! Kontextmenü-Modell für die Kontrollpunkt-Auswahl (rein datengetrieben).
//!
//! Die Variante wird beim Rechtsklick einmalig bestimmt und vom Host
//! eingefroren, bis das Menü geschlossen wird — Zustandsänderungen danach
//! verursachen kein Flackern.

use crate::core::{ControlPointId, PathType, SliderPath};
use crate::editor::EditorIntent;
use crate::overlay::ControlPointOverlay;

/// Drei-Zustands-Häkchen eines Kurventyp-Eintrags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    /// Alle selektierten Punkte tragen diesen Typ
    Checked,
    /// Einige, aber nicht alle selektierten Punkte tragen diesen Typ
    Indeterminate,
    /// Kein selektierter Punkt trägt diesen Typ
    Unchecked,
}

/// Eintrag des Kurventyp-Untermenüs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveTypeEntry {
    /// Zieltyp (`None` = Typ vom laufenden Segment erben)
    pub path_type: Option<PathType>,
    /// Häkchen-Zustand über die aktuelle Selektion
    pub check: CheckState,
}

impl CurveTypeEntry {
    /// Intent, den der Eintrag bei Aktivierung emittiert
    pub fn intent(&self) -> EditorIntent {
        EditorIntent::SetCurveTypeRequested {
            path_type: self.path_type,
        }
    }

    /// Anzeige-Label des Eintrags
    pub fn label(&self) -> &'static str {
        match self.path_type {
            None => "Erben",
            Some(PathType::Linear) => "Linear",
            Some(PathType::PerfectCurve) => "Kreisbogen",
            Some(PathType::Bezier) => "Bézier",
            Some(PathType::Catmull) => "Catmull",
        }
    }
}

/// Reihenfolge der Kurventyp-Einträge im Untermenü.
const CURVE_TYPE_ORDER: [Option<PathType>; 5] = [
    None,
    Some(PathType::Linear),
    Some(PathType::PerfectCurve),
    Some(PathType::Bezier),
    Some(PathType::Catmull),
];

/// Menü für eine nicht-leere Kontrollpunkt-Selektion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionMenu {
    /// Anzahl der selektierten Punkte (für den Lösch-Eintrag)
    pub delete_count: usize,
    /// Kurventyp-Untermenü mit Drei-Zustands-Häkchen
    pub curve_types: Vec<CurveTypeEntry>,
}

impl SelectionMenu {
    /// Label des Lösch-Eintrags
    pub fn delete_label(&self) -> String {
        format!("✂ {} Kontrollpunkt(e) löschen", self.delete_count)
    }

    /// Intent des Lösch-Eintrags
    pub fn delete_intent(&self) -> EditorIntent {
        EditorIntent::DeleteSelectedRequested
    }
}

/// Kontextabhängige Menü-Variante basierend auf Hover und Selektion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuVariant {
    /// Kein Menü: nichts gehovert oder nichts selektiert
    Hidden,
    /// Rechtsklick über einem Piece bei aktiver Selektion
    Selection(SelectionMenu),
}

/// Bestimmt die Menü-Variante beim Rechtsklick.
///
/// Aktiv nur wenn der Zeiger mindestens ein Element hovert UND mindestens
/// ein Piece selektiert ist.
pub fn determine_menu_variant(
    overlay: &ControlPointOverlay,
    path: &SliderPath,
    hovered_piece: Option<ControlPointId>,
) -> MenuVariant {
    if hovered_piece.is_none() || !overlay.any_selected() {
        return MenuVariant::Hidden;
    }

    let selected = overlay.selected_control_points(path);
    let total = selected.len();
    if total == 0 {
        return MenuVariant::Hidden;
    }

    let curve_types = CURVE_TYPE_ORDER
        .iter()
        .map(|&path_type| {
            let matching = selected
                .iter()
                .filter(|point| point.path_type == path_type)
                .count();
            let check = if matching == total {
                CheckState::Checked
            } else if matching > 0 {
                CheckState::Indeterminate
            } else {
                CheckState::Unchecked
            };
            CurveTypeEntry { path_type, check }
        })
        .collect();

    MenuVariant::Selection(SelectionMenu {
        delete_count: total,
        curve_types,
    })
}
