//! Editor-Intents: Anfragen aus UI/Host ohne direkte Mutationslogik.

use crate::core::{ControlPointId, PathType};

/// Anfrage an den Editor — wird zentral von `PathEditor::handle_intent`
/// ausgeführt. Kontextmenü-Einträge tragen den Intent, den sie bei
/// Aktivierung emittieren.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorIntent {
    /// Piece per Klick selektieren (`additive` = Modifier-Taste gehalten)
    SelectPieceRequested {
        id: ControlPointId,
        additive: bool,
    },
    /// Klick auf leere Fläche: Selektion aufheben
    ClearSelectionRequested,
    /// Selektierte Kontrollpunkte löschen
    DeleteSelectedRequested,
    /// Kurventyp aller selektierten Punkte setzen (`None` = Typ erben)
    SetCurveTypeRequested { path_type: Option<PathType> },
}
