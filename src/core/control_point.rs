//! Repräsentiert einen Kontrollpunkt eines Slider-Pfads.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kurventyp eines Pfad-Segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathType {
    /// Geradenzug durch alle Punkte des Segments
    Linear,
    /// Kreisbogen durch exakt drei Punkte
    PerfectCurve,
    /// Bézier-Kurve beliebigen Grades
    Bezier,
    /// Catmull-Rom-Spline
    Catmull,
}

/// Stabile Identität eines Kontrollpunkts, unabhängig von seiner Sequenz-Position.
///
/// Back-Referenzen aus Piece-/Connection-Elementen verwenden ausschließlich
/// diese ID, nie Indizes oder Zeiger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ControlPointId(pub u64);

/// Ein Kontrollpunkt des Slider-Pfads
///
/// `path_type = Some(..)` markiert den Punkt als Segment-Start: das Segment
/// läuft von hier bis einschließlich zum nächsten Segment-Start.
/// `path_type = None` bedeutet, der Punkt gehört zum laufenden Segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Stabile Identität (von der Sequenz vergeben)
    pub id: ControlPointId,
    /// Position in Playfield-Koordinaten
    pub position: Vec2,
    /// Optionaler Segment-Typ (Some = Segment-Start)
    pub path_type: Option<PathType>,
}

impl ControlPoint {
    /// Erstellt einen neuen Kontrollpunkt
    pub fn new(id: ControlPointId, position: Vec2, path_type: Option<PathType>) -> Self {
        Self {
            id,
            position,
            path_type,
        }
    }

    /// Prüft ob der Punkt ein Segment beginnt
    pub fn is_segment_start(&self) -> bool {
        self.path_type.is_some()
    }
}
