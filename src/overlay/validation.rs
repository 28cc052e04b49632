//! Pfadtyp-Validierung: stuft geometrisch entartete PerfectCurve-Segmente auf Bézier herab.

use crate::core::{ControlPoint, ControlPointId, PathType, SliderPath};
use crate::shared::arc_geometry;

/// Korrektur-Auftrag des Validators: Segment-Start `id` wird auf `new_type` umgestellt.
///
/// Der Validator mutiert die Sequenz nicht selbst — der Eigentümer spielt
/// die Korrektur über `SliderPath::set_path_type` zurück. Das dabei
/// entstehende `PointChanged`-Event stößt die erneute Validierung an;
/// die Korrektur ist idempotent, der Zyklus konvergiert nach einem Durchlauf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCorrection {
    /// Segment-Start, dessen Typ korrigiert wird
    pub id: ControlPointId,
    /// Neuer Typ (derzeit immer `Bezier`)
    pub new_type: PathType,
}

/// Prüft alle Segmente des Pfads und sammelt notwendige Typ-Korrekturen.
///
/// Ein Segment läuft von einem Segment-Start (Punkt mit Typ) bis
/// einschließlich zum nächsten Segment-Start. Geometrisch geprüft werden
/// nur PerfectCurve-Segmente mit exakt drei Punkten — Kreisbögen sind
/// ausschließlich über drei Punkte definiert.
pub fn ensure_valid_path_types(path: &SliderPath) -> Vec<TypeCorrection> {
    let mut corrections = Vec::new();
    let mut segment: Vec<&ControlPoint> = Vec::new();

    for point in path.points() {
        if point.is_segment_start() && !segment.is_empty() {
            // Der neue Segment-Start schließt das laufende Segment ab
            segment.push(point);
            check_segment(&segment, &mut corrections);
            segment.clear();
        }
        segment.push(point);
    }
    check_segment(&segment, &mut corrections);

    corrections
}

fn check_segment(segment: &[&ControlPoint], corrections: &mut Vec<TypeCorrection>) {
    if segment.len() != 3 {
        return;
    }
    let start = segment[0];
    if start.path_type != Some(PathType::PerfectCurve) {
        return;
    }

    let drawable = arc_geometry::is_drawable_arc(
        segment[0].position,
        segment[1].position,
        segment[2].position,
    );
    if !drawable {
        log::debug!(
            "PerfectCurve-Segment ab {:?} nicht zeichenbar — Herabstufung auf Bézier",
            start.id
        );
        corrections.push(TypeCorrection {
            id: start.id,
            new_type: PathType::Bezier,
        });
    }
}
