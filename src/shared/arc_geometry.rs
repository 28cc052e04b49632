//! Reine Geometrie-Prüfungen für Kreisbogen-Segmente aus drei Punkten.

use glam::Vec2;

/// Mindest-|det| für Außenbögen (der Bogen läuft den langen Weg um den Kreis).
///
/// Außenbögen werden beim Zeichnen teurer, je näher die Punkte an der
/// Kollinearität liegen — der Schwellwert ist deshalb deutlich strenger.
pub const EXTERIOR_DET_THRESHOLD: f32 = 0.05;

/// Mindest-|det| für Innenbögen — die numerische Approximation verträgt hier
/// engere Toleranzen.
pub const INTERIOR_DET_THRESHOLD: f32 = 0.001;

/// Signierte Flächen-Determinante dreier Punkte.
///
/// Null bedeutet exakt kollinear; das Vorzeichen gibt den Umlaufsinn an.
pub fn arc_determinant(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (a.x - b.x) * (b.y - c.y) - (b.x - c.x) * (a.y - b.y)
}

/// Klassifiziert den Bogen durch a→b→c als Außenbogen.
///
/// Außenbogen: eine der angrenzenden Sehnen (a→b bzw. b→c) ist länger als
/// die Diagonale a→c — der Bogen muss den langen Weg um den Kreis nehmen.
pub fn is_exterior_arc(a: Vec2, b: Vec2, c: Vec2) -> bool {
    let diagonal_sq = (a - c).length_squared();
    (a - b).length_squared() > diagonal_sq || (b - c).length_squared() > diagonal_sq
}

/// Prüft ob drei Punkte einen zeichenbaren Kreisbogen bilden.
///
/// Nahezu kollineare Punkte ergeben einen Bogen mit praktisch unendlichem
/// Radius und unbegrenzten Zeichenkosten; solche Segmente stuft der
/// Validator auf Bézier herab. Vor der Determinanten-Prüfung werden die
/// Punkte auf die maximale Vektorlänge normiert, damit die Schwellwerte
/// maßstabsunabhängig bleiben.
pub fn is_drawable_arc(a: Vec2, b: Vec2, c: Vec2) -> bool {
    let max_length = a.length().max(b.length()).max(c.length());
    if max_length < f32::EPSILON {
        // Alle drei Punkte im Ursprung → entartet, trivial kollinear
        return false;
    }

    let (a, b, c) = (a / max_length, b / max_length, c / max_length);
    let det = arc_determinant(a, b, c);
    let threshold = if is_exterior_arc(a, b, c) {
        EXTERIOR_DET_THRESHOLD
    } else {
        INTERIOR_DET_THRESHOLD
    };

    det.abs() >= threshold
}
