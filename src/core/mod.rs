//! Kern-Datenmodell: Kontrollpunkte, Pfad-Sequenz und Änderungs-Events.

pub mod control_point;
pub mod events;
/// Core-Datenmodelle für Slider-Pfade
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - SliderPath: geordnete Sequenz aller Kontrollpunkte
/// - ControlPoint: einzelner Kontrollpunkt mit Position und optionalem Segment-Typ
/// - PathChange: strukturiertes Änderungs-Event der Sequenz
pub mod path;

pub use control_point::{ControlPoint, ControlPointId, PathType};
pub use events::PathChange;
pub use path::SliderPath;
