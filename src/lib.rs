//! Slider-Pfad-Editor-Kern.
//! Inkrementelle Synchronisation von Kontrollpunkten mit abgeleiteten
//! Piece-/Connection-Elementen, als Library exportiert für Host-Clients und Tests.

pub mod core;
pub mod editor;
pub mod overlay;
pub mod shared;
pub mod ui;

pub use core::{ControlPoint, ControlPointId, PathChange, PathType, SliderPath};
pub use editor::{EditHistory, EditorIntent, PathEditor, Snapshot};
pub use overlay::{ConnectionElement, ControlPointOverlay, PieceElement, TypeCorrection};
pub use ui::{determine_menu_variant, CheckState, CurveTypeEntry, MenuVariant, SelectionMenu};
