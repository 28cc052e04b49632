//! Geteilte, layer-neutrale Geometrie-Funktionen.
//!
//! Enthält reine Berechnungen ohne Abhängigkeit auf `core` oder `overlay`,
//! um Zirkel-Abhängigkeiten zwischen den Layern zu vermeiden.

pub mod arc_geometry;

pub use arc_geometry::{is_drawable_arc, is_exterior_arc};
