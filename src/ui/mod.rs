//! UI-Verträge: datengetriebenes Kontextmenü für Host-Clients.
//!
//! Enthält keine Toolkit-Abhängigkeit — der Host rendert die Einträge
//! selbst und emittiert bei Aktivierung die hinterlegten Intents.

pub mod context_menu;

pub use context_menu::{
    determine_menu_variant, CheckState, CurveTypeEntry, MenuVariant, SelectionMenu,
};
