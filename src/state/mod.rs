/// State management module
///
/// This module holds the data model shared between the host page and the
/// UI components:
/// - Connector scheduling settings (connector.rs)
/// - Persona icon payload types (persona.rs)

pub mod connector;
pub mod persona;
