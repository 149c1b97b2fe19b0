//! CLI library components for the podium dashboard engine.

pub mod logging;
