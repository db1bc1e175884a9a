//! egui rendering. Every widget reads from and writes to [`AppState`](crate::state::AppState);
//! no data logic lives here.

pub mod chart;
pub mod metrics;
pub mod panels;
pub mod table;
