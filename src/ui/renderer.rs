//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! The base layout is drawn first, then the modal and toast overlays on
//! top. The whole frame goes to stdout in one pass and is flushed at the
//! end, so a slow terminal never shows a half-drawn frame between flushes.

use std::io::Write;

use crate::app::AppState;
use crate::ui::components;

/// Clears the screen and moves the cursor home.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Renders the full UI to stdout.
///
/// Computes the view model from application state, draws the base layout,
/// then the overlays, and flushes.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    print!("{CLEAR_SCREEN}");

    components::render_layout(&viewmodel, &state.theme, rows, cols);

    if let Some(modal) = &viewmodel.modal {
        components::render_modal(modal, &state.theme, rows, cols);
    }

    if let Some(toast) = &viewmodel.toast {
        components::render_toast(toast, &state.theme, cols);
    }

    let _ = std::io::stdout().flush();
}
