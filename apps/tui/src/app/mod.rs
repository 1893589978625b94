// App module for portfolio_tui
// Handles application state and key input

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, LoadState, MenuRow};
