pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;

// Re-export commonly used items
pub use app::ChessPathApp;
pub use args::Args;
pub use display::format_number;
