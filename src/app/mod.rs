mod events;
mod input_state;
mod mouse_capture;
mod render;
mod state;

// Re-export public types
pub use input_state::InputState;
pub use mouse_capture::MouseCapture;
pub use state::App;
