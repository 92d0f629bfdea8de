//! Custom widget components

mod code_input;
mod explanation_view;
mod header;
pub mod markup;

pub use code_input::CodeInput;
pub use explanation_view::ExplanationView;
pub use header::MainHeader;
