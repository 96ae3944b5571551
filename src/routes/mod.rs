pub mod editor;
pub mod public;
