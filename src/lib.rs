pub mod gui;
pub mod logging;
pub mod media;
pub mod overlay;
pub mod settings;
pub mod ticker;
