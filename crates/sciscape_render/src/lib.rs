pub mod camera;
pub mod plugin;
pub mod scene;
pub mod ui;
