//! Relief - An interactive heightfield terrain editor core

pub mod core;
pub mod math;
pub mod terrain;
pub mod brush;
pub mod instance;
pub mod history;
pub mod scene;
pub mod project;
pub mod editor;
