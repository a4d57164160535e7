pub mod animation;
pub mod assets;
pub mod core;
pub mod generation;
pub mod loading;
pub mod mesh;
pub mod scene;
pub mod systems;
