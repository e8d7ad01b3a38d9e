//=========================================================================
// Carrot Hop — Library Root
//
// An endless vertical platformer on a small scene-based engine.
//
// Modules:
// - `core`: engine systems (input, scenes, physics, camera, pools)
// - `game`: the level and game-over scenes
// - `config`: RON configuration
// - `platform` (private): winit window and keyboard
//
// Typical usage:
// ```no_run
// use carrot_hop::config::GameConfig;
// use carrot_hop::game::{self, SceneId};
// use carrot_hop::EngineBuilder;
//
// let config = GameConfig::default();
// EngineBuilder::<SceneId>::new()
//     .build()
//     .init(|systems, _| game::register(systems, &config))
//     .run(config.window.clone())?;
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod config;
pub mod core;
pub mod game;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` holds winit integration and is not part of the public API.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Engine, EngineBuilder};
