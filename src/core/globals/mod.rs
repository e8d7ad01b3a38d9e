//=========================================================================
// Globals
//
// What a scene can touch lives in `GlobalContext`; what drives the scenes
// lives in `GlobalSystems`. Both are owned by the orchestrator on the
// logic thread and handed to scenes by reference.
//
//=========================================================================

mod global_context;
mod global_systems;

pub use global_context::GlobalContext;
pub use global_systems::GlobalSystems;
