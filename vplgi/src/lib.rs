//! Single-bounce indirect lighting through virtual point lights.
//!
//! Every frame a [`VplSpawner`] casts a grid of jittered rays from a light
//! source into the lower hemisphere, reads the albedo of whatever each ray
//! hits and asks a [`LightSink`] to put a point light there. The host supplies
//! the scene through [`VisibilityQuery`] and owns the actual lights.

mod macros;

pub mod bounce;
pub mod debug_draw;
pub mod lights;
pub mod math;
pub mod sampling;
pub mod scene;
pub mod settings;
pub mod spawner;
pub mod visibility;

#[doc(hidden)]
pub use log;

pub use bounce::{resolve_bounce, BounceSample};
pub use debug_draw::{DebugDraw, NoDebugDraw, RecordingDebugDraw};
pub use lights::{LightHandle, LightSink, MemoryLightSink, Orientation};
pub use sampling::SampleGrid;
pub use settings::SpawnerSettings;
pub use spawner::{FrameStats, LightSource, VplSpawner};
pub use visibility::{TraceHit, TraceParams, VisibilityQuery};
