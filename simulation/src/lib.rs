mod burst;
pub use burst::*;

mod config;
pub use config::*;

mod particle;
pub use particle::*;

mod simulation;
pub use simulation::*;

mod surface;
pub use surface::*;
