pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod label;
pub mod layout;
pub mod physics;
pub mod rotation;
pub mod scene;
pub mod surface;

pub use config::*;
pub use error::*;
pub use geometry::*;
pub use label::*;
pub use layout::*;
pub use physics::*;
pub use rotation::*;
pub use scene::*;
pub use surface::*;
