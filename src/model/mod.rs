#[macro_use]
mod macros;

pub mod alien;
pub mod city;
pub mod direction;
pub mod event;
pub mod world;

pub use alien::AlienId;
pub use city::{City, Neighbors};
pub use direction::Direction;
pub use event::{Destruction, DestructionEvent};
pub use world::{Visit, WorldMap};
