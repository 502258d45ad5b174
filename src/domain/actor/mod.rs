pub mod policy;
pub mod value_objects;

pub use policy::Operation;
pub use value_objects::{ActorId, Role};
