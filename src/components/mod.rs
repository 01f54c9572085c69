pub mod arc;
pub mod location;
pub mod rotation;
pub mod trail;
