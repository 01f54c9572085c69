pub mod curve;
pub mod geospatial;
pub mod rotation;
pub mod trail;
