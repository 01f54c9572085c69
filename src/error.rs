#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ArcError {
    /// The name is not in the location table.
    #[error("unknown location: {0:?}")]
    UnknownLocation(String),
    /// Origin and destination coincide or sit on opposite sides of the
    /// sphere, leaving the bulge direction undefined.
    #[error("degenerate arc from {origin:?} to {destination:?}")]
    DegenerateArc { origin: String, destination: String },
    /// Same as `DegenerateArc`, for endpoints given as raw points.
    #[error("degenerate curve from {start:?} to {end:?}")]
    DegenerateCurve { start: [f64; 3], end: [f64; 3] },
    #[error("invalid coordinate for {name:?}: lat={lat}, lon={lon}")]
    InvalidCoordinate { name: String, lat: f64, lon: f64 },
    #[error("invalid scene config: {0}")]
    InvalidConfig(String),
}
