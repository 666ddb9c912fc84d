pub mod error;
pub mod states;
pub mod random;
pub mod density;
pub mod nucleus;
pub mod engine;
pub mod field;
pub mod geometry;
pub mod params;
pub mod scenario;
