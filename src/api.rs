//////////////// primitives
pub mod points;
pub use points::Point;
pub mod style;
pub use style::*;
