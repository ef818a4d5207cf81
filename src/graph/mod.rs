pub mod generators;
pub mod model;
pub mod snapshot;

pub use model::{Edge, GraphModel};
pub use snapshot::{GraphSnapshot, IndexedEdge};
