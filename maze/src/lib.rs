pub mod carving;
pub mod collision;
pub mod config;
pub mod constants;
pub mod errors;
pub mod grid;
pub mod rect;
pub mod render;
pub mod room;
pub mod sides;

pub use carving::{braid, carve_maze, dead_ends, generate_level};
pub use collision::{Bounds, Collider, CollisionSink, IgnoreCollisions, WallCollision};
pub use config::LevelConfig;
pub use errors::{ConfigProblem, Defect, ErrorKind, MazeError, MazeResult};
pub use grid::MazeGrid;
pub use rect::RectDetails;
pub use render::{DrawToggles, LineRenderer};
pub use room::{GameObject, Neighbors, Room};
pub use sides::{Color, Side, SideCharacteristic, SideRegistry};
