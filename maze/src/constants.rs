// ============================================================================
// Grid & Rooms
// ============================================================================

pub const DEFAULT_GRID_ROWS: i32 = 10; // Number of room rows
pub const DEFAULT_GRID_COLS: i32 = 10; // Number of room columns
pub const DEFAULT_ROOM_WIDTH: f32 = 64.0; // Room width in world units
pub const DEFAULT_ROOM_HEIGHT: f32 = 64.0; // Room height in world units
pub const MAX_ROOMS: usize = 1 << 22; // Largest grid build() will allocate

// ============================================================================
// Walls
// ============================================================================

pub const WALL_COLLISION_THICKNESS: f32 = 1.0; // Thickness of a side's collision strip
pub const WALL_RENDER_THICKNESS: f32 = 3.0; // Line thickness requested from the renderer

// ============================================================================
// Carving
// ============================================================================

// Chance that a dead end gets an extra opening after the perfect maze is carved
pub const DEFAULT_BRAID_RATIO: f64 = 0.0;
