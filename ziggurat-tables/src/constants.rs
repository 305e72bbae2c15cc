//! Constants for the 128-layer normal Ziggurat

pub const ZIGGURAT_LAYERS: usize = 128;
pub const MAX_LAYERS: usize = u16::MAX as usize;

// Normal distribution constants
pub const ZIGGURAT_NOR_R: f64 = 3.442619855899;
pub const NOR_SECTION_AREA: f64 = 9.91256303526217e-3;
