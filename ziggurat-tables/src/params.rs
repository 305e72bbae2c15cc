use crate::constants::{MAX_LAYERS, NOR_SECTION_AREA, ZIGGURAT_LAYERS, ZIGGURAT_NOR_R};
use crate::error::TableError;

/// Shape of a normal Ziggurat: layer count, tail boundary and layer area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZigguratParams {
    pub layers: usize,
    pub tail: f64,
    pub area: f64,
}

impl ZigguratParams {
    pub fn new(layers: usize, tail: f64, area: f64) -> Self {
        Self { layers, tail, area }
    }

    /// Reject parameter sets the recurrence cannot even start from.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.layers < 2 {
            return Err(TableError::InvalidParams {
                reason: format!("need at least 2 layers, got {}", self.layers),
            });
        }
        if self.layers > MAX_LAYERS {
            return Err(TableError::InvalidParams {
                reason: format!("at most {} layers supported, got {}", MAX_LAYERS, self.layers),
            });
        }
        if !(self.tail.is_finite() && self.tail > 0.0) {
            return Err(TableError::InvalidParams {
                reason: format!("tail boundary must be finite and positive, got {}", self.tail),
            });
        }
        if !(self.area.is_finite() && self.area > 0.0) {
            return Err(TableError::InvalidParams {
                reason: format!("layer area must be finite and positive, got {}", self.area),
            });
        }
        Ok(())
    }
}

impl Default for ZigguratParams {
    fn default() -> Self {
        Self::new(ZIGGURAT_LAYERS, ZIGGURAT_NOR_R, NOR_SECTION_AREA)
    }
}
