//! File icons
//!
//! A fixed-size pixel buffer owned exclusively by one `File` at a time.

/// Number of pixels in every icon buffer
pub const ICON_DIM: usize = 4;

/// Owned, heap-allocated icon buffer.
///
/// Moving an `Icon` transfers the allocation; cloning allocates an
/// independent buffer. The allocation is released when the owner drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pixels: Box<[i32; ICON_DIM]>,
}

impl Icon {
    /// Copies `pixels` into freshly owned storage.
    pub fn new(pixels: [i32; ICON_DIM]) -> Self {
        Self {
            pixels: Box::new(pixels),
        }
    }

    pub fn pixels(&self) -> &[i32; ICON_DIM] {
        &self.pixels
    }
}

impl From<[i32; ICON_DIM]> for Icon {
    fn from(pixels: [i32; ICON_DIM]) -> Self {
        Self::new(pixels)
    }
}
