//! Dirty-rectangle tracking.
//!
//! [`DirtyRect`] is an inclusive box in panel coordinates: columns are
//! pixels, rows are 8-pixel pages. [`sync_page()`] compares one page row of
//! the new frame against the shadow copy, grows the box over any differing
//! column, and copies the row into the shadow.

/// Inclusive bounding box of changed framebuffer bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirtyRect {
    pub min_col: u8,
    pub max_col: u8,
    pub min_page: u8,
    pub max_page: u8,
}

impl DirtyRect {
    /// Box covering a single byte.
    pub fn point(col: u8, page: u8) -> Self {
        Self {
            min_col: col,
            max_col: col,
            min_page: page,
            max_page: page,
        }
    }

    /// Box covering a whole `width` × `pages` frame.
    ///
    /// Both dimensions must be non-zero.
    pub fn full(width: u8, pages: u8) -> Self {
        Self {
            min_col: 0,
            max_col: width - 1,
            min_page: 0,
            max_page: pages - 1,
        }
    }

    /// Grow the box to cover `(col, page)`.
    pub fn include(&mut self, col: u8, page: u8) {
        self.min_col = self.min_col.min(col);
        self.max_col = self.max_col.max(col);
        self.min_page = self.min_page.min(page);
        self.max_page = self.max_page.max(page);
    }

    /// Columns covered.
    pub fn width(&self) -> usize {
        (self.max_col - self.min_col) as usize + 1
    }

    /// Pages covered.
    pub fn pages(&self) -> usize {
        (self.max_page - self.min_page) as usize + 1
    }

    /// Framebuffer bytes inside the box.
    pub fn byte_count(&self) -> usize {
        self.width() * self.pages()
    }
}

/// Compare page row `page` of `frame` with `shadow`, extend `dirty` with
/// every differing column, then copy the row into `shadow`.
///
/// `frame` and `shadow` are the row slices (`width` bytes each).
pub fn sync_page(frame: &[u8], shadow: &mut [u8], page: u8, dirty: &mut Option<DirtyRect>) {
    for (col, (new, old)) in frame.iter().zip(shadow.iter()).enumerate() {
        if new != old {
            let col = col as u8;
            match dirty {
                Some(rect) => rect.include(col, page),
                None => *dirty = Some(DirtyRect::point(col, page)),
            }
        }
    }
    shadow.copy_from_slice(frame);
}
