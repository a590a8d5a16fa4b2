//! Cosmetic UI preferences: table column widths and header gradient colors.
//!
//! Both are stored as JSON strings under fixed keys in a [`PreferenceStore`] and fall
//! back to hardcoded defaults when storage is empty or malformed.

mod columns;
mod gradient;
mod store;

pub use columns::{
    COLUMN_COUNT, COLUMN_WIDTHS_KEY, ColumnDrag, ColumnWidths, DEFAULT_COLUMN_WIDTHS,
    MIN_COLUMN_WIDTH,
};
pub use gradient::{
    DEFAULT_GRADIENT_END, DEFAULT_GRADIENT_START, GRADIENT_KEY, HeaderGradient, HexColor,
};
pub use store::{MemoryStore, PreferenceStore};

/// Both preference blobs plus the live column drag, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiPreferences {
    pub columns: ColumnWidths,
    pub gradient: HeaderGradient,
    drag: Option<ColumnDrag>,
}

impl UiPreferences {
    pub fn load(store: &mut dyn PreferenceStore) -> Self {
        Self {
            columns: ColumnWidths::load(store),
            gradient: HeaderGradient::load(store),
            drag: None,
        }
    }

    /// Pointer-down on the resize handle of `column`.
    pub fn begin_resize(&mut self, column: usize, pointer_x: f32) {
        self.drag = Some(ColumnDrag::begin(&self.columns, column, pointer_x));
    }

    /// Pointer-move while dragging. No-op without an active drag.
    pub fn drag_resize(&mut self, pointer_x: f32) {
        if let Some(drag) = self.drag {
            drag.update(&mut self.columns, pointer_x);
        }
    }

    /// Pointer-up: end the drag and persist all widths.
    pub fn end_resize(&mut self, store: &mut dyn PreferenceStore) {
        if self.drag.take().is_some() {
            self.columns.save(store);
        }
    }

    pub fn resizing_column(&self) -> Option<usize> {
        self.drag.map(|d| d.column)
    }

    pub fn set_gradient(&mut self, gradient: HeaderGradient, store: &mut dyn PreferenceStore) {
        self.gradient = gradient;
        self.gradient.save(store);
    }

    /// Restore default colors and default column widths, and persist both.
    pub fn reset(&mut self, store: &mut dyn PreferenceStore) {
        self.gradient = HeaderGradient::default();
        self.columns = ColumnWidths::default();
        self.drag = None;
        self.gradient.save(store);
        self.columns.save(store);
    }
}
