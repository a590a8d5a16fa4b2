//! Persisted user-table column widths and the drag gesture that changes them.

use log::{debug, warn};

use super::store::PreferenceStore;

pub const COLUMN_WIDTHS_KEY: &str = "user_table_column_widths";

/// ID, username, name, employee id, department, position, email, phone, role, status, actions.
pub const COLUMN_COUNT: usize = 11;

pub const MIN_COLUMN_WIDTH: u32 = 70;

pub const DEFAULT_COLUMN_WIDTHS: [u32; COLUMN_COUNT] =
    [70, 120, 110, 110, 130, 120, 190, 130, 110, 90, 230];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths([u32; COLUMN_COUNT]);

impl Default for ColumnWidths {
    fn default() -> Self {
        Self(DEFAULT_COLUMN_WIDTHS)
    }
}

impl ColumnWidths {
    /// Widths from `values`, each clamped to [`MIN_COLUMN_WIDTH`]. `None` unless exactly
    /// [`COLUMN_COUNT`] values are given.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.len() != COLUMN_COUNT {
            return None;
        }
        let mut widths = DEFAULT_COLUMN_WIDTHS;
        for (slot, value) in widths.iter_mut().zip(values) {
            *slot = clamp_width(*value);
        }
        Some(Self(widths))
    }

    /// Stored widths, or the defaults (written back) when storage is missing or malformed.
    pub fn load(store: &mut dyn PreferenceStore) -> Self {
        let stored = store.get_string(COLUMN_WIDTHS_KEY).and_then(|raw| {
            match serde_json::from_str::<Vec<f64>>(&raw) {
                Ok(values) => Self::from_values(&values),
                Err(err) => {
                    warn!("Ignoring malformed column widths {raw:?}: {err}");
                    None
                }
            }
        });

        stored.unwrap_or_else(|| {
            debug!("Applying default column widths");
            let defaults = Self::default();
            defaults.save(store);
            defaults
        })
    }

    pub fn save(&self, store: &mut dyn PreferenceStore) {
        match serde_json::to_string(&self.0) {
            Ok(json) => store.set_string(COLUMN_WIDTHS_KEY, json),
            Err(err) => warn!("Failed to encode column widths: {err}"),
        }
    }

    pub fn get(&self, column: usize) -> u32 {
        self.0.get(column).copied().unwrap_or(MIN_COLUMN_WIDTH)
    }

    /// Set one column, clamped to the minimum. Out-of-range columns are ignored.
    pub fn set(&mut self, column: usize, width: u32) {
        if let Some(slot) = self.0.get_mut(column) {
            *slot = width.max(MIN_COLUMN_WIDTH);
        }
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

fn clamp_width(value: f64) -> u32 {
    if !value.is_finite() {
        return MIN_COLUMN_WIDTH;
    }
    let rounded = value.round().clamp(0.0, f64::from(u32::MAX));
    (rounded as u32).max(MIN_COLUMN_WIDTH)
}

/// An in-progress column resize, alive from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDrag {
    pub column: usize,
    start_x: f32,
    start_width: u32,
}

impl ColumnDrag {
    pub fn begin(widths: &ColumnWidths, column: usize, start_x: f32) -> Self {
        Self {
            column,
            start_x,
            start_width: widths.get(column),
        }
    }

    /// `max(MIN_COLUMN_WIDTH, start_width + (x - start_x))`
    pub fn width_at(&self, x: f32) -> u32 {
        clamp_width(f64::from(self.start_width) + f64::from(x - self.start_x))
    }

    /// Apply the width for pointer position `x` to `widths`.
    pub fn update(&self, widths: &mut ColumnWidths, x: f32) {
        widths.set(self.column, self.width_at(x));
    }
}
