//! Department / position lookup tables cached for the session.

use std::collections::BTreeMap;

use crate::users::model::{Department, Position, Role};
use crate::users::role::role_for_position_id;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    departments: Vec<Department>,
    positions: Vec<Position>,
}

impl ReferenceData {
    pub fn new(departments: Vec<Department>, positions: Vec<Position>) -> Self {
        Self {
            departments: dedup_sorted(departments, |d| d.id, |d| d.name.clone()),
            positions: dedup_sorted(positions, |p| p.id, |p| p.name.clone()),
        }
    }

    pub fn set_departments(&mut self, departments: Vec<Department>) {
        self.departments = dedup_sorted(departments, |d| d.id, |d| d.name.clone());
    }

    pub fn set_positions(&mut self, positions: Vec<Position>) {
        self.positions = dedup_sorted(positions, |p| p.id, |p| p.name.clone());
    }

    /// Departments, unique by id and sorted by name.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Positions, unique by id and sorted by name.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn role_for(&self, position_id: Option<u64>, fallback: Role) -> Role {
        role_for_position_id(&self.positions, position_id, fallback)
    }
}

fn dedup_sorted<T>(
    items: Vec<T>,
    id: impl Fn(&T) -> u64,
    name: impl Fn(&T) -> String,
) -> Vec<T> {
    let mut by_id = BTreeMap::new();
    for item in items {
        by_id.entry(id(&item)).or_insert(item);
    }
    let mut unique: Vec<T> = by_id.into_values().collect();
    unique.sort_by_key(|item| name(item));
    unique
}
