//! Editable reagent rows of the PCR form.
//!
//! The list owns its rows and hands out a fresh [`RowId`] for each one, so a
//! row can be edited or removed without relying on its position. The UI
//! renders the list in order and keys each row by id.

use crate::api::Component;

pub type RowId = u64;

/// Rows shown when the PCR form first loads: (name, stock ×, final ×).
pub const DEFAULT_COMPONENTS: [(&str, &str, &str); 6] = [
    ("Polymerase", "5", "0.02"),
    ("Buffer", "10", "1"),
    ("dNTPs", "10", "0.2"),
    ("Primer F", "10", "0.5"),
    ("Primer R", "10", "0.5"),
    ("Template DNA", "50", "2"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRow {
    pub id: RowId,
    pub name: String,
    pub stock: String,
    pub final_conc: String,
}

impl ComponentRow {
    /// A row takes part in a request only when every field has a value.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.stock.is_empty() && !self.final_conc.is_empty()
    }

    pub fn to_component(&self) -> Component {
        Component::new(&self.name, &self.stock, &self.final_conc)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Name,
    Stock,
    Final,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRows {
    rows: Vec<ComponentRow>,
    next_id: RowId,
}

impl Default for ComponentRows {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRows {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// The six canonical reagents with representative concentrations.
    pub fn with_defaults() -> Self {
        let mut rows = Self::new();
        for (name, stock, final_conc) in DEFAULT_COMPONENTS {
            rows.push(name, stock, final_conc);
        }
        rows
    }

    /// Append a row and return its id.
    pub fn push(&mut self, name: &str, stock: &str, final_conc: &str) -> RowId {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(ComponentRow {
            id,
            name: name.to_string(),
            stock: stock.to_string(),
            final_conc: final_conc.to_string(),
        });
        log::debug!("added component row {}", id);
        id
    }

    pub fn add_blank(&mut self) -> RowId {
        self.push("", "", "")
    }

    /// Delete the row with `id`. Returns false if no such row exists.
    pub fn remove(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        let removed = self.rows.len() != before;
        if removed {
            log::debug!("removed component row {}", id);
        }
        removed
    }

    /// Overwrite one field of the row with `id`.
    pub fn update(&mut self, id: RowId, field: RowField, value: String) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            return false;
        };
        match field {
            RowField::Name => row.name = value,
            RowField::Stock => row.stock = value,
            RowField::Final => row.final_conc = value,
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Complete rows in list order, ready for a request body.
    ///
    /// Partially filled rows are skipped without complaint.
    pub fn components(&self) -> Vec<Component> {
        self.rows
            .iter()
            .filter(|row| row.is_complete())
            .map(ComponentRow::to_component)
            .collect()
    }
}
