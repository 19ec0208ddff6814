//! Name list with create/update/delete and a prefix filter.

use serde::{Deserialize, Serialize};

/// A stored person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub surname: String,
}

/// One row of the filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrudItem {
    pub id: u64,
    /// `"Surname, Name"`.
    pub label: String,
    pub selected: bool,
}

/// CRUD page state: the records plus the form fields.
#[derive(Debug, Clone, Default)]
pub struct Crud {
    records: Vec<Record>,
    next_id: u64,
    selected: Option<u64>,
    /// Name text field.
    pub name: String,
    /// Surname text field.
    pub surname: String,
    /// Prefix filter text field.
    pub filter: String,
}

impl Crud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    /// Update and delete are only enabled with a selection.
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Records whose name or surname starts with the filter.
    pub fn items(&self) -> Vec<CrudItem> {
        self.records
            .iter()
            .filter(|r| r.name.starts_with(&self.filter) || r.surname.starts_with(&self.filter))
            .map(|r| CrudItem {
                id: r.id,
                label: format!("{}, {}", r.surname, r.name),
                selected: self.selected == Some(r.id),
            })
            .collect()
    }

    /// Select a record and load it into the form. Selecting the selected
    /// record deselects it. Unknown ids are ignored.
    pub fn select(&mut self, id: u64) {
        let Some(record) = self.records.iter().find(|r| r.id == id) else {
            return;
        };
        if self.selected == Some(id) {
            self.selected = None;
            return;
        }
        self.name = record.name.clone();
        self.surname = record.surname.clone();
        self.selected = Some(id);
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Append a record from the form fields. Returns its id.
    pub fn create(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(Record {
            id,
            name: self.name.clone(),
            surname: self.surname.clone(),
        });
        id
    }

    /// Overwrite the selected record with the form fields.
    pub fn update(&mut self) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.name = self.name.clone();
                record.surname = self.surname.clone();
                true
            }
            None => false,
        }
    }

    /// Delete the selected record and clear the selection.
    pub fn delete(&mut self) -> bool {
        let Some(id) = self.selected.take() else {
            return false;
        };
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }
}
