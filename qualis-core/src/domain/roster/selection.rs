// qualis-core/src/domain/roster/selection.rs

use super::RowId;

/// Recipients picked for generation, kept in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<RowId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id at the end, or removes it if already selected.
    /// Returns whether the id is selected afterwards.
    pub fn toggle(&mut self, id: RowId) -> bool {
        if let Some(pos) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn select(&mut self, id: RowId) {
        if !self.contains(id) {
            self.ids.push(id);
        }
    }

    /// Select-all checkbox semantics: clears when everything is already
    /// selected, otherwise selects every id in roster order.
    pub fn toggle_all<I>(&mut self, all: I)
    where
        I: IntoIterator<Item = RowId>,
    {
        let all: Vec<RowId> = all.into_iter().collect();
        if !all.is_empty() && all.iter().all(|id| self.contains(*id)) && self.len() == all.len() {
            self.ids.clear();
        } else {
            self.ids = all;
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[RowId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<RowId> for Selection {
    fn from_iter<T: IntoIterator<Item = RowId>>(iter: T) -> Self {
        let mut selection = Self::new();
        for id in iter {
            selection.select(id);
        }
        selection
    }
}
