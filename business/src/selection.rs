use std::collections::BTreeSet;

/// Checked rows on the current grid, by `seq`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    seqs: BTreeSet<i64>,
}

impl Selection {
    pub fn contains(&self, seq: i64) -> bool {
        self.seqs.contains(&seq)
    }

    pub fn toggle(&mut self, seq: i64) {
        if !self.seqs.remove(&seq) {
            self.seqs.insert(seq);
        }
    }

    pub fn set(&mut self, seq: i64, selected: bool) {
        if selected {
            self.seqs.insert(seq);
        } else {
            self.seqs.remove(&seq);
        }
    }

    /// Selects every `seq` in `rows`, or clears when `selected` is false.
    pub fn set_all(&mut self, rows: impl IntoIterator<Item = i64>, selected: bool) {
        if selected {
            self.seqs.extend(rows);
        } else {
            self.seqs.clear();
        }
    }

    pub fn clear(&mut self) {
        self.seqs.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.seqs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.seqs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.seqs.iter().copied()
    }

    /// True when every row of `rows` is selected and `rows` is non-empty.
    pub fn covers(&self, rows: &[i64]) -> bool {
        !rows.is_empty() && rows.iter().all(|seq| self.seqs.contains(seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        let mut selection = Selection::default();
        selection.toggle(42);
        assert!(selection.contains(42));
        selection.toggle(42);
        assert!(selection.is_empty());
    }

    #[test]
    fn covers_requires_nonempty_page() {
        let mut selection = Selection::default();
        assert!(!selection.covers(&[]));
        selection.set_all([1, 2, 3], true);
        assert!(selection.covers(&[1, 2, 3]));
        assert!(!selection.covers(&[1, 2, 3, 4]));
    }
}
