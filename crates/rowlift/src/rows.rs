use rowlift_core::RowError;

/// Ordered backing store with an atomic `move_row`.
///
/// Reordering is one remove-insert pair behind a single call, so no reader
/// ever observes the collection with the moved row missing or doubled.
#[derive(Clone, Debug, Default)]
pub struct Rows<T> {
    items: Vec<T>,
}

impl<T> Rows<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Move the row at `from` so it ends up at index `to`. Both indices must
    /// be in bounds; use `try_move_row` when they come from untrusted input.
    pub fn move_row(&mut self, from: usize, to: usize) {
        debug_assert!(from < self.items.len() && to < self.items.len());
        if from == to {
            return;
        }
        let row = self.items.remove(from);
        self.items.insert(to, row);
    }

    pub fn try_move_row(&mut self, from: usize, to: usize) -> Result<(), RowError> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(RowError::IndexOutOfBounds { index, len });
            }
        }
        self.move_row(from, to);
        Ok(())
    }
}

impl<T> From<Vec<T>> for Rows<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Rows<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> std::ops::Index<usize> for Rows<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowlift_core::RowError;

    #[test]
    fn test_move_row_down() {
        let mut rows: Rows<_> = (0..5).collect();
        rows.move_row(2, 4);
        let order: Vec<_> = rows.iter().copied().collect();
        assert_eq!(order, vec![0, 1, 3, 4, 2]);
    }

    #[test]
    fn test_move_row_up() {
        let mut rows: Rows<_> = (0..5).collect();
        rows.move_row(3, 0);
        let order: Vec<_> = rows.iter().copied().collect();
        assert_eq!(order, vec![3, 0, 1, 2, 4]);
    }

    #[test]
    fn test_move_row_same_index_is_noop() {
        let mut rows: Rows<_> = (0..3).collect();
        rows.move_row(1, 1);
        let order: Vec<_> = rows.iter().copied().collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_try_move_row_out_of_bounds() {
        let mut rows: Rows<_> = (0..3).collect();
        assert_eq!(
            rows.try_move_row(0, 9),
            Err(RowError::IndexOutOfBounds { index: 9, len: 3 })
        );
        assert_eq!(
            rows.try_move_row(5, 1),
            Err(RowError::IndexOutOfBounds { index: 5, len: 3 })
        );
        assert_eq!(rows.try_move_row(0, 2), Ok(()));
    }
}
