use std::ops::{Index, IndexMut};

/// Fixed-size 2D container addressed by `(col, row)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>, // row-major
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn fill(&mut self, value: T) {
        for cell in self.cells.iter_mut() {
            *cell = value.clone();
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        if self.contains(col, row) {
            self.cells.get(row * self.width + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut T> {
        if self.contains(col, row) {
            self.cells.get_mut(row * self.width + col)
        } else {
            None
        }
    }

    /// Iterates `(col, row, &cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % width, i / width, cell))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut T)> {
        let width = self.width;
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(i, cell)| (i % width, i / width, cell))
    }

    fn offset(&self, col: usize, row: usize) -> usize {
        assert!(
            self.contains(col, row),
            "grid index ({}, {}) out of bounds for {}x{}",
            col,
            row,
            self.width,
            self.height
        );
        row * self.width + col
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (col, row): (usize, usize)) -> &T {
        &self.cells[self.offset(col, row)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut T {
        let offset = self.offset(col, row);
        &mut self.cells[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn get_rejects_out_of_range() {
        let grid = Grid::new(4, 3, 0u8);
        assert_eq!(grid.get(3, 2), Some(&0));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn index_is_col_then_row() {
        let mut grid = Grid::new(4, 3, 0u8);
        grid[(3, 1)] = 9;
        assert_eq!(grid.get(3, 1), Some(&9));
        assert_eq!(grid.get(1, 3), None);
        let found: Vec<_> = grid.iter().filter(|(_, _, v)| **v == 9).map(|(c, r, _)| (c, r)).collect();
        assert_eq!(found, vec![(3, 1)]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics_outside_grid() {
        let grid = Grid::new(2, 2, false);
        let _ = grid[(2, 0)];
    }

    #[test]
    fn fill_resets_every_cell() {
        let mut grid = Grid::new(2, 2, false);
        grid[(1, 1)] = true;
        grid.fill(false);
        assert!(grid.iter().all(|(_, _, v)| !*v));
    }
}
