//! Rectangular grids of cells

use anyhow::{bail, ensure};
use std::ops::{Index, IndexMut};

/// A dense row-major grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl Grid<u8> {
    /// Parse a block of text, one row per line, one byte per cell
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Self::from_rows(text.lines().map(|line| line.bytes().collect()).collect())
    }
}

impl<T> Grid<T> {
    /// Build a grid from rows, which must all have the same length
    pub fn from_rows(rows: Vec<Vec<T>>) -> anyhow::Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            bail!("grid is empty");
        }
        let mut cells = Vec::with_capacity(width * height);
        for (r, row) in rows.into_iter().enumerate() {
            ensure!(row.len() == width, "row {} has {} cells, expected {width}", r + 1, row.len());
            cells.extend(row);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds-checked access with signed coordinates
    pub fn get(&self, row: i64, col: i64) -> Option<&T> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        self.cells.get(row as usize * self.width + col as usize)
    }

    /// The cells of one row
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width)
    }

    /// Every `(row, col)` with its cell, in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| ((i / self.width, i % self.width), cell))
    }

    /// Position of the first cell equal to `needle`
    pub fn find(&self, needle: &T) -> Option<(usize, usize)>
    where
        T: PartialEq,
    {
        self.iter().find(|(_, cell)| *cell == needle).map(|(pos, _)| pos)
    }

    pub fn transpose(&self) -> Grid<T>
    where
        T: Clone,
    {
        let cells = (0..self.width)
            .flat_map(|c| (0..self.height).map(move |r| (r, c)))
            .map(|pos| self[pos].clone())
            .collect();
        Grid {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Rotate a quarter turn clockwise
    pub fn rotate_cw(&self) -> Grid<T>
    where
        T: Clone,
    {
        let cells = (0..self.width)
            .flat_map(|c| (0..self.height).rev().map(move |r| (r, c)))
            .map(|pos| self[pos].clone())
            .collect();
        Grid {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[row * self.width + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cells[row * self.width + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_access() {
        let grid = Grid::parse("ab\ncd\nef").unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 3));
        assert_eq!(grid[(2, 1)], b'f');
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(1, 2), None);
        assert_eq!(grid.find(&b'd'), Some((1, 1)));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(Grid::parse("abc\nd").is_err());
        assert!(Grid::parse("").is_err());
    }

    #[test]
    fn test_transpose_and_rotate() {
        let grid = Grid::parse("ab\ncd\nef").unwrap();
        assert_eq!(grid.transpose(), Grid::parse("ace\nbdf").unwrap());
        assert_eq!(grid.rotate_cw(), Grid::parse("eca\nfdb").unwrap());
        assert_eq!(grid.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), grid);
    }
}
