//! Lattice polygon helpers
//!
//! Every function works on the consecutive pairs of the slice it is given and
//! never adds the closing edge itself. Pass the first point again at the end
//! to close a loop.

use itertools::Itertools;

/// A point on the integer lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Point) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Twice the shoelace area, which is always an integer on the lattice
pub fn shoelace_double_area(points: &[Point]) -> i64 {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<i64>()
        .abs()
}

/// Shoelace area over consecutive pairs
pub fn shoelace_area(points: &[Point]) -> f64 {
    shoelace_double_area(points) as f64 / 2.0
}

/// Sum of the Manhattan lengths of consecutive pairs
pub fn polygon_perimeter(points: &[Point]) -> i64 {
    points.iter().tuple_windows().map(|(a, b)| a.manhattan(*b)).sum()
}

/// Lattice points strictly inside a loop, by Pick's theorem
///
/// The loop must be closed and list every boundary lattice point, so that
/// `points.len() - 1` is the boundary count.
pub fn interior_points(points: &[Point]) -> i64 {
    let boundary = points.len().saturating_sub(1) as i64;
    (shoelace_double_area(points) - boundary + 2) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point> {
        [(0, 0), (0, 1), (1, 1), (1, 0), (0, 0)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn test_unit_square() {
        let square = unit_square();
        assert_eq!(shoelace_area(&square), 1.0);
        assert_eq!(polygon_perimeter(&square), 4);
        assert_eq!(interior_points(&square), 0);
    }

    #[test]
    fn test_open_path_has_no_closing_edge() {
        let mut square = unit_square();
        square.pop();
        assert_eq!(polygon_perimeter(&square), 3);
    }

    #[test]
    fn test_interior_of_three_by_three_ring() {
        // boundary of the 3x3 block around (1, 1)
        let ring: Vec<Point> = [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1), (0, 0)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(shoelace_area(&ring), 4.0);
        assert_eq!(interior_points(&ring), 1);
    }
}
