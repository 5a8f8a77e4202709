use crate::geom::{Coord, Point};

/// Manhattan (L1) distance between two grid points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Euclidean (L2) distance between two map coordinates.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(0, 0);
        let b = Point::new(5, 4);
        assert_eq!(manhattan(a, b), 9);
        assert_eq!(manhattan(b, a), 9);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn euclidean_three_four_five() {
        let a = Coord::new(1.0, 1.0);
        let b = Coord::new(4.0, 5.0);
        assert!((euclidean(a, b) - 5.0).abs() < 1e-12);
    }
}
