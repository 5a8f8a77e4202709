//! A bounded grid of tiles with 4-directional movement.
//!
//! [`Board`] stores the passability of each cell plus a separate annotation
//! layer of [`Mark`]s that hosts use to show search progress and the final
//! route. Marks never influence the search.

use std::fmt;

use wayfind_core::{manhattan, Point, Range};

use crate::traits::{AstarGraph, Graph, MetricGraph};

/// Passability of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Empty,
    Obstacle,
}

impl Tile {
    /// ASCII representation used by [`Board::from_ascii`].
    pub const fn rune(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Obstacle => '#',
        }
    }
}

/// Visualization annotation of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    #[default]
    None,
    Open,
    Closed,
    Path,
    Start,
    Goal,
}

/// A rectangular grid of [`Tile`]s.
///
/// Points use screen coordinates: `x` is the column, `y` the row, and
/// `(0, 0)` is the top-left cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    bounds: Range,
    tiles: Vec<Tile>,
    marks: Vec<Mark>,
}

impl Board {
    /// Create a new board of `width` columns and `height` rows, all empty.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        let len = bounds.len();
        Self {
            bounds,
            tiles: vec![Tile::Empty; len],
            marks: vec![Mark::None; len],
        }
    }

    /// Build a board from rows of `.` (empty) and `#` (obstacle).
    ///
    /// Leading and trailing whitespace is trimmed from the whole string and
    /// from each row, so indented string literals work. Every row must have
    /// the same width.
    pub fn from_ascii(s: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = s.trim().lines().map(str::trim).collect();
        if rows.iter().all(|r| r.is_empty()) {
            return Err(BoardError::Empty);
        }
        let width = rows[0].chars().count();
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(BoardError::InconsistentSize {
                    row: y as i32,
                    expected: width,
                    found,
                });
            }
        }

        let mut board = Self::new(width as i32, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let tile = match ch {
                    '.' => Tile::Empty,
                    '#' => Tile::Obstacle,
                    _ => return Err(BoardError::InvalidRune { ch, pos }),
                };
                board.set(pos, tile);
            }
        }
        Ok(board)
    }

    /// Returns the bounding range of the board.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the board contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Get the tile at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.bounds.index_of(p).map(|i| self.tiles[i])
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.bounds.index_of(p) {
            self.tiles[i] = tile;
        }
    }

    /// Count how many cells hold the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Annotate a cell. Does nothing if out of bounds.
    pub fn mark(&mut self, p: Point, mark: Mark) {
        if let Some(i) = self.bounds.index_of(p) {
            self.marks[i] = mark;
        }
    }

    /// Annotation of a cell, or `None` if out of bounds.
    pub fn mark_at(&self, p: Point) -> Option<Mark> {
        self.bounds.index_of(p).map(|i| self.marks[i])
    }

    /// Reset every annotation to [`Mark::None`].
    pub fn clear_marks(&mut self) {
        self.marks.fill(Mark::None);
    }

    /// Annotate a route: the first point as [`Mark::Start`], the last as
    /// [`Mark::Goal`] and everything in between as [`Mark::Path`].
    pub fn mark_path(&mut self, path: &[Point]) {
        let Some((&last, rest)) = path.split_last() else {
            return;
        };
        for &p in rest {
            self.mark(p, Mark::Path);
        }
        self.mark(last, Mark::Goal);
        self.mark(path[0], Mark::Start);
    }
}

impl Graph for Board {
    type Node = Point;

    fn node_count(&self) -> usize {
        self.tiles.len()
    }

    fn index(&self, node: Point) -> Option<usize> {
        self.bounds.index_of(node)
    }

    fn node(&self, index: usize) -> Point {
        self.bounds.point_at(index)
    }

    fn is_passable(&self, node: Point) -> bool {
        self.at(node) == Some(Tile::Empty)
    }

    fn neighbors(&self, node: Point, buf: &mut Vec<(Point, f64)>) {
        for n in node.neighbors_4() {
            if self.is_passable(n) {
                buf.push((n, 1.0));
            }
        }
    }
}

impl MetricGraph for Board {
    fn distance(&self, a: Point, b: Point) -> f64 {
        f64::from(manhattan(a, b))
    }
}

impl AstarGraph for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let p = Point::new(x, y);
                let ch = match self.mark_at(p) {
                    Some(Mark::Start) => 'S',
                    Some(Mark::Goal) => 'G',
                    Some(Mark::Path) => '*',
                    _ => self.at(p).unwrap_or_default().rune(),
                };
                write!(f, "{ch}")?;
            }
            if y + 1 < self.height() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when building a board from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The input holds no rows.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentSize {
        row: i32,
        expected: usize,
        found: usize,
    },
    /// A character other than `.` or `#` was found.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board: no rows"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "board: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "board contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLED: &str = "
        ..#..
        ..#..
        .....
    ";

    fn neighbor_points(board: &Board, p: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        board.neighbors(p, &mut buf);
        buf.into_iter().map(|(n, _)| n).collect()
    }

    #[test]
    fn parse_and_size() {
        let b = Board::from_ascii(WALLED).unwrap();
        assert_eq!(b.width(), 5);
        assert_eq!(b.height(), 3);
        assert_eq!(b.count(Tile::Obstacle), 2);
        assert_eq!(b.at(Point::new(2, 1)), Some(Tile::Obstacle));
        assert_eq!(b.at(Point::new(2, 2)), Some(Tile::Empty));
        assert_eq!(b.at(Point::new(5, 0)), None);
    }

    #[test]
    fn neighbors_follow_up_left_down_right() {
        let b = Board::new(3, 3);
        assert_eq!(
            neighbor_points(&b, Point::new(1, 1)),
            vec![
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 2),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn neighbors_skip_obstacles_and_edges() {
        let b = Board::from_ascii(WALLED).unwrap();
        // Corner: only down and right exist; right of (1,0) is a wall.
        assert_eq!(
            neighbor_points(&b, Point::new(0, 0)),
            vec![Point::new(0, 1), Point::new(1, 0)]
        );
        assert_eq!(
            neighbor_points(&b, Point::new(1, 0)),
            vec![Point::new(0, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn adjacency_is_symmetric() {
        let b = Board::from_ascii(WALLED).unwrap();
        for p in b.bounds() {
            if !b.is_passable(p) {
                continue;
            }
            for n in neighbor_points(&b, p) {
                assert!(neighbor_points(&b, n).contains(&p), "{p} -> {n}");
            }
        }
    }

    #[test]
    fn index_round_trip() {
        let b = Board::new(4, 3);
        assert_eq!(b.node_count(), 12);
        for i in 0..b.node_count() {
            assert_eq!(b.index(b.node(i)), Some(i));
        }
        assert_eq!(b.index(Point::new(-1, 0)), None);
    }

    #[test]
    fn distance_is_manhattan() {
        let b = Board::new(6, 5);
        assert_eq!(b.distance(Point::new(0, 0), Point::new(5, 4)), 9.0);
        assert_eq!(b.estimate(Point::new(5, 4), Point::new(0, 0)), 9.0);
        assert_eq!(b.metric_scale(), 1.0);
    }

    #[test]
    fn marks_do_not_change_passability() {
        let mut b = Board::new(3, 1);
        b.mark_path(&[Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
        assert_eq!(b.mark_at(Point::new(0, 0)), Some(Mark::Start));
        assert_eq!(b.mark_at(Point::new(1, 0)), Some(Mark::Path));
        assert_eq!(b.mark_at(Point::new(2, 0)), Some(Mark::Goal));
        assert!(b.is_passable(Point::new(1, 0)));
        assert_eq!(b.to_string(), "S*G");
        b.clear_marks();
        assert_eq!(b.to_string(), "...");
    }

    #[test]
    fn single_point_path_marks_start() {
        let mut b = Board::new(2, 2);
        b.mark_path(&[Point::new(1, 1)]);
        assert_eq!(b.mark_at(Point::new(1, 1)), Some(Mark::Start));
        b.mark_path(&[]);
    }

    #[test]
    fn inconsistent_size_error() {
        let err = Board::from_ascii("..\n...").unwrap_err();
        assert_eq!(
            err,
            BoardError::InconsistentSize {
                row: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn invalid_rune_error() {
        let err = Board::from_ascii("..\n.x").unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn empty_input_error() {
        assert_eq!(Board::from_ascii("  \n "), Err(BoardError::Empty));
    }
}
