use core::fmt::Display;

use crate::{Boxwood, BoxwoodNode};

impl<K: Ord + Display> Boxwood<K> {
    /// Renders the tree as a level-order grid, meant for debugging and for
    /// asserting tree shapes in tests rather than as a serialization format.
    ///
    /// The grid has one row per tree level and `2^height - 1` columns. The
    /// root sits in the middle column, each level down halves the horizontal
    /// offset to a parent. Vacant cells are a single space and every row ends
    /// with a newline; an empty tree renders as an empty string.
    #[must_use]
    pub fn render(&self) -> String {
        let Some(root) = self.root.as_deref() else {
            return String::new();
        };

        let height = root.height as usize;
        let columns = (1 << height) - 1;
        let mut grid = vec![vec![String::from(" "); columns]; height];

        place(root, 0, columns / 2, height, &mut grid);

        let mut out = String::new();
        for row in grid {
            for cell in row {
                out.push_str(&cell);
            }
            out.push('\n');
        }

        out
    }
}

fn place<K: Display>(
    node: &BoxwoodNode<K>,
    row: usize,
    column: usize,
    height: usize,
    grid: &mut [Vec<String>],
) {
    grid[row][column] = node.key.to_string();

    let row = row + 1;
    if row == height {
        return;
    }

    let offset = 1 << (height - row - 1);
    if let Some(left) = node.left.as_deref() {
        place(left, row, column - offset, height, grid);
    }
    if let Some(right) = node.right.as_deref() {
        place(right, row, column + offset, height, grid);
    }
}
