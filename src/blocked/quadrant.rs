//! 64×64 strategy: 8×8 tiles split into 4×4 quadrants.
//!
//! At 64 columns, rows i and i+4 of a matrix map to the same cache set, so
//! a plain 8×8 tile would keep evicting the top half of B's tile while
//! writing the bottom half. The shuffle below only ever keeps four rows of
//! each tile live at a time and parks half of A's top rows in B's
//! top-right quadrant until they can be moved down.
//!
//! Quadrant names refer to the 8×8 tile:
//!
//! ```text
//!   A tile          B tile
//!   ┌────┬────┐     ┌────┬────┐
//!   │ TL │ TR │     │ TLᵗ│ BLᵗ│
//!   ├────┼────┤     ├────┼────┤
//!   │ BL │ BR │     │ TRᵗ│ BRᵗ│
//!   └────┴────┘     └────┴────┘
//! ```

use crate::matrix::memory::TransposeMemory;

/// Tile edge; the shuffle works on its 4×4 quadrants.
pub const TILE_64: usize = 8;

const HALF: usize = TILE_64 / 2;

/// Transpose with the quadrant shuffle.
///
/// Requires both dimensions to be multiples of 8. The dispatcher only
/// routes 64×64 here; [`crate::transpose_with`] checks the shape before
/// calling it on anything else.
#[allow(clippy::identity_op)]
pub fn transpose_64<T: TransposeMemory + ?Sized>(mem: &mut T) {
    let (m, n) = (mem.cols(), mem.rows());

    for block_col in (0..m).step_by(TILE_64) {
        for block_row in (0..n).step_by(TILE_64) {
            // Phase 1: top four rows of A. Each row is one cache line, read
            // once. TL goes straight to its place; TR is parked in B's
            // top-right so it lands on lines that are already loaded.
            for row in block_row..block_row + HALF {
                let v0 = mem.load_a(row, block_col + 0);
                let v1 = mem.load_a(row, block_col + 1);
                let v2 = mem.load_a(row, block_col + 2);
                let v3 = mem.load_a(row, block_col + 3);
                let v4 = mem.load_a(row, block_col + 4);
                let v5 = mem.load_a(row, block_col + 5);
                let v6 = mem.load_a(row, block_col + 6);
                let v7 = mem.load_a(row, block_col + 7);

                mem.store_b(block_col + 0, row, v0);
                mem.store_b(block_col + 1, row, v1);
                mem.store_b(block_col + 2, row, v2);
                mem.store_b(block_col + 3, row, v3);

                mem.store_b(block_col + 0, row + HALF, v4);
                mem.store_b(block_col + 1, row + HALF, v5);
                mem.store_b(block_col + 2, row + HALF, v6);
                mem.store_b(block_col + 3, row + HALF, v7);
            }

            // Phase 2: one column of A's left half per step. Each step
            // finishes one row of B's top half and one row of its bottom
            // half.
            for col in block_col..block_col + HALF {
                // A bottom-left, column `col`
                let v4 = mem.load_a(block_row + 4, col);
                let v5 = mem.load_a(block_row + 5, col);
                let v6 = mem.load_a(block_row + 6, col);
                let v7 = mem.load_a(block_row + 7, col);

                // parked A top-right values
                let v0 = mem.load_b(col, block_row + 4);
                let v1 = mem.load_b(col, block_row + 5);
                let v2 = mem.load_b(col, block_row + 6);
                let v3 = mem.load_b(col, block_row + 7);

                // B top-right
                mem.store_b(col, block_row + 4, v4);
                mem.store_b(col, block_row + 5, v5);
                mem.store_b(col, block_row + 6, v6);
                mem.store_b(col, block_row + 7, v7);

                // B bottom-left
                mem.store_b(col + HALF, block_row + 0, v0);
                mem.store_b(col + HALF, block_row + 1, v1);
                mem.store_b(col + HALF, block_row + 2, v2);
                mem.store_b(col + HALF, block_row + 3, v3);

                // B bottom-right, straight from A bottom-right
                for k in HALF..TILE_64 {
                    let value = mem.load_a(block_row + k, col + HALF);
                    mem.store_b(col + HALF, block_row + k, value);
                }
            }
        }
    }
}
