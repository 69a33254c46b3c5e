//! Square tiles with a held diagonal (32×32 and the general fallback).

use crate::matrix::memory::TransposeMemory;

/// Tile edge for the 32×32 strategy: one 32-byte line holds 8 `i32`.
pub const TILE_32: usize = 8;

/// Tile edge for the general strategy.
pub const TILE_GENERAL: usize = 16;

/// Transpose in `tile × tile` blocks, clamping each block to the matrix.
///
/// A[k][k] and B[k][k] sit at the same offset in their matrices, so with A
/// and B laid out a multiple of the cache size apart they share a set. If
/// the diagonal element were written as soon as it is read, the store to
/// B would evict the line of A that the rest of the row still needs. The
/// diagonal value is held instead and written once the row of the tile is
/// done.
///
/// Works for any shape; tiles on the right and bottom edges are partial.
#[inline(always)]
pub fn transpose_deferred<T: TransposeMemory + ?Sized>(mem: &mut T, tile: usize) {
    let (m, n) = (mem.cols(), mem.rows());

    for block_col in (0..m).step_by(tile) {
        let col_end = (block_col + tile).min(m);

        for block_row in (0..n).step_by(tile) {
            let row_end = (block_row + tile).min(n);

            for row in block_row..row_end {
                // (index, value) of the diagonal element in this tile row
                let mut held: Option<(usize, i32)> = None;

                for col in block_col..col_end {
                    let value = mem.load_a(row, col);
                    if row != col {
                        mem.store_b(col, row, value);
                    } else {
                        held = Some((row, value));
                    }
                }

                if let Some((k, value)) = held {
                    mem.store_b(k, k, value);
                }
            }
        }
    }
}

/// 32×32 strategy: 8×8 tiles with the diagonal held back.
pub fn transpose_32<T: TransposeMemory + ?Sized>(mem: &mut T) {
    transpose_deferred(mem, TILE_32);
}

/// General strategy: 16×16 tiles clamped to the matrix extent.
pub fn transpose_general<T: TransposeMemory + ?Sized>(mem: &mut T) {
    transpose_deferred(mem, TILE_GENERAL);
}
