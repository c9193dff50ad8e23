//! Text rendering of a grid as the player sees it.
//!
//! Everything here goes through [`CellView`], so unrevealed ships print
//! exactly like water.

use alloc::string::String;
use core::fmt::Write;

use crate::common::CellView;
use crate::grid::Grid;

pub const UNKNOWN_MARKER: char = '~';
pub const HIT_MARKER: char = 'X';
pub const MISS_MARKER: char = 'O';

pub fn marker(view: CellView) -> char {
    match view {
        CellView::Unknown => UNKNOWN_MARKER,
        CellView::Hit => HIT_MARKER,
        CellView::Miss => MISS_MARKER,
    }
}

/// One line per row, markers separated by spaces. An empty grid renders as
/// an empty string.
pub fn render(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        push_row(&mut out, row.iter().map(|s| s.view()));
        out.push('\n');
    }
    out
}

/// Like [`render`] with row and column indices around the markers.
pub fn render_labeled(grid: &Grid) -> String {
    let mut out = String::new();
    if grid.is_empty() {
        return out;
    }
    out.push_str("   ");
    for c in 0..grid.size() {
        if c > 0 {
            out.push(' ');
        }
        // only the last digit fits above a single-width marker
        let _ = write!(out, "{}", c % 10);
    }
    out.push('\n');
    for (r, row) in grid.rows().enumerate() {
        let _ = write!(out, "{:2} ", r);
        push_row(&mut out, row.iter().map(|s| s.view()));
        out.push('\n');
    }
    out
}

fn push_row(out: &mut String, views: impl Iterator<Item = CellView>) {
    for (i, view) in views.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(marker(view));
    }
}
