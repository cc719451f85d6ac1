use super::{Cell, GridError, Layout};

/// Position of `marker`: the first row that contains it, and that row's first
/// matching column. Only meaningful for markers that occur once.
pub fn locate(layout: &Layout, marker: Cell) -> Result<(usize, usize), GridError> {
    layout
        .iter_rows()
        .enumerate()
        .find_map(|(i, row)| row.iter().position(|&c| c == marker).map(|j| (i, j)))
        .ok_or(GridError::NotFound {
            marker: marker.marker(),
        })
}

pub fn count(layout: &Layout, marker: Cell) -> usize {
    layout
        .iter_rows()
        .map(|row| row.iter().filter(|&&c| c == marker).count())
        .sum()
}
