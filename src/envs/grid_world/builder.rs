use super::{locator, Action, Cell, GridError, Layout};
use crate::common::defs::*;
use itertools::iproduct;
use tracing::{debug, info};

pub const STEP_REWARD: Continous = -1.;
pub const HAZARD_REWARD: Continous = -20.;
pub const IDLE_REWARD: Continous = 0.;

/// Flattens a grid position into a state index.
///
/// NOTE: the stride is the number of *rows*, not columns: `row * rows + col`.
/// Consumers depend on this exact numbering, so it must not be "fixed" to the
/// usual `row * cols + col`. It is only collision free because encode and
/// decode share the stride and the grid is square.
pub fn state_index(row: usize, col: usize, rows: usize) -> Discrete {
    row * rows + col
}

/// Inverse of [`state_index`]: `divmod(s, rows)`.
pub fn state_position(s: Discrete, rows: usize) -> (usize, usize) {
    (s / rows, s % rows)
}

/// Dense `n_s x n_a` table of outcome lists.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionModel {
    table: Vec<Vec<Vec<Transition>>>,
    reset_state: Discrete,
}

impl TransitionModel {
    pub fn outcomes(&self, s: Discrete, a: Discrete) -> Option<&[Transition]> {
        self.table.get(s).and_then(|acts| acts.get(a)).map(Vec::as_slice)
    }

    /// Where the agent is sent back to after entering a hazard.
    pub fn reset_state(&self) -> Discrete {
        self.reset_state
    }

    pub fn n_s(&self) -> usize {
        self.table.len()
    }

    pub fn n_a(&self) -> usize {
        self.table.first().map_or(0, Vec::len)
    }

    /// `((s, a), outcomes)` in state-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((Discrete, Discrete), &[Transition])> {
        self.table.iter().enumerate().flat_map(|(s, acts)| {
            acts.iter()
                .enumerate()
                .map(move |(a, ts)| ((s, a), ts.as_slice()))
        })
    }

    pub fn to_transitions(&self) -> Transitions {
        self.iter().map(|(k, ts)| (k, ts.to_vec())).collect()
    }

    /// Gym `transitions` layout: `{"<s>": {"<a>": [[p, s', r, done], ...]}}`.
    pub fn to_json(&self) -> Result<serde_json::Value, GridError> {
        let mut obj = serde_json::Map::new();
        for (s, acts) in self.table.iter().enumerate() {
            let mut s_trans = serde_json::Map::new();
            for (a, ts) in acts.iter().enumerate() {
                s_trans.insert(a.to_string(), serde_json::to_value(ts)?);
            }
            obj.insert(s.to_string(), serde_json::Value::Object(s_trans));
        }

        Ok(serde_json::Value::Object(obj))
    }
}

/// Builds the full transition table for `layout`.
///
/// Hazard and terminal cells ignore the action and loop on themselves. Start
/// and white cells move by the action's delta, bouncing back in place when it
/// leaves the grid. Only a move out of a white cell looks at the destination:
/// a hazard resets to the start cell, a terminal ends the episode.
pub fn build(
    layout: &Layout,
    rows: usize,
    cols: usize,
    actions: &[Action],
) -> Result<TransitionModel, GridError> {
    if layout.rows() != rows || layout.cols() != cols {
        return Err(GridError::DimensionMismatch {
            rows,
            cols,
            actual_rows: layout.rows(),
            actual_cols: layout.cols(),
        });
    }
    if rows != cols {
        return Err(GridError::NonSquareLayout { rows, cols });
    }
    if actions.is_empty() {
        return Err(GridError::NoActions);
    }
    let starts = locator::count(layout, Cell::Start);
    if starts > 1 {
        return Err(GridError::DuplicateStart { count: starts });
    }

    let (row_0, col_0) = locator::locate(layout, Cell::Start)?;
    let reset_state = state_index(row_0, col_0, rows);
    debug!(row = row_0, col = col_0, reset_state, "located start cell");

    let n_s = rows * cols;
    let mut table = vec![vec![Vec::with_capacity(1); actions.len()]; n_s];
    for (s, (a, action)) in iproduct!(0..n_s, actions.iter().enumerate()) {
        let (row, col) = state_position(s, rows);
        let dest = destination(row, col, action, rows, cols);
        let t = outcome(layout, s, row, col, dest, rows, reset_state);
        table[s][a].push(t);
    }

    info!(n_s, n_a = actions.len(), reset_state, "built transition model");

    Ok(TransitionModel { table, reset_state })
}

/// `None` when the move leaves the grid.
fn destination(
    row: usize,
    col: usize,
    action: &Action,
    rows: usize,
    cols: usize,
) -> Option<(usize, usize)> {
    let (dr, dc) = action.delta;
    let row_ = row.checked_add_signed(dr)?;
    let col_ = col.checked_add_signed(dc)?;
    (row_ < rows && col_ < cols).then_some((row_, col_))
}

fn outcome(
    layout: &Layout,
    s: Discrete,
    row: usize,
    col: usize,
    dest: Option<(usize, usize)>,
    rows: usize,
    reset_state: Discrete,
) -> Transition {
    match (layout[(row, col)], dest) {
        (Cell::Start | Cell::White, None) => Transition::certain(s, STEP_REWARD, false),
        (Cell::Start, Some((row_, col_))) => {
            Transition::certain(state_index(row_, col_, rows), STEP_REWARD, false)
        }
        (Cell::White, Some((row_, col_))) => {
            let state_ = state_index(row_, col_, rows);
            match layout[(row_, col_)] {
                Cell::Hazard => Transition::certain(reset_state, HAZARD_REWARD, false),
                Cell::Terminal => Transition::certain(state_, STEP_REWARD, true),
                Cell::White | Cell::Start => Transition::certain(state_, STEP_REWARD, false),
            }
        }
        (Cell::Hazard, _) => Transition::certain(s, IDLE_REWARD, false),
        (Cell::Terminal, _) => Transition::certain(s, IDLE_REWARD, true),
    }
}
