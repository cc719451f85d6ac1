//! Grid world with hazard cells that send the agent back to the start.
//!
//! ```text
//!        0   1   2   3   4
//!   0    T   W   W   W   T
//!   1    W   W   W   W   W
//!   2    R   R   W   R   R
//!   3    W   W   W   W   W
//!   4    B   W   W   W   W
//! ```
//!
//! Every step costs -1, stepping into `R` costs -20 and resets to `B`, and
//! reaching `T` ends the episode.

pub mod builder;
pub mod error;
pub mod layout;
pub mod locator;

pub use builder::*;
pub use error::*;
pub use layout::*;
pub use locator::locate;

use crate::{common::defs::*, mdps::mdp::Mdp};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::debug;

pub const REFERENCE_MAP: [&str; 5] = ["TWWWT", "WWWWW", "RRWRR", "WWWWW", "BWWWW"];

/// Explicit, immutable description of a grid world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// One string of markers per row.
    pub layout: Vec<String>,
    pub actions: Vec<Action>,
}

impl GridConfig {
    pub fn reference() -> Self {
        Self {
            layout: REFERENCE_MAP.iter().map(|r| r.to_string()).collect(),
            actions: Action::reference(),
        }
    }

    pub fn from_json(s: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(s)?)
    }
}

pub struct GridWorld {
    layout: Layout,
    actions: Vec<Action>,
    model: TransitionModel,
    transitions: Rc<Transitions>,
}

impl GridWorld {
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        let layout = Layout::parse(&config.layout)?;
        debug!(rows = layout.rows(), cols = layout.cols(), "parsed layout");

        let model = build(&layout, layout.rows(), layout.cols(), &config.actions)?;
        let transitions = Rc::new(model.to_transitions());

        Ok(Self {
            layout,
            actions: config.actions,
            model,
            transitions,
        })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn model(&self) -> &TransitionModel {
        &self.model
    }

    pub fn reset_state(&self) -> Discrete {
        self.model.reset_state()
    }

    pub fn outcomes(&self, s: Discrete, a: Discrete) -> Option<&[Transition]> {
        self.model.outcomes(s, a)
    }

    pub fn action_label(&self, a: Discrete) -> Option<&str> {
        self.actions.get(a).map(|a| a.label.as_str())
    }
}

impl Mdp for GridWorld {
    fn n_s(&self) -> usize {
        self.model.n_s()
    }

    fn n_a(&self) -> usize {
        self.model.n_a()
    }

    fn transitions(&self) -> Rc<Transitions> {
        Rc::clone(&self.transitions)
    }
}
