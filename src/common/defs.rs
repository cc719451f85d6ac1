use crate::GridError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub type Discrete = usize;
pub type Continous = f64;

/// One possible result of taking an action in a state.
/// On the wire this is the gym tuple `[p, s', r, done]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "(Continous, Discrete, Continous, bool)",
    into = "(Continous, Discrete, Continous, bool)"
)]
pub struct Transition {
    pub probability: Continous,
    pub next_state: Discrete,
    pub reward: Continous,
    pub done: bool,
}

impl Transition {
    /// The only kind of outcome the grid produces: probability 1.0.
    pub fn certain(next_state: Discrete, reward: Continous, done: bool) -> Self {
        Self {
            probability: 1.0,
            next_state,
            reward,
            done,
        }
    }
}

impl From<(Continous, Discrete, Continous, bool)> for Transition {
    fn from((probability, next_state, reward, done): (Continous, Discrete, Continous, bool)) -> Self {
        Self {
            probability,
            next_state,
            reward,
            done,
        }
    }
}

impl From<Transition> for (Continous, Discrete, Continous, bool) {
    fn from(t: Transition) -> Self {
        (t.probability, t.next_state, t.reward, t.done)
    }
}

/// Sparse form keyed by `(state, action)`, as consumed by model based solvers.
pub type Transitions = HashMap<(Discrete, Discrete), Vec<Transition>>;

/// Reads the gym `transitions` layout: `{"<s>": {"<a>": [[p, s', r, done], ...]}}`.
pub fn transitions_from_json(val: &Value) -> Result<Transitions, GridError> {
    let obj = val.as_object().ok_or_else(|| {
        GridError::MalformedTransitions("expected an object keyed by state".to_string())
    })?;

    let mut transitions = Transitions::new();
    for (s, s_trans) in obj {
        let s = parse_key(s)?;
        let s_trans = s_trans.as_object().ok_or_else(|| {
            GridError::MalformedTransitions(format!("state {s}: expected an object keyed by action"))
        })?;
        for (a, a_trans) in s_trans {
            let a = parse_key(a)?;
            let ts = serde_json::from_value::<Vec<Transition>>(a_trans.clone())?;
            transitions.insert((s, a), ts);
        }
    }

    Ok(transitions)
}

fn parse_key(key: &str) -> Result<Discrete, GridError> {
    key.parse::<Discrete>()
        .map_err(|_| GridError::MalformedTransitions(format!("'{key}' is not an index")))
}
