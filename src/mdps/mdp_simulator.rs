use crate::common::defs::*;
use rand::distributions::WeightedIndex;
use rand::prelude::*;

pub trait Weighted<S> {
    fn s(&self) -> S;

    fn p(&self) -> Continous;
}

impl Weighted<Discrete> for Transition {
    fn s(&self) -> Discrete {
        self.next_state
    }

    fn p(&self) -> Continous {
        self.probability
    }
}

/// Draws the next state of an outcome list by its weights.
/// `None` if the list is empty or carries no weight.
pub fn pick_next<T, S, R>(rng: &mut R, ts: &[T]) -> Option<S>
where
    T: Weighted<S>,
    R: Rng + ?Sized,
{
    let dist = WeightedIndex::new(ts.iter().map(|item| item.p())).ok()?;
    ts.get(dist.sample(rng)).map(|item| item.s())
}
