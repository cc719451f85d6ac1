extern crate rand;
extern crate serde;
extern crate serde_json;

pub mod common;
pub mod envs;
pub mod mdps;

pub use common::defs::*;
pub use envs::grid_world::*;
pub use mdps::{mdp::*, mdp_simulator::*};
