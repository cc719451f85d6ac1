pub mod mdp;
pub mod mdp_simulator;
