pub mod karger;

pub use karger::{compute_approx_min_cut, karger_min_cut, Graph};
