//! The evaluator and search built on top of `core`.

pub(crate) mod evaluator;
pub(crate) mod search;

pub mod prelude {
    pub use super::evaluator::evaluate;
    pub use super::search::{alpha_beta_root_call, SearchResult};
}
