#![allow(dead_code)]

pub mod core;
pub mod engine;
pub mod ltp_server;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::collections::{HashMap, HashSet};
    }
}

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::engine::prelude::*;
    pub use super::ltp_server::*;
    pub use super::utils::prelude::*;
}
