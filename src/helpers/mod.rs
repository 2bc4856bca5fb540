//! Helper functions shared by the generator and the CLI

mod route;

pub use route::*;
