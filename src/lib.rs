#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod error;
pub mod harness;
pub mod red_black_tree;
