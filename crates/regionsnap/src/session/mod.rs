// Author: Dustin Pilgrim
// License: MIT

pub mod print;
pub mod run;
pub mod script;
pub mod view;

pub use run::run;
