pub mod cli;
pub mod host;
pub mod io;
pub mod model;
pub mod ops;
pub mod parse;
