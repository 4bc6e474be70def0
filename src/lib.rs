pub mod cli;
pub mod cx;
pub mod trace;
