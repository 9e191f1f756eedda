// Terminal rendering of the simulation state

mod ascii;

pub use ascii::{AsciiRenderer, CLEAR_SCREEN};
