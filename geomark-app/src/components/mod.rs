mod address_input;
mod map;

pub use self::{address_input::*, map::*};
