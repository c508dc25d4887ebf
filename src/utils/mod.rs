// Utility module exports

pub mod clock;
pub mod color;
pub mod date;
