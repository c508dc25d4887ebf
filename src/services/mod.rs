// Service module exports

pub mod agenda;
pub mod conflict;
pub mod drag;
pub mod event;
pub mod reschedule;
pub mod seed;
pub mod settings;
