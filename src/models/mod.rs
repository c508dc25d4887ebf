// Module exports for models

pub mod event;
pub mod event_type;
pub mod settings;
pub mod view;
