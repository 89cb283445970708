pub mod events;
pub mod input;
pub mod load;
pub mod settings;
pub mod state;
