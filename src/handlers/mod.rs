pub mod pitch_handlers;
