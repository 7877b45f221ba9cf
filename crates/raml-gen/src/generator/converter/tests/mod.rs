mod common;
mod media_types;
mod parameters;
mod resources;
