#[allow(dead_code)]
#[path = "../../fixtures/widgets_api/mod.rs"]
mod widgets_api;

mod cli;
