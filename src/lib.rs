use wasm_bindgen::prelude::*;

mod app;
pub mod components;
pub mod status;

pub use components::progress_bar::{ProgressBar, ProgressBarProps};
pub use status::{ParseStatusError, ProgressStatus};

#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize the demo app
    yew::Renderer::<app::App>::new().render();
}
