use yew::prelude::*;
use log::{error, info};

mod config;
mod reveal;
mod styles;
mod pages {
    pub mod home;
}

use pages::home::Home;


#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    // The registry keeps the style mounted for the lifetime of the page
    if let Err(e) = styles::install() {
        error!("Failed to install hero stylesheet: {}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
