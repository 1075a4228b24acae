use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod navigation;
mod theme;
mod animation;
mod components {
    pub mod icons;
    pub mod nav;
    pub mod particle_field;
}
mod pages {
    pub mod landing;
}

use pages::landing::LandingPage;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <LandingPage /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering landing page");
            html! { <LandingPage /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting N-Track landing page");
    yew::Renderer::<App>::new().render();
}
