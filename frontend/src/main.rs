use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod listeners;
mod timers;

mod controllers {
    pub mod accordion;
    pub mod carousel;
    pub mod contact_form;
    pub mod menu;
}

mod components {
    pub mod card;
    pub mod footer;
    pub mod header;
    pub mod heading;
    pub mod reveal;
    pub mod theme;
}

mod sections {
    pub mod about;
    pub mod contact;
    pub mod cta;
    pub mod expertise;
    pub mod faq;
    pub mod hero;
    pub mod services;
    pub mod team;
    pub mod testimonials;
}

mod pages {
    pub mod landing;
}

use components::theme::Theme;
use pages::landing::Landing;

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
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Theme />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        error!("error initializing log: {}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
