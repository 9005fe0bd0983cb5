use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod pages;
mod theme;
mod utils;

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    // Apply the saved theme before the first paint so the page does not
    // flash the wrong palette.
    theme::apply(theme::initial());
    yew::Renderer::<App>::new().render();
}
