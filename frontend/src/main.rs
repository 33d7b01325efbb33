use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod demo;
mod dom;
mod error;
mod pages {
    pub mod demo;
}

use pages::demo::Demo;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Demo,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Demo => html! { <Demo /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404"}</h1>
                <Link<Route> to={Route::Demo}>{"Back to the demo"}</Link<Route>>
            </div>
        },
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
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Starting canvas demo");
    yew::Renderer::<App>::new().render();
}
