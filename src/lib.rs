use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod animation;
pub mod config;
pub mod content;
pub mod navigation;
pub mod reveal;
pub mod state;
pub mod subscribe;
pub mod components {
    pub mod demo_video;
    pub mod entrance;
    pub mod header;
    pub mod icon;
}
pub mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Debug, Routable, PartialEq)]
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
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to landing");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_lives_at_root() {
        assert_eq!(Route::Home.to_path(), "/");
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
