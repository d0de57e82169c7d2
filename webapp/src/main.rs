#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, info};

mod browser;

mod style;

mod components;
use components::{navigation::NavBar, toast::notices};

mod home;
use home::Home;

mod about;
use about::About;

mod contact;
use contact::Contact;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    // apply the stored theme before the first render so the page never
    // flashes the wrong colours
    let theme = browser::themes().initialize();
    info!(%theme, "studio site starting");

    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
}

#[component]
pub fn App() -> Element {
    // one notification center for the whole page, shared through context
    use_context_provider(notices);

    rsx! {
        style { "{style::SITE_STYLES}" }
        style { "{style::HOME_STYLES}" }
        Router::<Route> {}
    }
}
