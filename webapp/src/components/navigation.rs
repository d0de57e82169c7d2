use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::nav::{is_active_link, is_scrolled};

use crate::{
    Route,
    browser::{
        dom::{NAV_ID, scroll_y, set_nav_scrolled},
        listener::Listener,
        site_config,
    },
    components::{
        theme_toggle::{ThemeShortcut, ThemeToggle},
        toast::ToastBox,
    },
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    let active = is_active_link(&current_path.to_string(), &target.to_string());

    rsx! {
        Link {
            class: if active { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

// keeps the nav bar's "scrolled" class in sync with the page offset for as
// long as the nav bar is mounted
fn use_scrolled_nav() {
    use_hook(|| {
        let nav = site_config().nav.clone();
        set_nav_scrolled(is_scrolled(&nav, scroll_y()));

        let listener = web_sys::window().and_then(|window| {
            Listener::new(window, "scroll", move |_| {
                set_nav_scrolled(is_scrolled(&nav, scroll_y()));
            })
        });

        Rc::new(listener)
    });
}

#[component]
fn NavBarInner() -> Element {
    use_scrolled_nav();

    rsx! {
        nav { class: "app-header", id: NAV_ID,
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home {},
                        span { class: "logo-mark", "◆" }
                        span { class: "logo-text", "Tek Spark Studios" }
                    }
                }

                div { class: "nav-links",
                    NavBarButton { name: "Home".to_owned(), target: Route::Home {} }
                    NavBarButton { name: "About".to_owned(), target: Route::About {} }
                    NavBarButton { name: "Contact".to_owned(), target: Route::Contact {} }
                    ThemeToggle {}
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        ThemeShortcut {}
        NavBarInner {}
        ToastBox {}
        Outlet::<Route> {}
    }
}
