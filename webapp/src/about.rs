use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{Route, home::AnchorLink};

const VALUES: [(&str, &str); 3] = [
    ("Craft", "We sweat the details nobody asks about."),
    ("Candour", "Clear estimates, honest trade-offs, no surprises."),
    ("Care", "We stay around after launch."),
];

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "about",
            section { class: "hero hero-compact",
                div { class: "container",
                    h1 { class: "hero-title", "About us" }
                    p { class: "hero-subtitle",
                        "A small studio of engineers and designers who like shipping things."
                    }
                    AnchorLink { href: "#values", class: "btn btn-secondary", "How we work" }
                }
            }

            section { class: "values", id: "values",
                div { class: "container",
                    h2 { class: "section-title", "What we value" }
                    div { class: "values-grid",
                        for (title, text) in VALUES {
                            div { key: "{title}", class: "value-card",
                                h3 { "{title}" }
                                p { "{text}" }
                            }
                        }
                    }
                    Link { to: Route::Contact {}, class: "btn btn-primary", "Work with us" }
                }
            }
        }
    }
}
