use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::nav::{anchor_fragment, anchor_scroll_target};

use crate::{
    Route,
    browser::{
        dom::{element_top, smooth_scroll_to},
        site_config,
    },
};

// an in-page link that glides to its target instead of jumping, stopping
// short of the target by the header height
#[derive(Clone, PartialEq, Props)]
pub struct AnchorLinkProps {
    href: &'static str,
    class: &'static str,
    children: Element,
}

#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let href = props.href;

    rsx! {
        a {
            class: props.class,
            href,
            onclick: move |event| {
                let Some(top) = anchor_fragment(href).and_then(element_top) else {
                    return;
                };

                event.prevent_default();
                smooth_scroll_to(anchor_scroll_target(&site_config().nav, top));
            },
            {props.children}
        }
    }
}

struct Service {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        icon: "web-icon",
        title: "Web Development",
        blurb: "Fast, accessible sites and web apps, from landing pages to full products.",
    },
    Service {
        icon: "mobile-icon",
        title: "Mobile Apps",
        blurb: "Native-feeling apps for iOS and Android built on one shared codebase.",
    },
    Service {
        icon: "design-icon",
        title: "UI/UX Design",
        blurb: "Interfaces that are pleasant to use and simple to maintain.",
    },
];

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-container",
            // Hero section
            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        h1 { class: "hero-title", "Tek Spark Studios" }
                        p { class: "hero-subtitle",
                            "We design and build digital products that people enjoy using"
                        }
                        div { class: "hero-actions",
                            AnchorLink { href: "#services", class: "btn btn-secondary btn-lg",
                                "Our Services"
                            }
                            Link {
                                to: Route::Contact {},
                                class: "btn btn-primary btn-lg",
                                "Start a Project"
                            }
                        }
                    }
                }
            }

            // Services section
            section { class: "services", id: "services",
                div { class: "container",
                    h2 { class: "section-title", "What we do" }
                    div { class: "services-grid",
                        for service in SERVICES.iter() {
                            div { key: "{service.title}", class: "service-card",
                                div { class: "service-icon {service.icon}" }
                                h3 { "{service.title}" }
                                p { "{service.blurb}" }
                            }
                        }
                    }
                }
            }

            // Call to action
            section { class: "cta-section",
                div { class: "container",
                    h2 { "Have an idea?" }
                    p { "Tell us about it. The first conversation is always free." }
                    Link { to: Route::Contact {}, class: "btn btn-primary btn-lg", "Get in Touch" }
                }
            }
        }
    }
}
