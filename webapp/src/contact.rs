use std::rc::Rc;

use dioxus::prelude::*;

use common::contact::{ContactController, ContactFields, ContactForm, EmailJs};

use crate::{
    browser::{site_config, timer::GlooScheduler},
    components::toast::Notices,
};

// the contact form's state, one signal per field
//
// signals are Copy handles, so the controller gets its own copy of this and
// writes through it exactly as the inputs below do
#[derive(Clone, Copy)]
struct FormSignals {
    name: Signal<String>,
    email: Signal<String>,
    subject: Signal<String>,
    message: Signal<String>,
    pending: Signal<bool>,
    pulse: Signal<bool>,
}

impl ContactForm for FormSignals {
    fn values(&self) -> ContactFields {
        ContactFields {
            name: self.name.read().clone(),
            email: self.email.read().clone(),
            subject: self.subject.read().clone(),
            message: self.message.read().clone(),
        }
    }

    fn set_pending(&self, pending: bool) {
        let mut signal = self.pending;
        signal.set(pending);
    }

    fn reset(&self) {
        for mut field in [self.name, self.email, self.subject, self.message] {
            field.set(String::new());
        }
    }

    // the pulse ends on a timer, by which point the page may have been left
    fn set_pulse(&self, active: bool) {
        let mut signal = self.pulse;

        if let Ok(mut pulse) = signal.try_write() {
            *pulse = active;
        }
    }
}

type Controller = ContactController<EmailJs, FormSignals, Notices, GlooScheduler>;

#[derive(Clone, PartialEq, Props)]
struct FieldProps {
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    value: Signal<String>,
}

#[component]
fn FormField(props: FieldProps) -> Element {
    let mut value = props.value;

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: props.id, "{props.label}" }
            if props.kind == "textarea" {
                textarea {
                    class: "form-textarea",
                    id: props.id,
                    name: props.id,
                    rows: "6",
                    value: "{value}",
                    oninput: move |event| value.set(event.value()),
                }
            } else {
                input {
                    class: "form-input",
                    id: props.id,
                    name: props.id,
                    r#type: props.kind,
                    value: "{value}",
                    oninput: move |event| value.set(event.value()),
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let form = FormSignals {
        name: use_signal(String::new),
        email: use_signal(String::new),
        subject: use_signal(String::new),
        message: use_signal(String::new),
        pending: use_signal(|| false),
        pulse: use_signal(|| false),
    };

    let notices = use_context::<Notices>();

    let controller: Rc<Controller> = use_hook(move || {
        let config = &site_config().contact;

        Rc::new(ContactController::new(
            EmailJs::new(config),
            form,
            notices,
            GlooScheduler,
            config,
        ))
    });

    let pending = (form.pending)();
    let form_style = if (form.pulse)() {
        "transform: scale(0.98);"
    } else {
        "transform: scale(1);"
    };

    rsx! {
        section { class: "contact", id: "contact",
            div { class: "container",
                h1 { class: "section-title", "Let's build something" }
                p { class: "section-subtitle",
                    "Tell us about your project and we'll get back to you within a couple of days."
                }

                form {
                    class: "contact-form",
                    novalidate: true,
                    style: form_style,
                    onsubmit: move |event| {
                        event.prevent_default();

                        // the controller refuses overlapping submissions on its
                        // own, the disabled button is just feedback
                        let controller = controller.clone();
                        spawn(async move {
                            controller.submit().await;
                        });
                    },

                    FormField { id: "name", label: "Name", kind: "text", value: form.name }
                    FormField { id: "email", label: "Email", kind: "email", value: form.email }
                    FormField { id: "subject", label: "Subject", kind: "text", value: form.subject }
                    FormField { id: "message", label: "Message", kind: "textarea", value: form.message }

                    button {
                        class: if pending { "btn btn-primary submit-btn loading" } else { "btn btn-primary submit-btn" },
                        r#type: "submit",
                        disabled: pending,
                        aria_busy: pending,
                        if !pending {
                            "Send Message"
                        }
                    }
                }
            }
        }
    }
}
