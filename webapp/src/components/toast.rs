use dioxus::prelude::*;

use common::notify::{
    Notification, NotificationCenter, NotificationId, NotificationPhase, NotificationSurface,
};

use crate::browser::{site_config, timer::GlooScheduler};

// global toast signal
//
// like the modal stack, there is exactly one of these per page; the
// notification center is the only writer
pub static TOAST: GlobalSignal<Option<Toast>> = Signal::global(|| None);

pub type Notices = NotificationCenter<ToastSurface, GlooScheduler>;

pub fn notices() -> Notices {
    NotificationCenter::new(ToastSurface, GlooScheduler, site_config().notify.clone())
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: NotificationId,
    pub notification: Notification,
    pub phase: NotificationPhase,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ToastSurface;

impl NotificationSurface for ToastSurface {
    fn mount(&self, id: NotificationId, notification: &Notification) {
        *TOAST.write() = Some(Toast {
            id,
            notification: notification.clone(),
            phase: NotificationPhase::Entering,
        });
    }

    fn set_phase(&self, id: NotificationId, phase: NotificationPhase) {
        if let Some(toast) = TOAST.write().as_mut().filter(|toast| toast.id == id) {
            toast.phase = phase;
        }
    }

    fn unmount(&self, id: NotificationId) {
        let mut toast = TOAST.write();

        if toast.as_ref().is_some_and(|toast| toast.id == id) {
            *toast = None;
        }
    }
}

fn toast_class(toast: &Toast) -> String {
    let phase = match toast.phase {
        NotificationPhase::Entering => "entering",
        NotificationPhase::Visible => "visible",
        NotificationPhase::Leaving => "leaving",
    };

    format!("notification {} {phase}", toast.notification.kind.as_class())
}

// ToastBox
//
// renders whatever is in TOAST.  it goes through a keyed list, so a
// replacement toast swaps out the old element and replays the entrance
// transition instead of being patched into it
#[component]
pub fn ToastBox() -> Element {
    let current = TOAST.read();

    rsx! {
        for toast in current.iter() {
            div {
                key: "{toast.id}",
                class: toast_class(toast),
                role: "status",
                "{toast.notification.message}"
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/toast_tests.rs"]
mod tests;
