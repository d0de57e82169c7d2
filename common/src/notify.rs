use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use tracing::debug;

use crate::{config::NotifyConfig, timer::Scheduler};

// structs and types

pub type NotificationId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Notification {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

// where a notification is in its lifecycle
//
// Entering is mounted but still off-screen, so that the switch to Visible
// triggers the css entrance transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveNotification {
    pub id: NotificationId,
    pub notification: Notification,
    pub phase: NotificationPhase,
}

// the rendering side of the notification center
//
// calls always arrive in the order mount, set_phase..., unmount for a given
// id, and an id is always unmounted before the next one is mounted
pub trait NotificationSurface {
    fn mount(&self, id: NotificationId, notification: &Notification);

    fn set_phase(&self, id: NotificationId, phase: NotificationPhase);

    fn unmount(&self, id: NotificationId);
}

// anything that can put a message in front of the user
pub trait Notify {
    fn notify(&self, notification: Notification);
}

struct Inner<S, T> {
    surface: S,
    scheduler: T,
    timings: NotifyConfig,
    next_id: NotificationId,
    live: Option<LiveNotification>,
}

// NotificationCenter
//
// owns the single notification that may be on screen.  showing a new one
// evicts the old one immediately, and every timer carries the id it was
// scheduled for so that timers belonging to an evicted notification do nothing
pub struct NotificationCenter<S, T> {
    inner: Rc<RefCell<Inner<S, T>>>,
}

impl<S, T> Clone for NotificationCenter<S, T> {
    fn clone(&self) -> Self {
        NotificationCenter {
            inner: self.inner.clone(),
        }
    }
}

impl<S, T> NotificationCenter<S, T>
where
    S: NotificationSurface + 'static,
    T: Scheduler + 'static,
{
    pub fn new(surface: S, scheduler: T, timings: NotifyConfig) -> Self {
        NotificationCenter {
            inner: Rc::new(RefCell::new(Inner {
                surface,
                scheduler,
                timings,
                next_id: 0,
                live: None,
            })),
        }
    }

    pub fn show(&self, notification: Notification) -> NotificationId {
        let (id, enter_delay_ms, dwell_ms) = {
            let mut inner = self.inner.borrow_mut();

            if let Some(old) = inner.live.take() {
                debug!(id = old.id, "evicting notification");
                inner.surface.unmount(old.id);
            }

            inner.next_id += 1;
            let id = inner.next_id;

            inner.surface.mount(id, &notification);
            inner.live = Some(LiveNotification {
                id,
                notification,
                phase: NotificationPhase::Entering,
            });

            (id, inner.timings.enter_delay_ms, inner.timings.dwell_ms)
        };

        self.schedule(enter_delay_ms, move |center| center.reveal(id));
        self.schedule(dwell_ms, move |center| center.dismiss(id));

        id
    }

    pub fn current(&self) -> Option<LiveNotification> {
        self.inner.borrow().live.clone()
    }

    // start the exit transition; the element is removed once it finishes
    pub fn dismiss(&self, id: NotificationId) {
        let exit_ms = {
            let mut inner = self.inner.borrow_mut();

            if !inner.set_phase(id, NotificationPhase::Leaving) {
                return;
            }

            inner.timings.exit_ms
        };

        self.schedule(exit_ms, move |center| center.remove(id));
    }

    fn reveal(&self, id: NotificationId) {
        let mut inner = self.inner.borrow_mut();

        let entering = matches!(
            &inner.live,
            Some(live) if live.id == id && live.phase == NotificationPhase::Entering
        );

        if entering {
            inner.set_phase(id, NotificationPhase::Visible);
        }
    }

    fn remove(&self, id: NotificationId) {
        let mut inner = self.inner.borrow_mut();

        if inner.live.as_ref().is_some_and(|live| live.id == id) {
            inner.live = None;
            inner.surface.unmount(id);
        }
    }

    // timers hold a weak handle so a pending timeout never keeps the center alive
    fn schedule(&self, delay_ms: u32, task: impl FnOnce(&Self) + 'static) {
        let weak: Weak<RefCell<Inner<S, T>>> = Rc::downgrade(&self.inner);

        self.inner.borrow().scheduler.after(
            delay_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    task(&NotificationCenter { inner });
                }
            }),
        );
    }
}

impl<S: NotificationSurface, T> Inner<S, T> {
    // returns false if id is not the live notification (or it is already in that phase)
    fn set_phase(&mut self, id: NotificationId, phase: NotificationPhase) -> bool {
        match self.live.as_mut() {
            Some(live) if live.id == id && live.phase != phase => {
                live.phase = phase;
                self.surface.set_phase(id, phase);
                true
            }
            _ => false,
        }
    }
}

impl<S, T> Notify for NotificationCenter<S, T>
where
    S: NotificationSurface + 'static,
    T: Scheduler + 'static,
{
    fn notify(&self, notification: Notification) {
        self.show(notification);
    }
}

#[cfg(test)]
#[path = "tests/notify_tests.rs"]
mod tests;
