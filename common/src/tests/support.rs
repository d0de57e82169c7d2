// in-memory fakes for the browser-facing traits

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{
    notify::{Notification, NotificationId, NotificationPhase, NotificationSurface},
    timer::Scheduler,
};

struct Pending {
    due: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

// a scheduler driven by hand: tasks run only when the clock is advanced past
// their due time, in due order (ties in scheduling order)
#[derive(Clone, Default)]
pub struct ManualScheduler {
    now: Rc<Cell<u64>>,
    seq: Rc<Cell<u64>>,
    pending: Rc<RefCell<Vec<Pending>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;

        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let earliest = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(idx, _)| idx);

                earliest.map(|idx| pending.remove(idx))
            };

            match next {
                Some(pending) => {
                    self.now.set(pending.due);
                    (pending.task)();
                }
                None => break,
            }
        }

        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);

        self.pending.borrow_mut().push(Pending {
            due: self.now.get() + u64::from(delay_ms),
            seq,
            task,
        });
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    Mount(NotificationId, Notification),
    Phase(NotificationId, NotificationPhase),
    Unmount(NotificationId),
}

// a stand-in for the document: tracks which notification elements exist and
// panics if two are ever present at once
#[derive(Clone, Default)]
pub struct RecordingSurface {
    events: Rc<RefCell<Vec<SurfaceEvent>>>,
    elements: Rc<RefCell<Vec<(NotificationId, Notification, NotificationPhase)>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    pub fn element_count(&self) -> usize {
        self.elements.borrow().len()
    }

    pub fn shown(&self) -> Option<(Notification, NotificationPhase)> {
        self.elements
            .borrow()
            .first()
            .map(|(_, notification, phase)| (notification.clone(), *phase))
    }
}

impl NotificationSurface for RecordingSurface {
    fn mount(&self, id: NotificationId, notification: &Notification) {
        let mut elements = self.elements.borrow_mut();
        assert!(elements.is_empty(), "notification {id} mounted over another");

        elements.push((id, notification.clone(), NotificationPhase::Entering));
        self.events
            .borrow_mut()
            .push(SurfaceEvent::Mount(id, notification.clone()));
    }

    fn set_phase(&self, id: NotificationId, phase: NotificationPhase) {
        for element in self.elements.borrow_mut().iter_mut() {
            if element.0 == id {
                element.2 = phase;
            }
        }
        self.events.borrow_mut().push(SurfaceEvent::Phase(id, phase));
    }

    fn unmount(&self, id: NotificationId) {
        self.elements.borrow_mut().retain(|element| element.0 != id);
        self.events.borrow_mut().push(SurfaceEvent::Unmount(id));
    }
}
