use tracing::warn;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, EventTarget};

// a dom event listener that is removed again when dropped
//
// components keep one of these in a hook, so the listener lives exactly as
// long as the component does
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: impl Into<EventTarget>,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let target = target.into();
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        if let Err(err) =
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            warn!("failed to listen for {event}: {err:?}");
            return None;
        }

        Some(Listener {
            target,
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
