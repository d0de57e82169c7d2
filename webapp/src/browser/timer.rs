use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::timer::Scheduler;

// runs deferred work as a root-scope task
//
// spawn_forever keeps the timer alive when the component that started it
// goes away (a notification outlives the page that raised it), and running
// inside the dioxus runtime means the task may write signals
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        spawn_forever(async move {
            TimeoutFuture::new(delay_ms).await;
            task();
        });
    }
}
