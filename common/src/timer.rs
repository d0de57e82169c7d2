// deferred work
//
// tasks run once and cannot be cancelled. a superseded task has to notice for
// itself that it is stale.
//
// implementations must never run the task synchronously from inside after()
pub trait Scheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}
