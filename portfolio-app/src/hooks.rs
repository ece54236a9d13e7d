use dioxus::prelude::*;
use dioxus::core::Task;
use gloo_timers::future::TimeoutFuture;
use std::ops::ControlFlow;

/// Runs `tick` every `period_ms` for as long as the calling component is mounted.
pub fn use_interval<F>(period_ms: u32, mut tick: F) -> Task
where
    F: FnMut() + 'static,
{
    use_interval_until(period_ms, move || {
        tick();
        ControlFlow::Continue(())
    })
}

/// Like `use_interval`, but the loop ends once `tick` breaks.
pub fn use_interval_until<F>(period_ms: u32, tick: F) -> Task
where
    F: FnMut() -> ControlFlow<()> + 'static,
{
    let task = use_hook(move || {
        let mut tick = tick;
        spawn(async move {
            loop {
                TimeoutFuture::new(period_ms).await;
                if tick().is_break() {
                    break;
                }
            }
        })
    });
    use_drop(move || task.cancel());
    task
}

/// Runs `fire` once after `delay_ms` unless the component unmounts first.
pub fn use_timeout<F>(delay_ms: u32, fire: F) -> Task
where
    F: FnOnce() + 'static,
{
    let task = use_hook(move || {
        spawn(async move {
            TimeoutFuture::new(delay_ms).await;
            fire();
        })
    });
    use_drop(move || task.cancel());
    task
}

/// Spawns a scoped task that sleeps, then runs `fire`. Used from event handlers,
/// where hooks are unavailable; the task dies with the owning scope.
pub fn spawn_after<F>(delay_ms: u32, fire: F) -> Task
where
    F: FnOnce() + 'static,
{
    spawn(async move {
        TimeoutFuture::new(delay_ms).await;
        fire();
    })
}
