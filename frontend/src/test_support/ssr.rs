use leptos::*;
use std::time::{Duration, Instant};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Waits until `action` has stored a value. Dispatched actions are spawned
/// onto the current `tokio::task::LocalSet`, so call this inside one.
pub async fn settle_action<I, O>(action: Action<I, O>) -> O
where
    I: 'static,
    O: Clone + 'static,
{
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(value) = action.value().get_untracked() {
            return value;
        }
        assert!(Instant::now() < deadline, "action did not settle");
        tokio::task::yield_now().await;
    }
}
