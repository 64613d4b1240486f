use crate::hooks::FetchState;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

/// Drive an SDK call into a [`FetchState`], returning a callback that
/// re-issues it.
///
/// Failures stay in the returned state: every caller renders them inline
/// next to its own retry affordance, so nothing is toasted from here. The
/// fetch runs once on mount and again whenever the callback fires.
#[hook]
pub fn use_api_fetch<T, F, Fut>(fetch_fn: F) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = use_state(|| FetchState::Loading);
    let fetch_fn = Rc::new(fetch_fn);

    let refetch = {
        let state = state.clone();
        use_callback((), move |_: (), _| {
            let state = state.clone();
            let fetch_fn = fetch_fn.clone();

            state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                match fetch_fn().await {
                    Ok(data) => state.set(FetchState::Success(data)),
                    Err(message) => {
                        log::warn!("API fetch failed: {}", message);
                        state.set(FetchState::Error(message));
                    }
                }
            });
        })
    };

    // Initial fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (state, refetch)
}
