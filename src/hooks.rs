// Per-path completion cache backed by the progress endpoints.

#[cfg(test)]
#[path = "hooks_test.rs"]
mod hooks_test;

use crate::api::{ApiError, Session};
use crate::model::{CompletionSet, NodeId};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Outcome of a progress request, as handed back to the cache.
pub type Settled = Result<CompletionSet, ApiError>;

#[derive(Clone, PartialEq)]
pub struct PathProgress {
    pub completed: CompletionSet,
    /// Flip one node server-side; the reply replaces the cache.
    pub toggle: Callback<NodeId>,
    /// Feed a finished request into the cache (details sheet toggles).
    pub settle: Callback<Settled>,
}

/// The set the cache should hold after a request settles, if it changes at all.
/// Only a successful reply to a still-mounted owner replaces the cache, and it
/// replaces it wholesale; errors and late replies leave it as it is.
pub fn next_cache(alive: bool, result: Settled) -> Option<CompletionSet> {
    match result {
        Ok(set) if alive => Some(set),
        Ok(_) | Err(_) => None,
    }
}

/// Issues `POST /progress/toggle` and hands the outcome to `on_settled`.
/// Failures are logged; there is no retry.
pub fn spawn_toggle(session: &Session, path_title: &str, node_id: NodeId, on_settled: Callback<Settled>) {
    let api = session.api.clone();
    let user_id = session.user_id.clone();
    let path_title = path_title.to_owned();
    spawn_local(async move {
        let result = api
            .toggle_progress(&user_id, &path_title, &node_id)
            .await
            .inspect_err(|err| log::warn!("toggle of {node_id:?} on {path_title:?} failed: {err}"));
        on_settled.emit(result);
    });
}

#[hook]
pub fn use_path_progress(session: &Session, path_title: &str) -> PathProgress {
    let completed = use_state_eq(CompletionSet::default);
    // Cleared on unmount so late responses are dropped.
    let alive = use_mut_ref(|| true);
    {
        let alive = alive.clone();
        use_effect_with((), move |_| {
            *alive.borrow_mut() = true;
            move || *alive.borrow_mut() = false
        });
    }

    let settle = {
        let completed = completed.clone();
        let alive = alive.clone();
        Callback::from(move |result: Settled| {
            if let Some(set) = next_cache(*alive.borrow(), result) {
                completed.set(set);
            }
        })
    };

    // Until the first reply lands the cache stays empty: nothing completed.
    {
        let api = session.api.clone();
        let settle = settle.clone();
        use_effect_with(
            (session.user_id.clone(), path_title.to_owned()),
            move |(user_id, path_title)| {
                let (user_id, path_title) = (user_id.clone(), path_title.clone());
                spawn_local(async move {
                    let result = api
                        .fetch_progress(&user_id, &path_title)
                        .await
                        .inspect_err(|err| log::debug!("no progress for {path_title:?}: {err}"));
                    settle.emit(result);
                });
                || ()
            },
        );
    }

    let toggle = {
        let session = session.clone();
        let path_title = path_title.to_owned();
        let settle = settle.clone();
        Callback::from(move |node_id: NodeId| {
            spawn_toggle(&session, &path_title, node_id, settle.clone());
        })
    };

    PathProgress {
        completed: (*completed).clone(),
        toggle,
        settle,
    }
}
