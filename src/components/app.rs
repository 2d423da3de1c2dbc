use super::{
    hero::Hero, how_it_works::HowItWorks, interactive_map::InteractiveMap,
    load_status::LoadStatus, path_list::PathList,
};
use crate::api::{ApiClient, Session};
use crate::config::Config;
use crate::model::{Catalog, CatalogAction, LOAD_FAILED_MESSAGE};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(PartialEq, Clone, Copy)]
enum View {
    Map,
    List,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Map);
    let catalog = use_reducer_eq(Catalog::default);
    let session = use_memo((), |_| {
        let config = Config::from_env();
        log::info!("using backend {}", config.backend_url);
        ApiClient::new(&config.backend_url)
            .map(|api| Session {
                api,
                user_id: config.user_id,
            })
            .map_err(|err| log::error!("cannot build api client: {err}"))
            .ok()
    });

    // Load the catalog once. Per-path progress is fetched only after this succeeds.
    {
        let catalog = catalog.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            match (*session).as_ref() {
                Some(s) => {
                    let api = s.api.clone();
                    spawn_local(async move {
                        match api.fetch_paths().await {
                            Ok(paths) => {
                                log::info!("loaded {} learning paths", paths.len());
                                catalog.dispatch(CatalogAction::Loaded(paths));
                            }
                            Err(err) => {
                                log::warn!("loading learning paths failed: {err}");
                                catalog.dispatch(CatalogAction::Failed(LOAD_FAILED_MESSAGE.to_owned()));
                            }
                        }
                    });
                }
                None => catalog.dispatch(CatalogAction::Failed(LOAD_FAILED_MESSAGE.to_owned())),
            }
            || ()
        });
    }

    let to_map = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Map))
    };
    let to_list = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::List))
    };

    let bootstrap_url = (*session)
        .as_ref()
        .map(|s| AttrValue::from(s.api.bootstrap_url().to_string()));
    // Failures and an empty catalog share the bootstrap prompt in both views.
    let content = if let Some(notice) = catalog.notice() {
        html! { <LoadStatus message={AttrValue::from(notice.to_owned())} bootstrap_url={bootstrap_url} /> }
    } else if let (Some(paths), Some(session)) = (catalog.loaded(), (*session).as_ref()) {
        match *view {
            View::Map => html! { <InteractiveMap session={session.clone()} paths={paths.clone()} /> },
            View::List => html! { <PathList session={session.clone()} paths={paths.clone()} /> },
        }
    } else {
        html! { <LoadStatus /> }
    };

    let tab = |active: bool| {
        format!(
            "padding:6px 14px; border-radius:8px; border:1px solid #30363d; cursor:pointer; color:#c9d1d9; background:{};",
            if active { "#30363d" } else { "#161b22" }
        )
    };

    html! {
        <div style="min-height:100vh; background:#0e1116; color:#c9d1d9; font-family:system-ui, sans-serif;">
            <Hero />
            <div style="margin:24px auto 0 auto; max-width:1152px; padding:0 24px; display:flex; gap:8px;">
                <button style={tab(*view == View::Map)} onclick={to_map}>{"Map"}</button>
                <button style={tab(*view == View::List)} onclick={to_list}>{"List"}</button>
            </div>
            { content }
            <HowItWorks />
            <footer style="padding:40px 0; text-align:center; color:#8b949e; font-size:14px;">
                {"Made with curiosity • Learn by exploring"}
            </footer>
        </div>
    }
}
