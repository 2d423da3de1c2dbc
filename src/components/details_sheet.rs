use crate::api::Session;
use crate::hooks::{Settled, spawn_toggle};
use crate::model::LessonNode;
use crate::state::{NodeStatus, toggle_label};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DetailsSheetProps {
    pub session: Session,
    pub path_title: AttrValue,
    pub node: LessonNode,
    /// Derived from the owning path's current completion set.
    pub status: NodeStatus,
    /// The owning path's cache update.
    pub on_settled: Callback<Settled>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn DetailsSheet(props: &DetailsSheetProps) -> Html {
    let node = &props.node;
    let status = props.status;

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_cb = {
        let session = props.session.clone();
        let path_title = props.path_title.clone();
        let node_id = node.id.clone();
        let settle = props.on_settled.clone();
        let close = props.on_close.clone();
        Callback::from(move |_| {
            if status.locked {
                return;
            }
            let settle = settle.clone();
            let close = close.clone();
            // Close only once the server has accepted the toggle.
            let on_settled = Callback::from(move |result: Settled| {
                let accepted = result.is_ok();
                settle.emit(result);
                if accepted {
                    close.emit(());
                }
            });
            spawn_toggle(&session, &path_title, node_id.clone(), on_settled);
        })
    };

    let chip = "padding:4px 8px; border-radius:999px; background:#161b22; border:1px solid #30363d; color:#c9d1d9;";
    let (label, bg, fg) = if status.locked {
        ("Locked", "#30363d", "#8b949e")
    } else if status.done {
        (toggle_label(status), "#2ea043", "#fff")
    } else {
        (toggle_label(status), "#db61a2", "#fff")
    };

    html! {<div style="position:fixed; inset:0; z-index:40;">
        <div onclick={close_cb.clone()} style="position:absolute; inset:0; background:rgba(0,0,0,0.6);"></div>
        <div style="position:absolute; right:0; top:0; height:100%; width:100%; max-width:460px; background:#161b22; border-left:1px solid #30363d; box-shadow:0 0 24px rgba(0,0,0,0.6); display:flex; flex-direction:column;">
            <div style="display:flex; justify-content:space-between; align-items:center; padding:16px 20px; border-bottom:1px solid #30363d;">
                <div>
                    <p style="margin:0; font-size:11px; letter-spacing:0.08em; text-transform:uppercase; color:#8b949e;">{"Goal"}</p>
                    <h4 style="margin:0; font-size:18px; color:#fff;">{ node.title.clone() }</h4>
                </div>
                <button onclick={close_cb} style="padding:4px 8px;">{"✕"}</button>
            </div>
            <div style="padding:20px; overflow-y:auto; display:flex; flex-direction:column; gap:16px;">
                <div style="font-size:14px; color:#c9d1d9; line-height:1.6; white-space:pre-line;">{ node.body() }</div>
                <div style="display:flex; flex-wrap:wrap; gap:8px; font-size:12px;">
                    <span style={chip}>{ format!("Difficulty: {}", node.difficulty_label()) }</span>
                    <span style={chip}>{ format!("Order: {}", node.order) }</span>
                    { if let Some(kind) = &node.kind {
                        html! { <span style={chip}>{ format!("Type: {kind}") }</span> }
                    } else { html! {} } }
                </div>
                <div style="display:flex; gap:8px;">
                    <button
                        disabled={status.locked}
                        onclick={toggle_cb}
                        style={format!("flex:1; border:none; border-radius:8px; padding:8px 16px; font-weight:500; background:{bg}; color:{fg};")}
                    >{ label }</button>
                </div>
            </div>
        </div>
    </div>}
}
