use crate::api::Session;
use crate::hooks::use_path_progress;
use crate::model::LearningPath;
use crate::state::{derive_statuses, layout_nodes, toggle_label};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PathListProps {
    pub session: Session,
    pub paths: Rc<Vec<LearningPath>>,
}

/// Plain vertical list of every path, one card per node.
#[function_component(PathList)]
pub fn path_list(props: &PathListProps) -> Html {
    html! {
        <section id="map" style="padding:48px 0;">
            <div style="margin:0 auto; max-width:960px; padding:0 24px;">
                { for props.paths.iter().map(|p| html! {
                    <PathCard key={p.title.clone()} session={props.session.clone()} path={p.clone()} />
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PathCardProps {
    pub session: Session,
    pub path: LearningPath,
}

#[function_component(PathCard)]
pub fn path_card(props: &PathCardProps) -> Html {
    let progress = use_path_progress(&props.session, &props.path.title);
    let nodes = use_memo(props.path.nodes.clone(), |nodes| layout_nodes(nodes));
    let statuses = derive_statuses(&nodes, &progress.completed);

    let items = nodes.iter().zip(statuses).map(|(p, status)| {
        let n = &p.node;
        let on_toggle = {
            let toggle = progress.toggle.clone();
            let id = n.id.clone();
            Callback::from(move |_| toggle.emit(id.clone()))
        };
        let dot = if status.done { "#2ea043" } else { "#6e7681" };
        let icon = if status.locked { "🔒" } else { "📖" };
        let icon_color = if status.done { "#2ea043" } else { "#c9d1d9" };
        let (btn_bg, btn_fg) = if status.locked {
            ("#30363d", "#8b949e")
        } else if status.done {
            ("#2ea043", "#fff")
        } else {
            ("#db61a2", "#fff")
        };
        let label = toggle_label(status);
        html! {
            <li key={n.id.clone()} style="position:relative; padding-left:40px; list-style:none;">
                <span style={format!("position:absolute; left:10px; top:8px; width:12px; height:12px; border-radius:50%; background:{dot};")}></span>
                <div style="display:flex; align-items:flex-start; gap:12px; background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px;">
                    <div style={format!("color:{icon_color};")}>{ icon }</div>
                    <div style="flex:1;">
                        <div style="display:flex; flex-wrap:wrap; align-items:center; gap:8px;">
                            <h4 style="margin:0; color:#fff;">{ n.title.clone() }</h4>
                            <span style="font-size:12px; padding:2px 8px; border-radius:999px; background:#30363d; color:#c9d1d9;">{ n.difficulty_label() }</span>
                        </div>
                        <p style="margin:4px 0 0 0; color:#8b949e; font-size:14px;">{ n.summary.clone() }</p>
                        <div style="margin-top:8px; display:flex; flex-wrap:wrap; gap:8px; align-items:flex-start;">
                            <button
                                disabled={status.locked}
                                onclick={on_toggle}
                                style={format!("font-size:12px; border:none; border-radius:8px; padding:4px 12px; background:{btn_bg}; color:{btn_fg}; cursor:{};", if status.locked { "not-allowed" } else { "pointer" })}
                            >{ label }</button>
                            <details>
                                <summary style="cursor:pointer; font-size:12px; color:#58a6ff;">{"Read lesson"}</summary>
                                <p style="margin:8px 0 0 0; color:#c9d1d9; font-size:14px; line-height:1.6;">{ n.content.clone() }</p>
                            </details>
                        </div>
                    </div>
                </div>
            </li>
        }
    });

    html! {
        <div style="margin-bottom:40px;">
            <div style="display:flex; align-items:center; gap:12px; margin-bottom:16px;">
                <span style="color:#db61a2; font-size:20px;">{"📍"}</span>
                <div>
                    <h3 style="margin:0; font-size:22px; color:#fff;">{ props.path.title.clone() }</h3>
                    <p style="margin:0; color:#8b949e; font-size:14px;">{ props.path.description.clone() }</p>
                </div>
            </div>
            <div style="position:relative;">
                <div style="position:absolute; left:15px; top:0; bottom:0; width:1px; background:#30363d;"></div>
                <ul style="margin:0; padding:0; display:flex; flex-direction:column; gap:16px;">
                    { for items }
                </ul>
            </div>
        </div>
    }
}
