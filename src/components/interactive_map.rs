use super::camera_controls::CameraControls;
use super::details_sheet::DetailsSheet;
use super::legend_panel::LegendPanel;
use super::minimap::Minimap;
use super::trail_node::TrailNode;
use crate::api::Session;
use crate::hooks::use_path_progress;
use crate::model::{LearningPath, NodeId};
use crate::state::camera::BUTTON_ZOOM_STEP;
use crate::state::layout::connector_path;
use crate::state::{
    Camera, CameraAction, Size, Vec2, derive_statuses, layout_nodes, next_actionable, status_of,
    summarize, world_bounds,
};
use crate::util::{goal_count, measure};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InteractiveMapProps {
    pub session: Session,
    pub paths: Rc<Vec<LearningPath>>,
}

/// Map view: one pannable trail per path.
#[function_component(InteractiveMap)]
pub fn interactive_map(props: &InteractiveMapProps) -> Html {
    html! {
        <section id="map" style="position:relative; padding:48px 0;">
            <div style="margin:0 auto; max-width:1152px; padding:0 24px;">
                { for props.paths.iter().enumerate().map(|(i, p)| html! {
                    <InteractivePath key={p.title.clone()} index={i} session={props.session.clone()} path={p.clone()} />
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct InteractivePathProps {
    /// Position in the catalog; keeps SVG ids unique on the page.
    pub index: usize,
    pub session: Session,
    pub path: LearningPath,
}

#[derive(Clone, PartialEq)]
struct Hover {
    /// World-space anchor of the hovered node.
    at: Vec2,
    text: String,
}

#[function_component(InteractivePath)]
pub fn interactive_path(props: &InteractivePathProps) -> Html {
    let viewport_ref = use_node_ref();
    let camera = use_reducer_eq(Camera::default);
    let viewport = use_state_eq(Size::default);
    let hover = use_state_eq(|| None::<Hover>);
    let selected = use_state_eq(|| None::<NodeId>);
    let progress = use_path_progress(&props.session, &props.path.title);
    let nodes = use_memo(props.path.nodes.clone(), |nodes| layout_nodes(nodes));
    let bounds = world_bounds(&nodes);

    // Measure the viewport, follow window resizes, and own the wheel listener
    // (registered by hand so preventDefault is honoured).
    {
        let viewport_ref = viewport_ref.clone();
        let viewport = viewport.clone();
        let camera = camera.clone();
        use_effect_with((), move |_| {
            let measure_now = {
                let viewport_ref = viewport_ref.clone();
                move || viewport.set(measure(&viewport_ref))
            };
            measure_now();
            let resize_cb = Closure::wrap(Box::new(measure_now) as Box<dyn FnMut()>);
            let wheel_cb = Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                e.prevent_default();
                camera.dispatch(CameraAction::Wheel { delta_y: e.delta_y() });
            }) as Box<dyn FnMut(_)>);
            let window = web_sys::window();
            let target = viewport_ref.cast::<web_sys::Element>();
            if let Some(win) = &window {
                let _ = win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            }
            if let Some(el) = &target {
                let _ = el.add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
                }
                if let Some(el) = &target {
                    let _ = el.remove_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref());
                }
            }
        });
    }

    // Refit whenever the world or the viewport changes size.
    {
        let camera = camera.clone();
        use_effect_with((bounds, *viewport), move |(bounds, viewport)| {
            camera.dispatch(CameraAction::Fit { viewport: *viewport, bounds: *bounds });
            || ()
        });
    }

    let statuses = derive_statuses(&nodes, &progress.completed);
    let next = next_actionable(&statuses);
    let summary = summarize(&nodes, &progress.completed);
    let vp = *viewport;

    let center_on = {
        let camera = camera.clone();
        let nodes = nodes.clone();
        Callback::from(move |i: usize| {
            if let Some(n) = nodes.get(i) {
                camera.dispatch(CameraAction::CenterOn { anchor: n.anchor(), viewport: vp });
            }
        })
    };
    let zoom_by = |delta: f64| {
        let camera = camera.clone();
        Callback::from(move |()| camera.dispatch(CameraAction::ZoomBy(delta)))
    };
    let on_pan = {
        let camera = camera.clone();
        Callback::from(move |(dx, dy): (f64, f64)| camera.dispatch(CameraAction::PanBy { dx, dy }))
    };
    let on_fit = {
        let camera = camera.clone();
        Callback::from(move |()| camera.dispatch(CameraAction::Fit { viewport: vp, bounds }))
    };

    let on_pointer_down = {
        let camera = camera.clone();
        Callback::from(move |e: PointerEvent| {
            camera.dispatch(CameraAction::PointerDown(client_pos(&e)));
        })
    };
    let on_pointer_move = {
        let camera = camera.clone();
        Callback::from(move |e: PointerEvent| {
            camera.dispatch(CameraAction::PointerMove(client_pos(&e)));
        })
    };
    let on_pointer_up = {
        let camera = camera.clone();
        Callback::from(move |_: PointerEvent| camera.dispatch(CameraAction::PointerUp))
    };

    let grid_id = format!("trail-grid-{}", props.index);
    let far = bounds.origin + bounds.size.to_vec2();
    let links = nodes.windows(2).map(|pair| {
        html! {
            <path key={format!("link-{}", pair[1].node.id)} d={connector_path(&pair[0], &pair[1])}
                stroke="#58a6ff" stroke-width="3" opacity="0.6" fill="none" />
        }
    });
    let stops = nodes.iter().zip(statuses.iter().copied()).enumerate().map(|(i, (p, status))| {
        let on_open = {
            let selected = selected.clone();
            let id = p.node.id.clone();
            Callback::from(move |()| selected.set(Some(id.clone())))
        };
        let on_hover = {
            let hover = hover.clone();
            let (at, text) = (p.anchor(), p.node.title.clone());
            Callback::from(move |inside: bool| {
                hover.set(inside.then(|| Hover {
                    at,
                    text: text.clone(),
                }));
            })
        };
        html! {
            <TrailNode key={p.node.id.clone()} node={p.clone()} status={status}
                is_next={next == Some(i)} on_open={on_open} on_hover={on_hover} />
        }
    });
    let tooltip = match &*hover {
        Some(h) => {
            let at = camera.world_to_screen(h.at);
            html! {
                <div style={format!("pointer-events:none; position:absolute; z-index:20; left:{}px; top:{}px; background:rgba(22,27,34,0.95); border:1px solid #30363d; border-radius:6px; padding:4px 8px; font-size:12px; color:#c9d1d9;", at.x + 12.0, at.y + 12.0)}>
                    { h.text.clone() }
                </div>
            }
        }
        None => html! {},
    };
    let jump = match next {
        Some(i) => {
            let center_on = center_on.clone();
            html! {
                <button onclick={Callback::from(move |_| center_on.emit(i))}
                    style="font-size:12px; border:1px solid rgba(88,166,255,0.4); background:rgba(88,166,255,0.1); color:#58a6ff; border-radius:999px; padding:4px 8px; cursor:pointer;">
                    {"🧭 Jump to next"}
                </button>
            }
        }
        None => html! {},
    };
    // Status is looked up on every render so the sheet tracks late replies.
    let sheet = match (*selected).as_deref().and_then(|id| {
        let node = nodes.iter().find(|n| n.node.id == id)?;
        Some((node, status_of(&nodes, &progress.completed, id)?))
    }) {
        Some((p, status)) => {
            let selected = selected.clone();
            html! {
                <DetailsSheet session={props.session.clone()} path_title={props.path.title.clone()}
                    node={p.node.clone()} status={status} on_settled={progress.settle.clone()}
                    on_close={Callback::from(move |()| selected.set(None))} />
            }
        }
        None => html! {},
    };
    let chip = "font-size:12px; border:1px solid #30363d; background:#161b22; color:#c9d1d9; border-radius:999px; padding:4px 8px;";

    html! {
        <div style="margin-bottom:48px;">
            <div style="display:flex; flex-wrap:wrap; justify-content:space-between; align-items:center; gap:12px; margin-bottom:12px;">
                <div style="display:flex; align-items:flex-start; gap:12px;">
                    <span style="color:#db61a2; font-size:20px;">{"🚩"}</span>
                    <div>
                        <h3 style="margin:0; font-size:22px; color:#fff;">{ props.path.title.clone() }</h3>
                        <p style="margin:0; font-size:14px; color:#8b949e;">{ props.path.description.clone() }</p>
                        <div style="margin-top:8px; display:flex; flex-wrap:wrap; gap:8px; align-items:center;">
                            <span style={chip}>{ format!("✨ {}% complete", summary.percent) }</span>
                            <span style={chip}>{ goal_count(summary.done, summary.total) }</span>
                            { jump }
                        </div>
                    </div>
                </div>
                <CameraControls on_zoom_in={zoom_by(BUTTON_ZOOM_STEP)} on_zoom_out={zoom_by(-BUTTON_ZOOM_STEP)} on_pan={on_pan} on_fit={on_fit} />
            </div>
            <div
                ref={viewport_ref.clone()}
                onpointerdown={on_pointer_down}
                onpointermove={on_pointer_move}
                onpointerup={on_pointer_up.clone()}
                onpointerleave={on_pointer_up}
                style={format!("position:relative; height:460px; width:100%; overflow:hidden; border:1px solid #30363d; border-radius:16px; background:linear-gradient(180deg, #161b22, #0e1116); touch-action:none; cursor:{};", if camera.is_dragging() { "grabbing" } else { "grab" })}
            >
                { tooltip }
                <svg width={far.x.max(1.0).to_string()} height={far.y.max(1.0).to_string()}
                    style={format!("position:absolute; left:0; top:0; overflow:visible; transform-origin:0 0; transform:{};", camera.css_transform())}>
                    <defs>
                        <pattern id={grid_id.clone()} width="40" height="40" patternUnits="userSpaceOnUse">
                            <path d="M 40 0 L 0 0 0 40" fill="none" stroke="rgba(139,148,158,0.1)" stroke-width="1" />
                        </pattern>
                    </defs>
                    <rect x={bounds.origin.x.to_string()} y={bounds.origin.y.to_string()}
                        width={bounds.size.width.to_string()} height={bounds.size.height.to_string()}
                        fill={format!("url(#{grid_id})")} />
                    { for links }
                    { for stops }
                </svg>
                <Minimap nodes={nodes.clone()} bounds={bounds} camera={(*camera).clone()} viewport={vp} on_pick={center_on} />
            </div>
            <LegendPanel />
            { sheet }
        </div>
    }
}

fn client_pos(e: &PointerEvent) -> Vec2 {
    Vec2::new(f64::from(e.client_x()), f64::from(e.client_y()))
}
