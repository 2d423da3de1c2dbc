use crate::state::minimap::zoom_label;
use crate::state::{Camera, MinimapProjection, PositionedNode, Size, WorldBounds};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MinimapProps {
    pub nodes: Rc<Vec<PositionedNode>>,
    pub bounds: WorldBounds,
    pub camera: Camera,
    pub viewport: Size,
    /// Index of the clicked node dot.
    pub on_pick: Callback<usize>,
}

#[function_component(Minimap)]
pub fn minimap(props: &MinimapProps) -> Html {
    let proj = MinimapProjection::new(&props.bounds);
    let (w, h) = (proj.size.width, proj.size.height);
    let vis = proj.visible_region(&props.camera, props.viewport);
    // The main view already swallows pointer-down for dragging.
    let stop = Callback::from(|e: PointerEvent| e.stop_propagation());
    let dots = props.nodes.iter().enumerate().map(|(i, n)| {
        let p = proj.node_dot(n);
        let cb = props.on_pick.clone();
        html! {
            <circle key={n.node.id.clone()} cx={p.x.to_string()} cy={p.y.to_string()} r="3"
                fill="rgba(86,211,100,0.9)" style="cursor:pointer;"
                onclick={Callback::from(move |_: MouseEvent| cb.emit(i))} />
        }
    });
    html! {
        <div onpointerdown={stop} style="position:absolute; right:12px; bottom:12px; z-index:10; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px;">
            <svg width={w.to_string()} height={h.to_string()} style="display:block;">
                <rect x="0" y="0" width={w.to_string()} height={h.to_string()} rx="8" fill="#0b1220" />
                { for dots }
                <rect x={vis.x.to_string()} y={vis.y.to_string()} width={vis.width.to_string()} height={vis.height.to_string()}
                    fill="rgba(88,166,255,0.08)" stroke="rgba(88,166,255,0.7)" />
            </svg>
            <div style="margin-top:6px; display:flex; justify-content:space-between; font-size:10px; color:#8b949e;">
                <span>{"Overview"}</span>
                <span>{ zoom_label(props.camera.zoom()) }</span>
            </div>
        </div>
    }
}
