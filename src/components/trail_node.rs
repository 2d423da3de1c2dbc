use crate::model::NodeCategory;
use crate::state::layout::{NODE_RADIUS, PositionedNode};
use crate::state::NodeStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TrailNodeProps {
    pub node: PositionedNode,
    pub status: NodeStatus,
    pub is_next: bool,
    pub on_open: Callback<()>,
    /// `true` on pointer enter, `false` on leave.
    pub on_hover: Callback<bool>,
}

fn glyph(p: &PositionedNode, status: NodeStatus) -> (&'static str, &'static str) {
    if status.locked {
        return ("🔒", "#8b949e");
    }
    if status.done {
        return ("✓", "#ffffff");
    }
    match p.node.category() {
        NodeCategory::Video => ("▶", "#58a6ff"),
        NodeCategory::Quiz => ("?", "#d29922"),
        NodeCategory::Lesson => ("◎", "#58a6ff"),
    }
}

/// One stop on the map, drawn in its own translated SVG group.
#[function_component(TrailNode)]
pub fn trail_node(props: &TrailNodeProps) -> Html {
    let r = NODE_RADIUS;
    let status = props.status;
    let (icon, icon_color) = glyph(&props.node, status);
    let (fill, stroke) = if status.done {
        ("rgba(46,160,67,0.95)", "#2ea043")
    } else {
        ("rgba(14,17,22,0.95)", "rgba(139,148,158,0.6)")
    };
    let ring = if status.locked {
        "rgba(110,118,129,0.4)"
    } else {
        "rgba(88,166,255,0.5)"
    };
    let on_enter = {
        let cb = props.on_hover.clone();
        Callback::from(move |_: PointerEvent| cb.emit(true))
    };
    let on_leave = {
        let cb = props.on_hover.clone();
        Callback::from(move |_: PointerEvent| cb.emit(false))
    };
    let on_open = {
        let cb = props.on_open.clone();
        let locked = status.locked;
        Callback::from(move |_: MouseEvent| {
            if !locked {
                cb.emit(());
            }
        })
    };
    let pulse = if props.is_next && status.actionable() {
        let (lo, hi) = (r + 4.0, r + 16.0);
        html! {
            <circle cx={r.to_string()} cy={r.to_string()} r={hi.to_string()} fill="rgba(88,166,255,0.25)">
                <animate attributeName="r" values={format!("{lo};{hi};{lo}")} dur="1.6s" repeatCount="indefinite" />
                <animate attributeName="opacity" values="0.8;0.2;0.8" dur="1.6s" repeatCount="indefinite" />
            </circle>
        }
    } else {
        html! {}
    };
    let label_y = r * 2.0 + 22.0;
    let button_y = r * 2.0 + 30.0;
    html! {
        <g transform={format!("translate({}, {})", props.node.pos.x, props.node.pos.y)}>
            { pulse }
            <circle cx={r.to_string()} cy={r.to_string()} r={r.to_string()} fill={fill} stroke={stroke} stroke-width="2" />
            <circle cx={r.to_string()} cy={r.to_string()} r={(r + 10.0).to_string()} fill="none" stroke={ring} stroke-dasharray="6 6" />
            <text x={r.to_string()} y={(r + 8.0).to_string()} text-anchor="middle" fill={icon_color}
                style="font-size:22px; cursor:default;" onpointerenter={on_enter} onpointerleave={on_leave}>{ icon }</text>
            <text x={r.to_string()} y={label_y.to_string()} text-anchor="middle" fill="#c9d1d9" style="font-size:12px;">
                { props.node.node.title.clone() }
            </text>
            <rect x={(r - 42.0).to_string()} y={button_y.to_string()} rx="8" ry="8" width="84" height="28"
                fill={if status.locked { "rgba(48,54,61,0.8)" } else { "rgba(219,97,162,0.9)" }}
                style={if status.locked { "cursor:not-allowed;" } else { "cursor:pointer;" }}
                onclick={on_open} />
            <text x={r.to_string()} y={(button_y + 18.0).to_string()} text-anchor="middle" fill="#ffffff"
                style="font-size:12px; pointer-events:none;">
                { if status.locked { "Locked" } else { "Open" } }
            </text>
        </g>
    }
}
