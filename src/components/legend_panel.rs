use super::legend::LegendRow;
use yew::prelude::*;

#[function_component]
pub fn LegendPanel() -> Html {
    html! {<div style="margin-top:10px; display:flex; flex-wrap:wrap; gap:14px; font-size:12px; color:#8b949e;">
        <LegendRow color="#2ea043" label="Completed" />
        <LegendRow color="#1d2430" label="Not started" />
        <LegendRow color="#8b949e" label="Locked until previous is complete" glyph={Some("🔒")} />
        <LegendRow color="#58a6ff" label="Video" glyph={Some("▶")} />
        <LegendRow color="#d29922" label="Quiz" glyph={Some("?")} />
    </div>}
}
