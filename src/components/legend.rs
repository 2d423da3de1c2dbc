use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub color: &'static str,
    pub label: &'static str,
    #[prop_or_default]
    pub glyph: Option<&'static str>,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    let swatch = match props.glyph {
        Some(g) => html! { <span style={format!("color:{}; width:12px; text-align:center;", props.color)}>{ g }</span> },
        None => html! { <span style={format!("display:inline-block; width:12px; height:12px; background:{}; border:1px solid #30363d; border-radius:50%;", props.color)}></span> },
    };
    html! { <span style="display:inline-flex; align-items:center; gap:6px;"> { swatch } <span>{ props.label }</span> </span> }
}
