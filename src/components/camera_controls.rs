use yew::prelude::*;

/// Screen pixels moved per arrow press.
const PAN_STEP: f64 = 64.0;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_pan: Callback<(f64, f64)>,
    pub on_fit: Callback<()>,
}

#[function_component(CameraControls)]
pub fn camera_controls(props: &CameraControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let pan = |dx: f64, dy: f64| {
        let cb = props.on_pan.clone();
        Callback::from(move |_| cb.emit((dx, dy)))
    };
    let fit = {
        let cb = props.on_fit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let btn = "padding:6px 10px; background:#161b22; border:1px solid #30363d; border-radius:8px; color:#c9d1d9; cursor:pointer;";
    // Arrows move the view, so the content travels the opposite way.
    html! {<div style="display:flex; gap:6px; align-items:center;">
        <button style={btn} title="Zoom in" onclick={zi}> {"+"} </button>
        <button style={btn} title="Zoom out" onclick={zo}> {"-"} </button>
        <span style="width:8px;"></span>
        <button style={btn} onclick={pan(PAN_STEP, 0.0)}> {"←"} </button>
        <button style={btn} onclick={pan(0.0, PAN_STEP)}> {"↑"} </button>
        <button style={btn} onclick={pan(0.0, -PAN_STEP)}> {"↓"} </button>
        <button style={btn} onclick={pan(-PAN_STEP, 0.0)}> {"→"} </button>
        <span style="width:8px;"></span>
        <button style={btn} title="Fit to view" onclick={fit}> {"⤢"} </button>
    </div>}
}
