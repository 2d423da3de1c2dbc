use yew::prelude::*;

const STEPS: [(&str, &str); 3] = [
    ("Pick a path", "Choose a themed learning journey that looks fun."),
    ("Follow the map", "Each stop is a tiny lesson wrapped in story."),
    ("Unlock by doing", "Mark steps complete to reveal the next challenge."),
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section id="how" style="padding:48px 0;">
            <div style="margin:0 auto; max-width:960px; padding:0 24px;">
                <h2 style="margin:0 0 24px 0; font-size:28px; color:#fff;">{"How it works"}</h2>
                <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(220px, 1fr)); gap:16px;">
                    { for STEPS.iter().map(|(title, desc)| html! {
                        <div key={*title} style="border:1px solid #30363d; border-radius:16px; background:#161b22; padding:20px;">
                            <h3 style="margin:0; color:#fff; font-size:16px;">{ *title }</h3>
                            <p style="margin:6px 0 0 0; color:#8b949e; font-size:14px;">{ *desc }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
