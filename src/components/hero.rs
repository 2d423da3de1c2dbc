use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    let link = "display:inline-flex; align-items:center; border-radius:8px; padding:8px 16px; font-size:14px; font-weight:600; text-decoration:none; color:#fff;";
    html! {
        <section style="min-height:50vh; display:flex; align-items:center; background:linear-gradient(180deg, #161b22 0%, #0e1116 100%);">
            <div style="margin:0 auto; max-width:960px; padding:0 24px; width:100%;">
                <div style="background:rgba(22,27,34,0.6); border:1px solid #30363d; border-radius:16px; padding:28px 32px; max-width:640px;">
                    <h1 style="margin:0; font-size:44px; font-weight:800; color:#fff;">{"Story Realms"}</h1>
                    <p style="margin:14px 0 0 0; color:#c9d1d9; line-height:1.5;">
                        {"A playful, interactive learning world. Follow a map of quests, unlock chapters, and learn by exploring."}
                    </p>
                    <div style="margin-top:20px; display:flex; gap:12px;">
                        <a href="#map" style={format!("{link} background:#db61a2;")}>{"Start Exploring"}</a>
                        <a href="#how" style={format!("{link} background:#30363d;")}>{"How it works"}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
