use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadStatusProps {
    /// `None` while the catalog is still loading.
    #[prop_or_default]
    pub message: Option<AttrValue>,
    #[prop_or_default]
    pub bootstrap_url: Option<AttrValue>,
}

/// Loading placeholder, or the fallback view offering to bootstrap sample content.
#[function_component(LoadStatus)]
pub fn load_status(props: &LoadStatusProps) -> Html {
    let Some(message) = &props.message else {
        return html! { <div style="padding:64px 0; text-align:center; color:#8b949e;">{"Loading map..."}</div> };
    };
    html! {
        <div style="padding:64px 0; text-align:center;">
            <p style="color:#c9d1d9; margin:0 0 16px 0;">{ message.clone() }</p>
            { if let Some(href) = &props.bootstrap_url {
                html! { <a href={href.clone()} target="_blank" rel="noopener" style="color:#db61a2; text-decoration:underline;">{"Click here to bootstrap sample content"}</a> }
            } else { html! {} } }
        </div>
    }
}
