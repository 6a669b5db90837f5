use super::overview_map::OverviewMap;
use crate::config::ViewerConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Read once; the host page cannot change it after load.
    let config = use_state(ViewerConfig::load);

    html! {
        <main id="root" style="display:flex; flex-direction:column; align-items:center; gap:8px; padding:12px; font-family:sans-serif;">
            <h2 style="margin:0;">{"Map overview"}</h2>
            <OverviewMap config={(*config).clone()} />
            <small style="color:#57606a;">{"Drag to pan, scroll to zoom"}</small>
        </main>
    }
}
