//! Visible WiFi networks, strongest first.

use leptos::prelude::*;
use sensordash_domain::network::Network;

/// One clickable entry per network; clicking reports its SSID.
#[component]
pub fn NetworkList<F>(networks: Vec<Network>, on_pick: F) -> impl IntoView
where
    F: Fn(String) + Clone + 'static,
{
    view! {
        <div id="networkList" class="network-list">
            {networks
                .into_iter()
                .map(|network| {
                    let on_pick = on_pick.clone();
                    let ssid = network.ssid.clone();
                    let signal_class = format!("network-signal {}", network.signal_strength().class());
                    view! {
                        <div class="network-item" on:click=move |_| on_pick(ssid.clone())>
                            <span class="network-name">{network.ssid.clone()}</span>
                            <span class=signal_class>{network.signal_label()}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
