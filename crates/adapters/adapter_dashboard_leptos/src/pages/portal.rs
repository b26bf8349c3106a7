//! WiFi captive-portal page.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use sensordash_app::services::portal_service::{
    AUTO_REFRESH_INTERVAL, LOAD_ERROR_TEXT, NO_NETWORKS_TEXT, PortalError, PortalMessage,
    PortalService, REDIRECT_DELAY, REDIRECT_TARGET,
};
use sensordash_domain::network::Network;

use crate::api::HttpPortalClient;
use crate::components::{Loading, NetworkList};

type Service = PortalService<HttpPortalClient>;

fn service() -> Service {
    PortalService::new(HttpPortalClient)
}

fn millis(duration: std::time::Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

fn redirect() {
    if let Err(err) = window().location().set_href(REDIRECT_TARGET) {
        leptos::logging::error!("redirect failed: {err:?}");
    }
}

/// Network picker and credentials form.
///
/// The list loads on mount, on demand, and every 30 seconds while the page
/// is shown.
#[component]
pub fn Portal() -> impl IntoView {
    // `None` while a scan is in flight.
    let networks = RwSignal::new(None::<Result<Vec<Network>, PortalError>>);
    let ssid = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<PortalMessage>);
    let password_input = NodeRef::<Input>::new();

    let load = move || {
        networks.set(None);
        spawn_local(async move {
            networks.set(Some(service().load_networks().await));
        });
    };
    load();

    let refresh = gloo_timers::callback::Interval::new(millis(AUTO_REFRESH_INTERVAL), load);
    let _refresh = StoredValue::new_local(refresh);

    let pick = move |name: String| {
        ssid.set(name);
        if let Some(input) = password_input.get() {
            let _ = input.focus();
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let svc = service();
        let request = match svc.prepare(&ssid.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(invalid) => {
                message.set(Some(invalid));
                return;
            }
        };
        message.set(Some(Service::connecting_message(&request)));
        spawn_local(async move {
            match svc.submit(&request).await {
                Ok(done) => {
                    message.set(Some(done));
                    gloo_timers::future::TimeoutFuture::new(millis(REDIRECT_DELAY)).await;
                    redirect();
                }
                Err(err) => {
                    leptos::logging::warn!("{err}");
                    message.set(Some(PortalMessage::from(&err)));
                }
            }
        });
    };

    let message_class = move || {
        message.with(|m| match m {
            Some(m) => format!("message show {}", m.kind.class()),
            None => "message".to_string(),
        })
    };

    view! {
        <div class="portal">
            <h1>"WiFi setup"</h1>
            <div class="networks">
                <div class="networks-header">
                    <h2>"Available networks"</h2>
                    <button id="refreshBtn" type="button" on:click=move |_| load()>"Refresh"</button>
                </div>
                {move || match networks.get() {
                    None => view! { <Loading/> }.into_any(),
                    Some(Err(_)) => view! { <p class="loading">{LOAD_ERROR_TEXT}</p> }.into_any(),
                    Some(Ok(list)) if list.is_empty() => {
                        view! { <p class="loading">{NO_NETWORKS_TEXT}</p> }.into_any()
                    }
                    Some(Ok(list)) => view! { <NetworkList networks=list on_pick=pick/> }.into_any(),
                }}
            </div>
            <form id="wifiForm" on:submit=on_submit>
                <label for="ssid">"Network name"</label>
                <input id="ssid" type="text" bind:value=ssid/>
                <label for="password">"Password"</label>
                <input id="password" type="password" node_ref=password_input bind:value=password/>
                <button type="submit">"Connect"</button>
            </form>
            <div id="message" class=message_class>
                {move || message.with(|m| m.as_ref().map(|m| m.text.clone()).unwrap_or_default())}
            </div>
        </div>
    }
}
