//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::config::ClientConfig;
use crate::net::api::TokenProvider;
use crate::pages::{
    PlaceholderPage, home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage,
    welcome::WelcomePage,
};
use crate::state::auth::AuthState;
use crate::util::auth::LocalStorageTokens;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=LEAFLET_CSS/>
                <script src=LEAFLET_JS></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides configuration and auth contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    leptos::logging::log!("api base url: {}", config.api_base_url);
    provide_context(config);

    // Session presence is only known in the browser; stay loading until then.
    let auth = RwSignal::new(AuthState { loading: true, ..AuthState::default() });
    provide_context(auth);
    Effect::new(move || {
        let has_token = LocalStorageTokens.token().is_some();
        auth.update(|a| {
            a.has_token = has_token;
            a.loading = false;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/fooddelivery-web.css"/>
        <Title text="FoodDelivery"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=WelcomePage/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route
                        path=StaticSegment("favorites")
                        view=|| view! { <PlaceholderPage title="Favorites Page"/> }
                    />
                    <Route path=StaticSegment("cart") view=|| view! { <PlaceholderPage title="Cart Page"/> }/>
                    <Route path=StaticSegment("orders") view=|| view! { <PlaceholderPage title="My Orders Page"/> }/>
                    <Route
                        path=(StaticSegment("restaurants"), ParamSegment("id"))
                        view=|| view! { <PlaceholderPage title="Restaurant Menu Page"/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
