//! Landing page for visitors.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <div class="page page--welcome">
            <h1>"FoodDelivery"</h1>
            <p class="lead">"Your favorite meals, delivered fast and fresh!"</p>
            <div class="welcome__actions">
                <A href="/login" attr:class="button button--outline">"Login"</A>
                <A href="/register" attr:class="button button--outline">"Register"</A>
            </div>
        </div>
    }
}
