use leptos::*;

#[component]
pub fn ReviewsPage() -> impl IntoView {
    view! {
        <div class="space-y-2">
            <h1 class="text-2xl font-bold text-fg">"Reviews"</h1>
            <p class="text-sm text-fg-muted">"No reviews assigned yet."</p>
        </div>
    }
}

#[component]
pub fn ReviewDetailsPage(#[prop(into)] id: String) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <h1 class="text-2xl font-bold text-fg">"Review"</h1>
            <p class="text-sm text-fg-muted">{format!("Review {}", id)}</p>
        </div>
    }
}
