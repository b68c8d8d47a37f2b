use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-24">
            <h1 class="text-8xl font-bold text-amber-400 mb-4">"404"</h1>
            <p class="text-2xl font-semibold text-white mb-2">"Page not found"</p>
            <p class="text-stone-400 mb-8">"This shelf is empty."</p>
            <a href="/" class="text-amber-400 hover:text-amber-300">"Back to the catalog"</a>
        </div>
    }
}
