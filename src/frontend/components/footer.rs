use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-stone-800 mt-16">
            <div class="max-w-6xl mx-auto px-6 py-8 text-center text-xs text-stone-600">
                "Bookshelf catalog"
            </div>
        </footer>
    }
}
