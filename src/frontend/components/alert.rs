use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Info,
    Error,
}

#[component]
pub fn Alert(#[prop(into)] message: String, #[prop(optional)] variant: AlertVariant) -> impl IntoView {
    let classes = match variant {
        AlertVariant::Info => "bg-sky-500/10 border-sky-500/30 text-sky-300",
        AlertVariant::Error => "bg-red-500/10 border-red-500/30 text-red-400",
    };

    view! {
        <div class=format!("mb-6 p-4 rounded-lg border text-sm {}", classes)>
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! { <Alert message=message variant=AlertVariant::Error /> }
}

#[component]
pub fn Loading() -> impl IntoView {
    view! { <p class="text-stone-500 text-sm">"Loading..."</p> }
}
