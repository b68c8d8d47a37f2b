use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            Self::Primary => "bg-amber-600 text-white hover:bg-amber-500 focus:ring-amber-500",
            Self::Ghost => "border border-stone-700 text-stone-300 hover:border-stone-500 hover:text-white focus:ring-stone-500",
            Self::Danger => "bg-red-700 text-white hover:bg-red-600 focus:ring-red-500",
        }
    }
}

/// Submit button by default; pass `on_click` for an action button.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center justify-center px-5 py-2 font-semibold rounded-lg transition-colors \
         focus:outline-none focus:ring-2 disabled:opacity-50 disabled:cursor-not-allowed {}",
        variant.classes()
    );
    let button_type = if on_click.is_some() { "button" } else { "submit" };

    view! {
        <button
            type=button_type
            class=classes
            disabled=move || loading.get()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
