use leptos::prelude::*;

const FIELD_CLASSES: &str = "w-full px-4 py-3 rounded-lg bg-stone-800 border border-stone-700 \
    text-white placeholder-stone-500 focus:outline-none focus:ring-2 focus:ring-amber-500 \
    focus:border-transparent transition-all";

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] required: bool,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-stone-300 mb-2">
                {label}
            </label>
            <input
                type=input_type.unwrap_or_else(|| "text".to_string())
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class=FIELD_CLASSES
            />
        </div>
    }
}

#[component]
pub fn PasswordInput(value: ReadSignal<String>, set_value: WriteSignal<String>) -> impl IntoView {
    view! {
        <TextInput
            label="Password"
            name="password"
            placeholder="••••••••"
            input_type="password"
            required=true
            value=value
            set_value=set_value
        />
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <textarea
            id=name.clone()
            name=name
            rows="3"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| set_value.set(event_target_value(&ev))
            class=FIELD_CLASSES
        ></textarea>
    }
}
