use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;

use crate::frontend::AppContext;
use crate::frontend::components::{Button, ErrorAlert, PasswordInput, TextInput};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);
    let (signed_in, set_signed_in) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let auth = ctx.auth();
        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match auth.login(&email.get_untracked(), &password.get_untracked()).await {
                Ok(_) => set_signed_in.set(true),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_pending.set(false);
        });
    };

    view! {
        // The guard forwards quarantined accounts on from "/".
        <Show when=move || signed_in.get()>
            <Redirect path="/"/>
        </Show>

        <div class="w-full max-w-md mx-auto bg-stone-900/80 border border-stone-800 rounded-2xl p-8">
            <h1 class="text-2xl font-bold text-white mb-6 text-center">"Sign in"</h1>

            <Show when=move || error.get().is_some()>
                <ErrorAlert message=error.get().unwrap_or_default()/>
            </Show>

            <form class="space-y-5" on:submit=on_submit>
                <TextInput
                    label="Email"
                    name="email"
                    placeholder="you@example.com"
                    input_type="email"
                    required=true
                    value=email
                    set_value=set_email
                />
                <PasswordInput value=password set_value=set_password/>
                <Button loading=pending>"Sign in"</Button>
            </form>

            <p class="text-center text-stone-400 mt-6 text-sm">
                "No account yet? "
                <a href="/register" class="text-amber-400 hover:text-amber-300">"Register"</a>
            </p>
        </div>
    }
}
