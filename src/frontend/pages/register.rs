use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::AppContext;
use crate::frontend::components::{Alert, Button, ErrorAlert, PasswordInput, TextInput};
use crate::types::RegisterRequest;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (result, set_result) = signal(None::<Result<String, String>>);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let auth = ctx.auth();
        let input = RegisterRequest {
            email: email.get_untracked().trim().to_string(),
            name: name.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            bio: String::new(),
        };
        set_pending.set(true);
        spawn_local(async move {
            let outcome = auth
                .register(&input)
                .await
                .map(|r| if r.message.is_empty() { "Registration complete.".to_string() } else { r.message })
                .map_err(|e| e.to_string());
            set_result.set(Some(outcome));
            set_pending.set(false);
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-stone-900/80 border border-stone-800 rounded-2xl p-8">
            <h1 class="text-2xl font-bold text-white mb-6 text-center">"Create account"</h1>

            {move || result.get().map(|r| match r {
                Ok(message) => view! {
                    <Alert message=message/>
                    <a href="/login" class="text-amber-400">"Continue to sign in"</a>
                }.into_any(),
                Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
            })}

            <form class="space-y-5" on:submit=on_submit>
                <TextInput label="Name" name="name" placeholder="Reader" value=name set_value=set_name/>
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
                <Button loading=pending>"Register"</Button>
            </form>

            <p class="text-center text-stone-400 mt-6 text-sm">
                "Already registered? "
                <a href="/login" class="text-amber-400 hover:text-amber-300">"Sign in"</a>
            </p>
        </div>
    }
}
