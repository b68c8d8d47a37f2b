use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::AppContext;
use crate::frontend::components::{Button, ButtonVariant};

/// The only page a `new-user` account can reach until it is promoted.
#[component]
pub fn NewUserPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let logout = Callback::new(move |_| {
        let ctx = ctx.clone();
        spawn_local(async move {
            ctx.auth().logout().await;
            ctx.navigator.navigate(&ctx.guard.config().login_path);
        });
    });

    view! {
        <div class="max-w-xl mx-auto text-center py-16">
            <h1 class="text-3xl font-bold text-white mb-4">"Welcome aboard"</h1>
            <p class="text-stone-400 mb-8">
                "Your account is waiting for approval. A moderator will unlock the catalog for you soon."
            </p>
            <Button variant=ButtonVariant::Ghost on_click=logout>"Sign out"</Button>
        </div>
    }
}
