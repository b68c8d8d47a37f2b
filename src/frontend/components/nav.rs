use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

use crate::access::roles;
use crate::frontend::AppContext;

#[component]
pub fn Nav() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let location = use_location();

    // localStorage is not reactive; re-read it on every navigation.
    let session = {
        let ctx = ctx.clone();
        move || {
            location.pathname.track();
            ctx.session()
        }
    };
    let signed_in = {
        let session = session.clone();
        move || session().is_authenticated()
    };
    let admin = move || roles::is_admin(session().role());

    let logout = move |_| {
        let ctx = ctx.clone();
        spawn_local(async move {
            ctx.auth().logout().await;
            ctx.navigator.navigate(&ctx.guard.config().login_path);
        });
    };

    view! {
        <nav class="sticky top-0 z-50 backdrop-blur-md bg-stone-950/80 border-b border-stone-800">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="/" class="text-xl font-bold text-amber-400">"Bookshelf"</a>
                <div class="flex items-center gap-6 text-sm">
                    <Show
                        when=signed_in.clone()
                        fallback=|| view! {
                            <a href="/login" class="text-stone-400 hover:text-white">"Login"</a>
                            <a href="/register" class="text-stone-400 hover:text-white">"Register"</a>
                        }
                    >
                        <a href="/favorites" class="text-stone-400 hover:text-white">"Favorites"</a>
                        <Show when=admin.clone()>
                            <a href="/adminbackdoor" class="text-stone-400 hover:text-white">"Admin"</a>
                        </Show>
                        <button class="text-stone-400 hover:text-white" on:click=logout.clone()>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
