use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::access::roles;
use crate::api::{Endpoint, users};
use crate::frontend::components::{Button, ButtonVariant, ErrorAlert, Loading};
use crate::frontend::{AppContext, load};
use crate::models::UserProfile;

/// User administration. Hard delete is offered to superadmins only.
#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let superadmin = roles::is_superadmin(ctx.session().role());

    let accounts = {
        let api = ctx.api.clone();
        LocalResource::new(move || load::<Vec<UserProfile>>(api.clone(), Ok(users::get_users())))
    };
    let (action_error, set_action_error) = signal(None::<String>);

    let run = {
        let api = ctx.api.clone();
        move |endpoint: Endpoint| {
            let api = api.clone();
            spawn_local(async move {
                match api.send::<serde_json::Value>(endpoint).await {
                    Ok(_) => accounts.refetch(),
                    Err(e) => set_action_error.set(Some(e.to_string())),
                }
            });
        }
    };

    view! {
        <h1 class="text-3xl font-bold text-white mb-8">"Administration"</h1>
        {move || action_error.get().map(|e| view! { <ErrorAlert message=e/> })}
        <Transition fallback=Loading>
            {move || {
                let run = run.clone();
                accounts.get().map(move |res| match res {
                    Ok(list) => view! {
                        <table class="w-full text-sm text-left text-stone-300">
                            <thead class="text-stone-500">
                                <tr><th>"Name"</th><th>"Email"</th><th>"Role"</th><th>"Active"</th><th></th></tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|user| {
                                    let id = user.id;
                                    let soft = {
                                        let run = run.clone();
                                        Callback::new(move |_| run(users::soft_delete_user(id)))
                                    };
                                    let hard = {
                                        let run = run.clone();
                                        Callback::new(move |_| run(users::hard_delete_user(id)))
                                    };
                                    view! {
                                        <tr class="border-t border-stone-800">
                                            <td><a href=format!("/profile/{}", id) class="text-amber-400">{user.display_name().to_string()}</a></td>
                                            <td>{user.email.clone()}</td>
                                            <td>{user.role.clone()}</td>
                                            <td>{if user.is_active { "yes" } else { "no" }}</td>
                                            <td class="flex gap-2 py-2">
                                                <Button variant=ButtonVariant::Ghost on_click=soft>"Deactivate"</Button>
                                                {superadmin.then(|| view! {
                                                    <Button variant=ButtonVariant::Danger on_click=hard>"Delete"</Button>
                                                })}
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any(),
                    Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
                })
            }}
        </Transition>
    }
}
