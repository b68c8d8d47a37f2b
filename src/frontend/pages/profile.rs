use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::users;
use crate::frontend::components::{BookGrid, ErrorAlert, Loading};
use crate::frontend::{AppContext, load};
use crate::models::{BookPreview, Comment, UserProfile};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let params = use_params_map();
    let user_id = move || params.read().get("id").and_then(|id| id.parse::<i64>().ok());

    let profile = {
        let api = ctx.api.clone();
        LocalResource::new(move || {
            let endpoint = user_id().map(users::get_user_profile).ok_or_else(|| "Unknown user".to_string());
            load::<UserProfile>(api.clone(), endpoint)
        })
    };
    let uploads = {
        let api = ctx.api.clone();
        LocalResource::new(move || {
            let endpoint = user_id().map(users::get_user_books).ok_or_else(|| "Unknown user".to_string());
            load::<Vec<BookPreview>>(api.clone(), endpoint)
        })
    };
    // Only the owner or an admin may read these; a 403 is shown inline.
    let remarks = {
        let api = ctx.api.clone();
        LocalResource::new(move || {
            let endpoint = user_id().map(users::get_user_comments).ok_or_else(|| "Unknown user".to_string());
            load::<Vec<Comment>>(api.clone(), endpoint)
        })
    };

    view! {
        <Transition fallback=Loading>
            {move || profile.get().map(|res| match res {
                Ok(user) => view! {
                    <header class="mb-8">
                        <h1 class="text-3xl font-bold text-white">{user.display_name().to_string()}</h1>
                        <p class="text-stone-500 text-sm">{user.role.clone()}</p>
                        {user.bio.clone().map(|bio| view! { <p class="text-stone-400 mt-2">{bio}</p> })}
                    </header>
                }.into_any(),
                Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
            })}
        </Transition>
        <h2 class="text-xl font-semibold text-white mb-3">"Uploaded books"</h2>
        <Transition fallback=Loading>
            {move || uploads.get().map(|res| match res {
                Ok(list) => view! { <BookGrid books=list/> }.into_any(),
                Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
            })}
        </Transition>
        <h2 class="text-xl font-semibold text-white mt-8 mb-3">"Comments"</h2>
        <Transition fallback=Loading>
            {move || remarks.get().map(|res| match res {
                Ok(list) => view! {
                    <ul class="space-y-2">
                        {list.into_iter().map(|c| view! {
                            <li class="text-stone-300">
                                <a href=format!("/book/{}", c.book_id) class="text-amber-400">"#"{c.book_id}</a>" "{c.text}
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any(),
                Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
            })}
        </Transition>
    }
}
