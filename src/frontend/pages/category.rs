use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::categories;
use crate::frontend::components::{BookGrid, ErrorAlert, Loading};
use crate::frontend::{AppContext, load, slug_id};
use crate::models::{BookPreview, Category};

/// `/category/:slug`, where the slug ends in the category id (`fiction-3`).
#[component]
pub fn CategoryPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let params = use_params_map();
    let category_id = move || params.read().get("slug").and_then(|s| slug_id(&s));

    let info = {
        let api = ctx.api.clone();
        LocalResource::new(move || {
            let endpoint = category_id()
                .map(categories::get_category)
                .ok_or_else(|| "Unknown category".to_string());
            load::<Category>(api.clone(), endpoint)
        })
    };
    let shelf = {
        let api = ctx.api.clone();
        LocalResource::new(move || {
            let endpoint = category_id()
                .map(categories::get_category_books)
                .ok_or_else(|| "Unknown category".to_string());
            load::<Vec<BookPreview>>(api.clone(), endpoint)
        })
    };

    view! {
        <Transition fallback=Loading>
            {move || info.get().map(|res| match res {
                Ok(c) => view! {
                    <header class="mb-8">
                        <h1 class="text-3xl font-bold text-white">{c.name}</h1>
                        <ul class="flex gap-3 mt-3">
                            {c.children.into_iter().map(|child| view! {
                                <li><a href=format!("/category/{}", child.id) class="text-amber-400">{child.name}</a></li>
                            }).collect_view()}
                        </ul>
                    </header>
                }.into_any(),
                Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
            })}
        </Transition>
        <Transition fallback=Loading>
            {move || shelf.get().map(|res| match res {
                Ok(list) => view! { <BookGrid books=list/> }.into_any(),
                Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
            })}
        </Transition>
    }
}
