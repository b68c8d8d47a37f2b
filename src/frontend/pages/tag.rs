use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::{books, tags};
use crate::frontend::components::{BookGrid, ErrorAlert, Loading};
use crate::frontend::{AppContext, load};
use crate::models::{BookPreview, Tag};

#[component]
pub fn TagPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let params = use_params_map();
    let tag_id = move || params.read().get("id").and_then(|id| id.parse::<i64>().ok());

    let tag = {
        let api = ctx.api.clone();
        LocalResource::new(move || {
            let endpoint = tag_id().map(tags::get_tag).ok_or_else(|| "Unknown tag".to_string());
            load::<Tag>(api.clone(), endpoint)
        })
    };
    let tagged = {
        let api = ctx.api.clone();
        LocalResource::new(move || {
            let endpoint = tag_id().map(books::get_books_by_tag).ok_or_else(|| "Unknown tag".to_string());
            load::<Vec<BookPreview>>(api.clone(), endpoint)
        })
    };

    view! {
        <Transition fallback=Loading>
            {move || tag.get().map(|res| match res {
                Ok(t) => view! { <h1 class="text-3xl font-bold text-white mb-8">"#"{t.name}</h1> }.into_any(),
                Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
            })}
        </Transition>
        <Transition fallback=Loading>
            {move || tagged.get().map(|res| match res {
                Ok(list) => view! { <BookGrid books=list/> }.into_any(),
                Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
            })}
        </Transition>
    }
}
