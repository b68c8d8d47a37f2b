use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::{authors, books};
use crate::frontend::components::{BookGrid, ErrorAlert, Loading};
use crate::frontend::{AppContext, load};
use crate::models::{Author, BookPreview};

#[component]
pub fn AuthorPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let params = use_params_map();
    let author_id = move || params.read().get("id").and_then(|id| id.parse::<i64>().ok());

    let author = {
        let api = ctx.api.clone();
        LocalResource::new(move || {
            let endpoint = author_id().map(authors::get_author).ok_or_else(|| "Unknown author".to_string());
            load::<Author>(api.clone(), endpoint)
        })
    };
    let works = {
        let api = ctx.api.clone();
        LocalResource::new(move || {
            let endpoint = author_id()
                .map(books::get_books_by_author)
                .ok_or_else(|| "Unknown author".to_string());
            load::<Vec<BookPreview>>(api.clone(), endpoint)
        })
    };

    view! {
        <Transition fallback=Loading>
            {move || author.get().map(|res| match res {
                Ok(a) => view! {
                    <header class="mb-8">
                        <h1 class="text-3xl font-bold text-white">{a.name}</h1>
                        {a.bio.map(|bio| view! { <p class="text-stone-400 mt-2">{bio}</p> })}
                    </header>
                }.into_any(),
                Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
            })}
        </Transition>
        <Transition fallback=Loading>
            {move || works.get().map(|res| match res {
                Ok(list) => view! { <BookGrid books=list/> }.into_any(),
                Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
            })}
        </Transition>
    }
}
