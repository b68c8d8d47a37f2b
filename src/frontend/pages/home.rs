use leptos::prelude::*;

use crate::api::{categories, comments, books};
use crate::frontend::components::{BookGrid, ErrorAlert, Loading};
use crate::frontend::{AppContext, load};
use crate::models::{BookPreview, Category, Comment};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let releases = {
        let api = ctx.api.clone();
        LocalResource::new(move || load::<Vec<BookPreview>>(api.clone(), Ok(books::get_new_releases())))
    };
    let roots = {
        let api = ctx.api.clone();
        LocalResource::new(move || load::<Vec<Category>>(api.clone(), Ok(categories::get_root_categories())))
    };
    let latest = {
        let api = ctx.api.clone();
        LocalResource::new(move || load::<Vec<Comment>>(api.clone(), Ok(comments::get_last_comments())))
    };

    view! {
        <section class="mb-12">
            <h2 class="text-2xl font-bold text-white mb-4">"Categories"</h2>
            <Transition fallback=Loading>
                {move || roots.get().map(|res| match res {
                    Ok(list) => view! {
                        <ul class="flex flex-wrap gap-3">
                            {list.into_iter().map(|c| view! {
                                <li>
                                    <a href=format!("/category/{}", c.id) class="px-3 py-1 rounded-full bg-stone-800 text-stone-300 hover:text-white">
                                        {c.name}
                                    </a>
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_any(),
                    Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
                })}
            </Transition>
        </section>

        <section class="mb-12">
            <h2 class="text-2xl font-bold text-white mb-4">"New releases"</h2>
            <Transition fallback=Loading>
                {move || releases.get().map(|res| match res {
                    Ok(list) => view! { <BookGrid books=list/> }.into_any(),
                    Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
                })}
            </Transition>
        </section>

        <section>
            <h2 class="text-2xl font-bold text-white mb-4">"Latest comments"</h2>
            <Transition fallback=Loading>
                {move || latest.get().map(|res| match res {
                    Ok(list) => view! {
                        <ul class="space-y-3">
                            {list.into_iter().map(|c| view! {
                                <li class="text-stone-300">
                                    <a href=format!("/book/{}", c.book_id) class="text-amber-400">"#"{c.book_id}</a>
                                    " "{c.text}
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_any(),
                    Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
                })}
            </Transition>
        </section>
    }
}
