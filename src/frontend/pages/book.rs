use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api::{books, comments};
use crate::frontend::components::{Button, ButtonVariant, ErrorAlert, Loading, TextArea};
use crate::frontend::{AppContext, load};
use crate::models::{Book, BookExtras, CommentCreate};

#[component]
pub fn BookPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let params = use_params_map();
    let book_id = move || params.read().get("id").and_then(|id| id.parse::<i64>().ok());

    let book = {
        let api = ctx.api.clone();
        LocalResource::new(move || {
            let endpoint = book_id().map(books::get_book).ok_or_else(|| "Unknown book".to_string());
            load::<Book>(api.clone(), endpoint)
        })
    };
    let extras = {
        let api = ctx.api.clone();
        LocalResource::new(move || {
            let endpoint = book_id()
                .map(books::get_book_extras)
                .ok_or_else(|| "Unknown book".to_string());
            load::<BookExtras>(api.clone(), endpoint)
        })
    };

    let (draft, set_draft) = signal(String::new());
    let (action_error, set_action_error) = signal(None::<String>);

    let toggle_favorite = {
        let api = ctx.api.clone();
        Callback::new(move |_| {
            let (Some(id), Some(Ok(current))) = (book_id(), extras.get_untracked()) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let endpoint = if current.in_favorites {
                    books::remove_from_favorites(id)
                } else {
                    books::add_to_favorites(id)
                };
                match api.send::<serde_json::Value>(endpoint).await {
                    Ok(_) => extras.refetch(),
                    Err(e) => set_action_error.set(Some(e.to_string())),
                }
            });
        })
    };

    let post_comment = {
        let api = ctx.api.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(book_id) = book_id() else {
                return;
            };
            let comment = CommentCreate {
                book_id,
                text: draft.get_untracked().trim().to_string(),
            };
            let api = api.clone();
            spawn_local(async move {
                let result = match comments::create_comment(&comment) {
                    Ok(endpoint) => api.send::<serde_json::Value>(endpoint).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(_) => {
                        set_draft.set(String::new());
                        extras.refetch();
                    }
                    Err(e) => set_action_error.set(Some(e.to_string())),
                }
            });
        }
    };

    view! {
        <Transition fallback=Loading>
            {move || book.get().map(|res| match res {
                Ok(book) => view! { <BookDetails book=book/> }.into_any(),
                Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
            })}
        </Transition>

        {move || action_error.get().map(|e| view! { <ErrorAlert message=e/> })}

        <Transition fallback=Loading>
            {move || extras.get().map(|res| match res {
                Ok(extras) => view! {
                    <div class="my-6">
                        <Button variant=ButtonVariant::Ghost on_click=toggle_favorite>
                            {if extras.in_favorites { "Remove from favorites" } else { "Add to favorites" }}
                        </Button>
                    </div>
                    <h2 class="text-xl font-semibold text-white mb-3">"Comments"</h2>
                    <ul class="space-y-3 mb-6">
                        {extras.comments.into_iter().map(|c| view! {
                            <li class="text-stone-300">
                                <a href=format!("/profile/{}", c.user_id) class="text-amber-400">"#"{c.user_id}</a>
                                " "{c.text}
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any(),
                Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
            })}
        </Transition>

        <form class="space-y-3" on:submit=post_comment>
            <TextArea name="comment" placeholder="Share your thoughts" value=draft set_value=set_draft/>
            <Button>"Post comment"</Button>
        </form>
    }
}

#[component]
fn BookDetails(book: Book) -> impl IntoView {
    view! {
        <article class="mb-6">
            <h1 class="text-3xl font-bold text-white mb-2">{book.title}</h1>
            <p class="text-stone-400 mb-4">
                {book.authors.into_iter().map(|a| view! {
                    <a href=format!("/author/{}", a.id) class="mr-3 hover:text-white">{a.name}</a>
                }).collect_view()}
            </p>
            {book.cover_url.map(|src| view! { <img src=src loading="lazy" class="w-48 rounded mb-4"/> })}
            {book.description.map(|d| view! { <p class="text-stone-300 mb-4">{d}</p> })}
            <dl class="grid grid-cols-2 gap-2 text-sm text-stone-400 max-w-md">
                {book.publish_year.map(|y| view! { <dt>"Published"</dt><dd>{y}</dd> })}
                {book.pages.map(|p| view! { <dt>"Pages"</dt><dd>{p}</dd> })}
                {book.language.map(|l| view! { <dt>"Language"</dt><dd>{l}</dd> })}
                {book.publisher.map(|p| view! { <dt>"Publisher"</dt><dd>{p}</dd> })}
            </dl>
            <div class="flex flex-wrap gap-2 mt-4">
                {book.tags.into_iter().map(|t| view! {
                    <a href=format!("/tag/{}", t.id) class="px-2 py-1 rounded bg-stone-800 text-xs text-stone-300">{t.name}</a>
                }).collect_view()}
            </div>
            <ul class="mt-4 text-sm">
                {book.files.into_iter().map(|f| view! {
                    <li><a href=f.url class="text-amber-400">{f.format}</a>" "{f.description}</li>
                }).collect_view()}
            </ul>
        </article>
    }
}
