use leptos::prelude::*;

use crate::models::BookPreview;

#[component]
pub fn BookCard(book: BookPreview) -> impl IntoView {
    let authors = book
        .authors
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let cover = book.cover_image_url.or(book.cover_url);

    view! {
        <a
            href=format!("/book/{}", book.id)
            class="block rounded-xl bg-stone-900 border border-stone-800 p-4 hover:border-amber-600 transition-colors"
        >
            {cover.map(|src| view! { <img src=src loading="lazy" class="w-full h-48 object-cover rounded mb-3"/> })}
            <h3 class="font-semibold text-white">{book.title}</h3>
            <p class="text-sm text-stone-400">{authors}</p>
            {book.publish_year.map(|y| view! { <p class="text-xs text-stone-500">{y}</p> })}
        </a>
    }
}

#[component]
pub fn BookGrid(books: Vec<BookPreview>) -> impl IntoView {
    if books.is_empty() {
        return view! { <p class="text-stone-500">"No books here yet."</p> }.into_any();
    }

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {books.into_iter().map(|book| view! { <BookCard book=book/> }).collect_view()}
        </div>
    }
    .into_any()
}
