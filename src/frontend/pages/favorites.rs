use leptos::prelude::*;

use crate::api::users;
use crate::frontend::components::{BookGrid, ErrorAlert, Loading};
use crate::frontend::{AppContext, load};
use crate::models::BookPreview;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let favorites = {
        let api = ctx.api.clone();
        LocalResource::new(move || load::<Vec<BookPreview>>(api.clone(), Ok(users::get_user_favorite_books())))
    };

    view! {
        <h1 class="text-3xl font-bold text-white mb-8">"Favorites"</h1>
        <Transition fallback=Loading>
            {move || favorites.get().map(|res| match res {
                Ok(list) => view! { <BookGrid books=list/> }.into_any(),
                Err(e) => view! { <ErrorAlert message=e/> }.into_any(),
            })}
        </Transition>
    }
}
