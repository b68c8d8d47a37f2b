//! leptos single-page shell: application context, route gate and routes.

pub mod components;
pub mod pages;

mod gate;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use serde::de::DeserializeOwned;

use crate::access::{GuardConfig, RoleHierarchy, RouteGuard, RouteTable, SessionContext, SessionStore};
use crate::api::{ApiClient, Endpoint, Navigator};
use crate::common::ConfigError;
use crate::config::ApiConfig;
use crate::services::AuthService;

use components::{Footer, Nav};
pub use gate::RouteGate;
use pages::*;

/// Everything the views need, built once at startup and provided as context.
#[derive(Clone)]
pub struct AppContext {
    pub routes: Arc<RouteTable>,
    pub guard: Arc<RouteGuard>,
    pub api: ApiClient,
    pub navigator: Arc<dyn Navigator>,
}

impl AppContext {
    pub fn new(
        api_config: &ApiConfig,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ConfigError> {
        let hierarchy = Arc::new(RoleHierarchy::standard());
        let routes = RouteTable::standard(&hierarchy)?;
        let guard = RouteGuard::new(hierarchy, GuardConfig::default());
        let api = ApiClient::new(api_config, session, navigator.clone())?;

        Ok(Self {
            routes: Arc::new(routes),
            guard: Arc::new(guard),
            api,
            navigator,
        })
    }

    pub fn session(&self) -> SessionContext {
        self.api.session().load()
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.api.clone())
    }
}

/// Sends an endpoint and flattens every failure into a displayable message.
pub(crate) async fn load<T: DeserializeOwned>(
    api: ApiClient,
    endpoint: Result<Endpoint, String>,
) -> Result<T, String> {
    api.send(endpoint?).await.map_err(|e| e.to_string())
}

/// Numeric id at the end of a slug: `fiction-3` -> `3`, `42` -> `42`.
pub fn slug_id(slug: &str) -> Option<i64> {
    slug.rsplit('-').next()?.parse().ok()
}

#[component]
pub fn App(ctx: AppContext) -> impl IntoView {
    provide_meta_context();
    provide_context(ctx);

    view! {
        <Title text="Bookshelf"/>
        <Meta name="description" content="Browse and curate the book catalog"/>

        <Router>
            <Nav/>
            <main class="max-w-6xl mx-auto px-6 py-10 min-h-screen">
                <RouteGate>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/register") view=RegisterPage/>
                        <Route path=path!("/adminbackdoor") view=AdminPage/>
                        <Route path=path!("/new-user") view=NewUserPage/>
                        <Route path=path!("/book/:id") view=BookPage/>
                        <Route path=path!("/author/:id") view=AuthorPage/>
                        <Route path=path!("/category/:slug") view=CategoryPage/>
                        <Route path=path!("/tag/:id") view=TagPage/>
                        <Route path=path!("/profile/:id") view=ProfilePage/>
                        <Route path=path!("/favorites") view=FavoritesPage/>
                    </Routes>
                </RouteGate>
            </main>
            <Footer/>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::slug_id;

    #[test]
    fn slug_id_reads_trailing_number() {
        assert_eq!(slug_id("fiction-3"), Some(3));
        assert_eq!(slug_id("science-fiction-12"), Some(12));
        assert_eq!(slug_id("42"), Some(42));
        assert_eq!(slug_id("fiction"), None);
    }
}
