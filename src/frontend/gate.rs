use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::frontend::AppContext;

/// Runs the route guard on every path change and renders either its
/// children or a redirect.
///
/// The previous path is tracked only for logging.
#[component]
pub fn RouteGate(children: ChildrenFn) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let location = use_location();
    let previous = StoredValue::new(None::<String>);

    let redirect = Memo::new(move |_| {
        let path = location.pathname.get();
        let session = ctx.session();
        let mut outcome = None;

        match ctx.routes.resolve(&path) {
            Some(target) => {
                let origin = previous
                    .get_value()
                    .and_then(|p| ctx.routes.resolve(&p));
                ctx.guard.before_each(&session, &target, origin.as_ref(), |next| {
                    outcome = next.map(str::to_string);
                });
            }
            None => log::error!("no route matches {}", path),
        }

        previous.set_value(Some(path));
        outcome
    });

    move || match redirect.get() {
        None => children().into_any(),
        Some(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
