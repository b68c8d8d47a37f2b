mod common;

#[cfg(test)]
pub mod guard_tests {
    use std::cell::Cell;

    use rstest::rstest;

    use bookshelf::access::roles::SUPERADMIN;
    use bookshelf::access::{
        Decision, DenyReason, RoleHierarchy, RouteDef, RouteGuard, RouteId, RouteTable,
    };

    use super::common::*;

    fn redirect_of(decision: &Decision) -> Option<&str> {
        decision.redirect_path()
    }

    #[rstest]
    #[case("/login")]
    #[case("/register")]
    fn test_public_paths_proceed_without_token(#[case] path: &str) {
        let decision = decide(&session(None, None), path);
        assert_eq!(decision, Decision::Proceed);
    }

    #[rstest]
    #[case("/")]
    #[case("/book/7")]
    #[case("/category/fiction-3")]
    #[case("/adminbackdoor")]
    #[case("/new-user")]
    #[case("/favorites")]
    #[case("/no/such/page")]
    fn test_protected_paths_redirect_to_login_without_token(#[case] path: &str) {
        let decision = decide(&session(None, None), path);
        assert_eq!(
            decision,
            Decision::Redirect {
                to: "/login".into(),
                reason: DenyReason::Unauthenticated,
            }
        );
    }

    #[test]
    fn test_role_without_token_is_still_unauthenticated() {
        let decision = decide(&session(None, Some("admin")), "/adminbackdoor");
        assert_eq!(redirect_of(&decision), Some("/login"));
    }

    #[test]
    fn test_stale_quarantine_role_without_token_alternates() {
        let stale = session(None, Some("new-user"));
        assert_eq!(redirect_of(&decide(&stale, "/login")), Some("/new-user"));
        assert_eq!(redirect_of(&decide(&stale, "/new-user")), Some("/login"));
    }

    #[rstest]
    #[case("/")]
    #[case("/category/fiction-3")]
    #[case("/adminbackdoor")]
    #[case("/favorites")]
    #[case("/login")]
    #[case("/register")]
    #[case("/unknown")]
    fn test_new_user_is_quarantined(#[case] path: &str) {
        let decision = decide(&session(Some("abc"), Some("new-user")), path);
        assert_eq!(
            decision,
            Decision::Redirect {
                to: "/new-user".into(),
                reason: DenyReason::Quarantined,
            }
        );
    }

    #[test]
    fn test_new_user_reaches_quarantine_page() {
        let decision = decide(&session(Some("abc"), Some("new-user")), "/new-user");
        assert_eq!(decision, Decision::Proceed);
    }

    #[test]
    fn test_user_denied_admin_route_goes_home() {
        let decision = decide(&session(Some("abc"), Some("user")), "/adminbackdoor");
        assert_eq!(
            decision,
            Decision::Redirect {
                to: "/".into(),
                reason: DenyReason::InsufficientRole,
            }
        );
    }

    #[rstest]
    #[case("admin", "/favorites")]
    #[case("admin", "/adminbackdoor")]
    #[case("user", "/favorites")]
    #[case("superadmin", "/favorites")]
    #[case("superadmin", "/adminbackdoor")]
    #[case("superadmin", "/new-user")]
    #[case("user", "/book/12")]
    fn test_sufficient_role_proceeds(#[case] role: &str, #[case] path: &str) {
        let decision = decide(&session(Some("abc"), Some(role)), path);
        assert_eq!(decision, Decision::Proceed);
    }

    #[rstest]
    #[case("superadmin", None)]
    #[case("admin", Some(("/", DenyReason::InsufficientRole)))]
    #[case("user", Some(("/", DenyReason::InsufficientRole)))]
    #[case("new-user", Some(("/new-user", DenyReason::Quarantined)))]
    fn test_superadmin_route_compares_top_rank(
        #[case] role: &str,
        #[case] expected: Option<(&str, DenyReason)>,
    ) {
        let table = RouteTable::build(
            vec![
                RouteDef::new(RouteId::Admin, "/root").min_role(SUPERADMIN),
                RouteDef::new(RouteId::NotFound, "/*"),
            ],
            &RoleHierarchy::standard(),
        )
        .unwrap();
        let target = table.resolve("/root").unwrap();
        assert_eq!(target.route.id, RouteId::Admin);

        let decision = RouteGuard::default().decide(&session(Some("abc"), Some(role)), &target);

        let expected = match expected {
            None => Decision::Proceed,
            Some((to, reason)) => Decision::Redirect {
                to: to.into(),
                reason,
            },
        };
        assert_eq!(decision, expected);
    }

    #[test]
    fn test_token_without_role_on_gated_route_goes_to_login() {
        let decision = decide(&session(Some("abc"), None), "/favorites");
        assert_eq!(
            decision,
            Decision::Redirect {
                to: "/login".into(),
                reason: DenyReason::MissingSession,
            }
        );
    }

    #[test]
    fn test_token_without_role_on_open_route_proceeds() {
        let decision = decide(&session(Some("abc"), None), "/book/1");
        assert_eq!(decision, Decision::Proceed);
    }

    #[rstest]
    #[case("/favorites", Some("/"))]
    #[case("/new-user", Some("/"))]
    #[case("/book/1", None)]
    fn test_unknown_role_is_authenticated_but_unranked(
        #[case] path: &str,
        #[case] expected: Option<&str>,
    ) {
        let decision = decide(&session(Some("abc"), Some("librarian")), path);
        assert_eq!(redirect_of(&decision), expected);
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let decision = decide(&session(Some(""), Some("")), "/");
        assert_eq!(redirect_of(&decision), Some("/login"));
    }

    #[test]
    fn test_trailing_slash_and_query_are_ignored() {
        let decision = decide(&session(None, None), "/register/?ref=mail");
        assert_eq!(decision, Decision::Proceed);
    }

    #[test]
    fn test_decision_is_idempotent() {
        let s = session(Some("abc"), Some("user"));
        let first = decide(&s, "/adminbackdoor");
        let second = decide(&s, "/adminbackdoor");
        assert_eq!(first, second);
    }

    #[test]
    fn test_before_each_calls_next_once_with_redirect() {
        let table = standard_table();
        let guard = RouteGuard::default();
        let to = table.resolve("/category/fiction-3").unwrap();
        let from = table.resolve("/").unwrap();
        let calls = Cell::new(0);
        let mut seen = None;

        guard.before_each(
            &session(Some("abc"), Some("new-user")),
            &to,
            Some(&from),
            |next| {
                calls.set(calls.get() + 1);
                seen = next.map(String::from);
            },
        );

        assert_eq!(calls.get(), 1);
        assert_eq!(seen.as_deref(), Some("/new-user"));
    }

    #[test]
    fn test_before_each_calls_next_once_with_proceed() {
        let table = standard_table();
        let guard = RouteGuard::default();
        let to = table.resolve("/register").unwrap();
        let calls = Cell::new(0);
        let mut seen = Some("unset".to_string());

        guard.before_each(&session(None, None), &to, None, |next| {
            calls.set(calls.get() + 1);
            seen = next.map(String::from);
        });

        assert_eq!(calls.get(), 1);
        assert_eq!(seen, None);
    }
}
