use super::*;
use crate::net::types::User;
use crate::routes::AppRoute;

fn user_with(role: Role) -> AuthState {
    AuthState::Authenticated(User { full_name: "A B".to_owned(), email: "a@b.com".to_owned(), role })
}

#[test]
fn loading_never_renders_protected_views() {
    for access in [Access::Authenticated, Access::Role(Role::Admin)] {
        assert_eq!(evaluate(&AuthState::Loading, &access), GuardDecision::Loading);
    }
}

#[test]
fn public_views_render_in_every_state() {
    for state in [AuthState::Loading, AuthState::Anonymous, user_with(Role::User)] {
        assert_eq!(evaluate(&state, &Access::Public), GuardDecision::Render);
    }
}

#[test]
fn anonymous_is_redirected_to_login() {
    assert_eq!(evaluate(&AuthState::Anonymous, &Access::Authenticated), GuardDecision::Redirect("/login"));
    assert_eq!(evaluate(&AuthState::Anonymous, &Access::Role(Role::Admin)), GuardDecision::Redirect("/login"));
}

#[test]
fn non_admin_is_demoted_to_profile() {
    for role in [Role::User, Role::Other("auditor".to_owned())] {
        let state = user_with(role);
        assert_eq!(evaluate(&state, &AppRoute::Dashboard.access()), GuardDecision::Redirect("/profile"));
    }
}

#[test]
fn admin_renders_dashboard() {
    let state = user_with(Role::Admin);
    assert_eq!(evaluate(&state, &AppRoute::Dashboard.access()), GuardDecision::Render);
}

#[test]
fn any_role_renders_profile() {
    for role in [Role::Admin, Role::User, Role::Other("ops".to_owned())] {
        assert_eq!(evaluate(&user_with(role), &AppRoute::Profile.access()), GuardDecision::Render);
    }
}
