use super::*;

fn user(role: UserRole) -> User {
    User {
        id: "u-1".to_owned(),
        email: "editor@school.com".to_owned(),
        full_name: "Test User".to_owned(),
        role,
        is_active: true,
        created_at: "2025-09-01T10:00:00".to_owned(),
        updated_at: "2025-09-01T10:00:00".to_owned(),
    }
}

#[test]
fn default_state_is_signed_out_and_idle() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn any_user_is_authenticated() {
    let state = AuthState { user: Some(user(UserRole::Editor)), loading: false };
    assert!(state.is_authenticated());
}

#[test]
fn only_admin_role_is_admin() {
    for (role, expected) in [
        (UserRole::Admin, true),
        (UserRole::Moderator, false),
        (UserRole::Editor, false),
    ] {
        let state = AuthState { user: Some(user(role)), loading: false };
        assert_eq!(state.is_admin(), expected);
    }
}
