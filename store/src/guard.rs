//! Access guard: one pure decision function for every protected screen.

use crate::models::{Role, Session};

/// Outcome of the access check for a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session settled and the role requirement, if any, is met.
    Render,
    /// Settled with no signed-in user.
    RedirectLogin,
    /// Signed in, but the screen requires a role the user does not hold.
    RedirectHome,
    /// Still hydrating; render nothing to avoid a flash-redirect to login.
    Wait,
}

/// Decide whether a screen may render for the given session.
///
/// Deterministic and side-effect-free: the same `(session, required_roles)`
/// always yields the same decision, independent of prior calls.
pub fn decide(session: &Session, required_roles: Option<&[Role]>) -> AccessDecision {
    if session.initializing {
        return AccessDecision::Wait;
    }
    match &session.user {
        // token persisted but profile not hydrated yet
        None if session.has_token() => AccessDecision::Wait,
        None => AccessDecision::RedirectLogin,
        Some(user) => match required_roles {
            Some(roles) if !roles.contains(&user.role) => AccessDecision::RedirectHome,
            _ => AccessDecision::Render,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Profile;

    fn session(token: &str, role: Option<Role>, initializing: bool) -> Session {
        Session {
            token: token.into(),
            user: role.map(|role| Profile {
                id: "u1".into(),
                full_name: "Efua Owusu".into(),
                email: "efua@school.test".into(),
                role,
            }),
            initializing,
            loading: false,
        }
    }

    #[test]
    fn waits_while_initializing() {
        let s = session("", None, true);
        assert_eq!(decide(&s, None), AccessDecision::Wait);
        assert_eq!(decide(&s, Some(&[Role::Admin])), AccessDecision::Wait);
    }

    #[test]
    fn waits_while_token_unhydrated() {
        let s = session("tok", None, false);
        assert_eq!(decide(&s, None), AccessDecision::Wait);
    }

    #[test]
    fn redirects_to_login_when_settled_without_user() {
        let s = session("", None, false);
        assert_eq!(decide(&s, None), AccessDecision::RedirectLogin);
        assert_eq!(decide(&s, Some(&[Role::Admin])), AccessDecision::RedirectLogin);
    }

    #[test]
    fn redirects_home_on_missing_role() {
        let s = session("tok", Some(Role::Committee), false);
        assert_eq!(decide(&s, Some(&[Role::Admin])), AccessDecision::RedirectHome);
    }

    #[test]
    fn renders_when_role_matches_or_unrestricted() {
        let s = session("tok", Some(Role::Committee), false);
        assert_eq!(decide(&s, None), AccessDecision::Render);
        assert_eq!(
            decide(&s, Some(&[Role::Admin, Role::Committee])),
            AccessDecision::Render
        );

        let admin = session("tok", Some(Role::Admin), false);
        assert_eq!(decide(&admin, Some(&[Role::Admin])), AccessDecision::Render);
    }

    #[test]
    fn never_renders_without_user() {
        for initializing in [true, false] {
            for token in ["", "tok"] {
                let s = session(token, None, initializing);
                assert_ne!(decide(&s, None), AccessDecision::Render);
                assert_ne!(decide(&s, Some(&[Role::Admin])), AccessDecision::Render);
            }
        }
    }

    #[test]
    fn deterministic_across_calls() {
        let s = session("tok", Some(Role::Admin), false);
        let first = decide(&s, Some(&[Role::Admin]));
        for _ in 0..3 {
            assert_eq!(decide(&s, Some(&[Role::Admin])), first);
        }
    }
}
