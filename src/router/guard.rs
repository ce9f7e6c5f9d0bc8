// ============================================================================
// ROUTE GUARD - Decisión de acceso (función pura del estado de sesión)
// ============================================================================

use crate::router::route::Access;
use crate::state::session_state::{SessionAccess, SessionSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Granted,
    RedirectToLogin,
    /// Autenticado pero sin rol admin: vista por defecto, nunca login
    RedirectToDefault,
}

/// Evaluar el acceso a una vista. Sin memoria: se llama en cada navegación/render.
pub fn evaluate(required: Access, session: &SessionSnapshot) -> GuardDecision {
    match (required, session.access()) {
        (Access::Public, _) => GuardDecision::Granted,
        (_, SessionAccess::Anonymous) => GuardDecision::RedirectToLogin,
        (Access::Authenticated, SessionAccess::Authenticated(_)) => GuardDecision::Granted,
        (Access::Admin, SessionAccess::Authenticated(Some(role))) if role.is_admin() => {
            GuardDecision::Granted
        }
        (Access::Admin, SessionAccess::Authenticated(_)) => GuardDecision::RedirectToDefault,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn snapshot(credential: Option<&str>, role: Option<&str>) -> SessionSnapshot {
        SessionSnapshot {
            credential: credential.map(str::to_string),
            role: role.map(str::to_string),
        }
    }

    #[rstest]
    #[case(Access::Authenticated, None, None, GuardDecision::RedirectToLogin)]
    #[case(Access::Authenticated, None, Some("admin"), GuardDecision::RedirectToLogin)]
    #[case(Access::Authenticated, Some(""), Some("admin"), GuardDecision::RedirectToLogin)]
    #[case(Access::Authenticated, Some("t"), None, GuardDecision::Granted)]
    #[case(Access::Authenticated, Some("t"), Some("customer"), GuardDecision::Granted)]
    #[case(Access::Admin, None, Some("admin"), GuardDecision::RedirectToLogin)]
    #[case(Access::Admin, Some("t"), Some("customer"), GuardDecision::RedirectToDefault)]
    #[case(Access::Admin, Some("t"), None, GuardDecision::RedirectToDefault)]
    #[case(Access::Admin, Some("t"), Some("admin"), GuardDecision::Granted)]
    #[case(Access::Public, None, None, GuardDecision::Granted)]
    fn decides_from_session(
        #[case] access: Access,
        #[case] credential: Option<&str>,
        #[case] role: Option<&str>,
        #[case] expected: GuardDecision,
    ) {
        assert_eq!(evaluate(access, &snapshot(credential, role)), expected);
    }
}
