//! Route guards driven by the session slice.
//!
//! A guard never assumes "logged out" while the session is still being
//! resolved; it asks the view to render a neutral placeholder instead.

use crate::state::session::SessionState;
use crate::state::RequestStatus;

/// Who may see a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// Sign-in and sign-up pages.
    GuestOnly,
    /// Editor, settings and other pages that need a user.
    UserOnly,
}

/// What the view should do with a guarded route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    /// Send the user to the home page.
    Redirect,
    /// Session not resolved yet; show a loading placeholder.
    Pending,
}

pub fn guard(access: RouteAccess, session: &SessionState) -> GuardOutcome {
    if access == RouteAccess::Public {
        return GuardOutcome::Render;
    }

    if session.is_authenticated {
        return match access {
            RouteAccess::UserOnly => GuardOutcome::Render,
            _ => GuardOutcome::Redirect,
        };
    }

    match session.status {
        RequestStatus::Idle | RequestStatus::Loading => GuardOutcome::Pending,
        RequestStatus::Succeeded | RequestStatus::Failed => match access {
            RouteAccess::GuestOnly => GuardOutcome::Render,
            _ => GuardOutcome::Redirect,
        },
    }
}
