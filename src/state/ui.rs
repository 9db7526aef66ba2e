//! UI chrome state shared through context.

/// Cross-page UI state. Kept apart from [`crate::state::auth::AuthState`]
/// so theme toggles never invalidate auth-dependent views.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
