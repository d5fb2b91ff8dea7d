use crate::models::Identity;
use serde::Serialize;

pub const ADMIN_DISPLAY_NAME: &str = "Admin";

/// The currently authenticated identity and its privilege level.
///
/// Fields are private: the only writers are the sign-in and clear
/// transitions below.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Session {
    current_user: Option<Identity>,
    is_admin: bool,
}

impl Session {
    pub fn current_user(&self) -> Option<&Identity> {
        self.current_user.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn sign_in_user(&mut self, identity: Identity) {
        self.current_user = Some(identity);
        self.is_admin = false;
    }

    /// The admin endpoint returns nothing we trust, so the identity is built
    /// here from the submitted id.
    pub fn sign_in_admin(&mut self, admin_id: &str) {
        self.current_user = Some(Identity {
            id: admin_id.to_string(),
            name: Some(ADMIN_DISPLAY_NAME.to_string()),
        });
        self.is_admin = true;
    }

    pub fn clear(&mut self) {
        self.current_user = None;
        self.is_admin = false;
    }

    pub fn user_dashboard_visible(&self) -> bool {
        self.current_user.is_some() && !self.is_admin
    }

    pub fn admin_dashboard_visible(&self) -> bool {
        self.is_admin && self.current_user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(id: &str) -> Identity {
        Identity {
            id: id.to_string(),
            name: None,
        }
    }

    #[test]
    fn new_session_is_anonymous() {
        let session = Session::default();
        assert!(session.current_user().is_none());
        assert!(!session.is_admin());
        assert!(!session.user_dashboard_visible());
        assert!(!session.admin_dashboard_visible());
    }

    #[test]
    fn admin_sign_in_uses_fixed_name() {
        let mut session = Session::default();
        session.sign_in_admin("900");
        let user = session.current_user().unwrap();
        assert_eq!(user.id, "900");
        assert_eq!(user.display_name(), ADMIN_DISPLAY_NAME);
        assert!(session.admin_dashboard_visible());
        assert!(!session.user_dashboard_visible());
    }

    #[test]
    fn user_sign_in_drops_admin_flag() {
        let mut session = Session::default();
        session.sign_in_admin("900");
        session.sign_in_user(identity("12"));
        assert!(!session.is_admin());
        assert!(session.user_dashboard_visible());
    }

    #[test]
    fn clear_resets_everything() {
        let mut session = Session::default();
        session.sign_in_admin("900");
        session.clear();
        assert_eq!(session, Session::default());
    }
}
