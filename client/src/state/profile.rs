//! Signed-in user profile, refetched after account-changing actions.

use crate::net::types::Profile;

#[derive(Clone, Debug, Default)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub loading: bool,
}

impl ProfileState {
    #[must_use]
    pub fn organization_name(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|p| p.organization.as_ref())
            .map(|org| org.name.as_str())
    }

    #[must_use]
    pub fn credits(&self) -> Option<i64> {
        self.profile
            .as_ref()
            .and_then(|p| p.organization.as_ref())
            .and_then(|org| org.credits)
    }
}
