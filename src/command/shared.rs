use crate::command::CommandError;
use crate::session::SessionConfig;

/// Checks the session is ready for a command, in order: API endpoint, user, then the
/// organization and space when the command needs them.
pub fn check_target<S: SessionConfig + ?Sized>(
    session: &S,
    binary_name: &str,
    organization_required: bool,
    space_required: bool,
) -> Result<(), CommandError> {
    let binary_name = binary_name.to_string();
    if session.api_target().is_none() {
        return Err(CommandError::NoApiTargeted { binary_name });
    }
    if session.current_user().is_none() {
        return Err(CommandError::NotLoggedIn { binary_name });
    }
    if organization_required && !session.has_organization() {
        return Err(CommandError::NoOrganizationTargeted { binary_name });
    }
    if space_required && !session.has_space() {
        return Err(CommandError::NoSpaceTargeted { binary_name });
    }
    Ok(())
}
