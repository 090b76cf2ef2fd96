//! Contact Commands

use legal_lens_client::ContactSubmission;

use crate::models::response::CommandResponse;
use crate::state::AppState;

/// Send the contact form once
pub async fn submit_contact(state: &AppState, form: ContactSubmission) -> CommandResponse<()> {
    state.contact().submit(&form).await.into()
}
