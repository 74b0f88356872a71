//! State command handler

use crate::application::ports::{KeyValueStore, StoreError};
use crate::domain::notification::{NotificationId, LAST_NOTIFICATION_ID_KEY};

use super::args::StateAction;
use super::presenter::Presenter;

/// Handle state subcommand against the durable store
pub async fn handle_state_command<S: KeyValueStore>(
    action: StateAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), StoreError> {
    match action {
        StateAction::Show => {
            let id = store
                .get(LAST_NOTIFICATION_ID_KEY)
                .await?
                .as_deref()
                .map(NotificationId::parse_lenient)
                .unwrap_or_default();
            presenter.key_value(LAST_NOTIFICATION_ID_KEY, &id.to_string());
        }
        StateAction::Reset => {
            store.remove(LAST_NOTIFICATION_ID_KEY).await?;
            presenter.success("Last seen notification id cleared");
        }
    }
    Ok(())
}
