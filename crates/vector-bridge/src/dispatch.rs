use crate::messages::{SessionToUi, UiToSession};
use crate::session_state::{BridgeError, SessionState, EMPTY_PLACEHOLDER};

/// Dispatch a UI message to the session and return a response.
///
/// Every accepted message is followed by a full re-render; a rejected one
/// yields `SessionToUi::Error` and leaves the session as it was.
pub fn dispatch(state: &mut SessionState, msg: UiToSession) -> SessionToUi {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => SessionToUi::Error {
            message: e.to_string(),
        },
    }
}

fn handle_message(state: &mut SessionState, msg: UiToSession) -> Result<SessionToUi, BridgeError> {
    match msg {
        UiToSession::AddVector { name, coordinates } => {
            state.add_vector(name.as_deref(), &coordinates)?;
        }

        UiToSession::MarkForDeletion { index, marked } => {
            state.mark_for_deletion(index, marked)?;
        }

        UiToSession::ApplyDeletions => {
            state.collection.apply_deletions();
        }

        UiToSession::DeleteVectors { indices } => {
            state.collection.remove(&indices);
        }

        UiToSession::SetSequential { sequential } => {
            state.set_sequential(sequential);
        }

        UiToSession::Refresh => {}

        UiToSession::Reset => {
            state.reset();
        }
    }
    Ok(scene_updated_response(state))
}

/// Build a SceneUpdated response from the current session state.
pub fn scene_updated_response(state: &SessionState) -> SessionToUi {
    SessionToUi::SceneUpdated {
        entries: state.entry_views(),
        scene: state.scene(),
        sequential: state.sequential,
        placeholder: state
            .collection
            .is_empty()
            .then(|| EMPTY_PLACEHOLDER.to_string()),
    }
}

/// Encode a response as JSON for the UI.
///
/// Falls back to an `Error` response if encoding fails.
pub fn encode_response(response: &SessionToUi) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| serialization_failure(&e))
}

fn serialization_failure(err: &serde_json::Error) -> String {
    serde_json::json!({
        "type": "Error",
        "message": format!("Serialization failed: {err}"),
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_response_decodes() {
        let mut state = SessionState::new();
        let response = dispatch(
            &mut state,
            UiToSession::AddVector {
                name: Some("u".into()),
                coordinates: "(1,2,3)".into(),
            },
        );
        let decoded: SessionToUi = serde_json::from_str(&encode_response(&response)).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn serialization_failure_escapes_error_text() {
        let err = <serde_json::Error as serde::ser::Error>::custom(r#"bad "key" \ here"#);
        let decoded: SessionToUi = serde_json::from_str(&serialization_failure(&err)).unwrap();
        match decoded {
            SessionToUi::Error { message } => {
                assert_eq!(message, r#"Serialization failed: bad "key" \ here"#)
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }
}
