use crate::domain::KeyringImportStatus;
use crate::ports::PortError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportAction {
    Start,
    Complete,
    Fail(String),
}

/// Legal keyring-import moves. A finished import (done or failed) may be
/// restarted; an import already in flight may not.
pub fn import_transition(
    from: &KeyringImportStatus,
    action: ImportAction,
) -> Result<(KeyringImportStatus, &'static str), PortError> {
    use KeyringImportStatus as S;
    match (from, action) {
        (S::NotStarted | S::Done | S::Failed(_), ImportAction::Start) => {
            Ok((S::InProgress, "import requested"))
        }
        (S::InProgress, ImportAction::Complete) => Ok((S::Done, "keyring imported")),
        (S::InProgress, ImportAction::Fail(reason)) => Ok((S::Failed(reason), "import failed")),
        (from, action) => Err(PortError::Validation(format!(
            "illegal import transition: {} via {action:?}",
            from.label()
        ))),
    }
}
