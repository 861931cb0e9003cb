/// The one dialog a view may have open, as a single exclusive variant.
///
/// Holding this instead of one boolean per modal makes it impossible for
/// two dialogs to be visible at once: opening one closes whatever was open.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum DialogState<T> {
    #[default]
    Closed,
    /// Read-only detail view of one record.
    Viewing(T),
    /// Edit form pre-populated from one record.
    Editing(T),
    /// Pending destructive action awaiting confirmation.
    Confirming(T),
    /// Resource-specific action dialog (challenge, message, join, start).
    Action(T),
}

impl<T> DialogState<T> {
    pub fn is_closed(&self) -> bool {
        matches!(self, DialogState::Closed)
    }

    /// The record the open dialog refers to, if any.
    pub fn selected(&self) -> Option<&T> {
        match self {
            DialogState::Closed => None,
            DialogState::Viewing(record)
            | DialogState::Editing(record)
            | DialogState::Confirming(record)
            | DialogState::Action(record) => Some(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let dialog: DialogState<u32> = DialogState::default();
        assert!(dialog.is_closed());
        assert_eq!(dialog.selected(), None);
    }

    #[test]
    fn opening_one_dialog_replaces_another() {
        let mut dialog = DialogState::Viewing(1u32);
        assert_eq!(dialog.selected(), Some(&1));

        dialog = DialogState::Editing(2);
        assert!(matches!(dialog, DialogState::Editing(2)));
        assert_eq!(dialog.selected(), Some(&2));

        dialog = DialogState::Closed;
        assert!(dialog.is_closed());
    }
}
