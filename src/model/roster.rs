use crate::model::Identifiable;

/// One mutation of a working set. Fetches, optimistic writes and the
/// reverts of failed writes all flow through here, so every change applies
/// against the set's current state rather than a stale snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterAction<T> {
    /// Fresh fetch result replacing the working set wholesale.
    Load(Vec<T>),
    /// Replace the record with the matching identifier. Also used to
    /// revert a failed edit back to the pre-edit record.
    Update(T),
    /// Remove the record with the given identifier.
    Remove(String),
    /// Undo a removal whose server delete failed, back at its old spot.
    Restore { index: usize, record: T },
}

/// The working set a view holds after normalizing a fetch response.
///
/// Mutations match on record identifier and degrade to no-ops when the
/// identifier is unknown; the return value reports whether anything changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster<T> {
    records: Vec<T>,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Roster {
            records: Vec::new(),
        }
    }
}

impl<T> Roster<T>
where
    T: Identifiable + Clone + PartialEq,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the working set wholesale, as a fresh fetch does.
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.records = records;
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.identifier() == id)
    }

    /// Replaces the record whose identifier matches `record`, leaving all
    /// others untouched. Returns `false` when no identifier matches.
    pub fn update(&mut self, record: T) -> bool {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.identifier() == record.identifier())
        {
            Some(existing) => {
                *existing = record;
                true
            }
            None => false,
        }
    }

    /// Removes the record with the given identifier. At most one record is
    /// removed; returns `false` when the identifier is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        self.take(id).is_some()
    }

    /// Removes and returns the record with the given identifier, along
    /// with the position it held.
    pub fn take(&mut self, id: &str) -> Option<(usize, T)> {
        let index = self
            .records
            .iter()
            .position(|record| record.identifier() == id)?;
        Some((index, self.records.remove(index)))
    }

    /// Reinserts a record at `index`, clamped to the current length.
    pub fn insert_at(&mut self, index: usize, record: T) {
        let index = index.min(self.records.len());
        self.records.insert(index, record);
    }

    pub fn apply(&mut self, action: RosterAction<T>) {
        match action {
            RosterAction::Load(records) => self.replace_all(records),
            RosterAction::Update(record) => {
                self.update(record);
            }
            RosterAction::Remove(id) => {
                self.remove(&id);
            }
            RosterAction::Restore { index, record } => {
                // only restore if nothing brought the record back meanwhile
                if self.get(record.identifier()).is_none() {
                    self.insert_at(index, record);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Activity;

    fn activity(id: &str, user: &str) -> Activity {
        Activity {
            id: id.to_string(),
            user: Some(user.to_string()),
            activity: Some("Flying".to_string()),
            duration: Some(60),
        }
    }

    fn roster() -> Roster<Activity> {
        let mut roster = Roster::new();
        roster.replace_all(vec![
            activity("1", "Superman"),
            activity("2", "Batman"),
            activity("3", "Iron Man"),
        ]);
        roster
    }

    #[test]
    fn update_touches_only_the_matching_record() {
        let mut roster = roster();
        let before: Vec<Activity> = roster.records().to_vec();

        let mut edited = activity("2", "Batman");
        edited.duration = Some(90);
        assert!(roster.update(edited.clone()));

        assert_eq!(roster.get("2"), Some(&edited));
        assert_eq!(roster.get("1"), before.first());
        assert_eq!(roster.get("3"), before.last());
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn update_with_unknown_identifier_is_a_noop() {
        let mut roster = roster();
        let before = roster.clone();
        assert!(!roster.update(activity("99", "Nobody")));
        assert_eq!(roster, before);
    }

    #[test]
    fn remove_drops_exactly_one_record() {
        let mut roster = roster();
        assert!(roster.remove("2"));
        assert_eq!(roster.len(), 2);
        assert!(roster.get("2").is_none());
        assert!(roster.get("1").is_some());
        assert!(roster.get("3").is_some());
    }

    #[test]
    fn remove_with_unknown_identifier_is_a_noop() {
        let mut roster = roster();
        assert!(!roster.remove("99"));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn replace_all_swaps_the_working_set() {
        let mut roster = roster();
        roster.replace_all(vec![activity("7", "Wonder Woman")]);
        assert_eq!(roster.len(), 1);
        assert!(roster.get("7").is_some());
    }

    #[test]
    fn take_reports_the_position_held() {
        let mut roster = roster();
        let (index, removed) = roster.take("2").unwrap();
        assert_eq!(index, 1);
        assert_eq!(removed.identifier(), "2");
        assert!(roster.take("2").is_none());
    }

    #[test]
    fn restore_reinserts_at_the_old_position() {
        let mut roster = roster();
        let (index, removed) = roster.take("2").unwrap();
        roster.apply(RosterAction::Restore {
            index,
            record: removed,
        });
        let ids: Vec<&str> = roster.records().iter().map(|a| a.identifier()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn restore_is_skipped_when_the_record_reappeared() {
        let mut roster = roster();
        roster.apply(RosterAction::Restore {
            index: 0,
            record: activity("2", "Someone Else"),
        });
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.get("2"), Some(&activity("2", "Batman")));
    }

    #[test]
    fn restore_with_stale_index_clamps_to_the_end() {
        let mut roster = roster();
        roster.apply(RosterAction::Restore {
            index: 99,
            record: activity("9", "Wonder Woman"),
        });
        assert_eq!(roster.records().last().map(|a| a.identifier()), Some("9"));
    }

    #[test]
    fn reverting_an_edit_leaves_later_changes_in_place() {
        // edit "2", then delete "3", then the edit's write fails
        let mut roster = roster();
        let previous = roster.get("2").cloned().unwrap();

        let mut edited = activity("2", "Batman");
        edited.duration = Some(90);
        roster.apply(RosterAction::Update(edited));
        roster.apply(RosterAction::Remove("3".to_string()));
        roster.apply(RosterAction::Update(previous.clone()));

        assert_eq!(roster.get("2"), Some(&previous));
        assert!(roster.get("3").is_none());
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn reverting_an_edit_after_the_row_was_deleted_is_a_noop() {
        let mut roster = roster();
        let previous = roster.get("2").cloned().unwrap();
        roster.apply(RosterAction::Remove("2".to_string()));
        roster.apply(RosterAction::Update(previous));
        assert!(roster.get("2").is_none());
        assert_eq!(roster.len(), 2);
    }
}
