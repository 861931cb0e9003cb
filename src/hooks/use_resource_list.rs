use crate::config::Config;
use crate::model::{ResourceRecord, Roster, RosterAction};
use crate::services::{ApiClient, ApiError};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

impl<T> Reducible for Roster<T>
where
    T: ResourceRecord,
{
    type Action = RosterAction<T>;

    fn reduce(self: Rc<Self>, action: RosterAction<T>) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Working set of one resource view, plus the write paths behind its
/// edit and delete actions.
#[derive(Clone, PartialEq)]
pub struct UseResourceListHandle<T>
where
    T: ResourceRecord,
{
    roster: UseReducerHandle<Roster<T>>,
    client: Rc<ApiClient>,
}

impl<T> UseResourceListHandle<T>
where
    T: ResourceRecord,
{
    pub fn roster(&self) -> &Roster<T> {
        &self.roster
    }

    /// Optimistically replaces the matching record, then writes it back.
    /// A failed write reverts just that record against the working set as
    /// it then stands, so changes made in the meantime survive. An unknown
    /// identifier changes nothing.
    pub fn update(&self, record: T) {
        let previous = match self.roster.get(record.identifier()) {
            Some(existing) => existing.clone(),
            None => {
                log::warn!(
                    "edit for unknown {} id {:?} ignored",
                    T::PATH,
                    record.identifier()
                );
                return;
            }
        };
        self.roster.dispatch(RosterAction::Update(record.clone()));

        let roster = self.roster.clone();
        let client = self.client.clone();
        spawn_local(async move {
            if let Err(err) = client.update(&record).await {
                log::error!("update of {} failed, reverting: {}", T::PATH, err);
                roster.dispatch(RosterAction::Update(previous));
            }
        });
    }

    /// Optimistically removes the matching record, then deletes it on the
    /// server. A failed delete puts just that record back at the position
    /// it held, leaving intervening changes alone.
    pub fn remove(&self, id: String) {
        let index = match self
            .roster
            .records()
            .iter()
            .position(|record| record.identifier() == id)
        {
            Some(index) => index,
            None => {
                log::warn!("delete for unknown {} id {:?} ignored", T::PATH, id);
                return;
            }
        };
        let removed = self.roster.records()[index].clone();
        self.roster.dispatch(RosterAction::Remove(id.clone()));

        let roster = self.roster.clone();
        let client = self.client.clone();
        spawn_local(async move {
            if let Err(err) = client.delete::<T>(&id).await {
                log::error!("delete of {} failed, restoring: {}", T::PATH, err);
                roster.dispatch(RosterAction::Restore {
                    index,
                    record: removed,
                });
            }
        });
    }
}

/// Turns a fetch outcome into the action to apply, if any.
///
/// Failures only log and yield nothing, so whatever the view already
/// rendered stays in place; responses landing after the view unmounted
/// (the flag is set by the effect's cleanup) are dropped the same way.
fn fetch_outcome<T>(
    outcome: Result<Vec<T>, ApiError>,
    cancelled: &Cell<bool>,
) -> Option<RosterAction<T>>
where
    T: ResourceRecord,
{
    if cancelled.get() {
        log::debug!("{} response after unmount dropped", T::PATH);
        return None;
    }
    match outcome {
        Ok(records) => {
            log::info!("fetched {} {}", records.len(), T::PATH);
            Some(RosterAction::Load(records))
        }
        Err(err) => {
            log::error!("failed to fetch {}: {}", T::PATH, err);
            None
        }
    }
}

/// Fetches the collection for `T` once on mount and exposes it as the
/// view's working set.
#[hook]
pub fn use_resource_list<T>() -> UseResourceListHandle<T>
where
    T: ResourceRecord,
{
    let roster = use_reducer(Roster::<T>::new);
    let client = use_memo((), |_| ApiClient::new(Config::new()));

    {
        let roster = roster.clone();
        let client = client.clone();
        use_effect_with((), move |_| {
            let cancelled = Rc::new(Cell::new(false));
            let flag = cancelled.clone();
            spawn_local(async move {
                let outcome = client.list::<T>().await;
                if let Some(action) = fetch_outcome(outcome, &flag) {
                    roster.dispatch(action);
                }
            });
            move || cancelled.set(true)
        });
    }

    UseResourceListHandle { roster, client }
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

    #[test]
    fn failed_refetch_leaves_previous_rows_in_place() {
        let mut roster = Roster::new();
        roster.replace_all(vec![activity("1", "Superman"), activity("2", "Batman")]);
        let before = roster.clone();

        let cancelled = Cell::new(false);
        let outcome: Result<Vec<Activity>, ApiError> =
            Err(ApiError::Request("network down".to_string()));
        if let Some(action) = fetch_outcome(outcome, &cancelled) {
            roster.apply(action);
        }
        assert_eq!(roster, before);
    }

    #[test]
    fn error_status_applies_nothing() {
        let cancelled = Cell::new(false);
        let outcome: Result<Vec<Activity>, ApiError> = Err(ApiError::Status(502));
        assert!(fetch_outcome(outcome, &cancelled).is_none());
    }

    #[test]
    fn response_after_unmount_is_dropped() {
        let cancelled = Cell::new(true);
        let outcome = Ok(vec![activity("1", "Superman")]);
        assert!(fetch_outcome::<Activity>(outcome, &cancelled).is_none());
    }

    #[test]
    fn successful_fetch_replaces_the_working_set() {
        let mut roster = Roster::new();
        roster.replace_all(vec![activity("9", "Stale")]);

        let cancelled = Cell::new(false);
        let outcome = Ok(vec![activity("1", "Superman"), activity("2", "Batman")]);
        let action = fetch_outcome(outcome, &cancelled).unwrap();
        roster.apply(action);

        assert_eq!(roster.len(), 2);
        assert!(roster.get("9").is_none());
    }
}
