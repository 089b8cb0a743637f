use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::roster::source::{load_roster, RosterSource};
use crate::roster::DuplicateIdPolicy;
use crate::session::Event;

/// Channel carrying events to a [`Session::run`](crate::session::Session::run) loop.
pub fn event_queue() -> (Sender<Event>, Receiver<Event>) {
    unbounded()
}

/// Read a roster on a worker thread and post the outcome as one event.
///
/// Until that event is dispatched the session keeps filtering against its
/// previous roster.
pub fn spawn_refresh<S>(source: S, policy: DuplicateIdPolicy, events: Sender<Event>) -> JoinHandle<()>
where
    S: RosterSource + Send + 'static,
{
    thread::spawn(move || {
        let event = match load_roster(&source, policy) {
            Ok(decoded) => Event::RosterRefreshed(decoded.roster),
            Err(err) => Event::RefreshFailed(err),
        };
        if events.send(event).is_err() {
            log::debug!("roster refresh from {} finished after the session closed", source.describe());
        }
    })
}
