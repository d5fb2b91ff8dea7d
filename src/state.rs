use crate::api::CatalogApi;
use crate::errors::FetchError;
use crate::generation::{Generations, Slot, Ticket};
use crate::models::{Order, Service, Stats};
use crate::navigator::Navigator;
use crate::session::Session;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub api: CatalogApi,
    pub page: Arc<Mutex<PageState>>,
}

impl AppState {
    pub fn new(api: CatalogApi, start_section: &str) -> Self {
        Self {
            api,
            page: Arc::new(Mutex::new(PageState::new(start_section))),
        }
    }
}

/// Content of one container.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(FetchError),
}

impl<T> From<Result<T, FetchError>> for Loadable<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(err) => Loadable::Failed(err),
        }
    }
}

/// Everything the page shows. Written only from controller transitions.
#[derive(Debug)]
pub struct PageState {
    pub navigator: Navigator,
    pub session: Session,
    pub services: Loadable<Vec<Service>>,
    pub orders: Loadable<Vec<Order>>,
    pub stats: Loadable<Stats>,
    pub alert: Option<String>,
    generations: Generations,
}

impl PageState {
    pub fn new(start_section: &str) -> Self {
        Self {
            navigator: Navigator::new(start_section),
            session: Session::default(),
            services: Loadable::Idle,
            orders: Loadable::Idle,
            stats: Loadable::Idle,
            alert: None,
            generations: Generations::default(),
        }
    }

    /// Starts a request for `slot`: supersedes older tickets and puts the
    /// matching container into its loading state.
    pub fn begin(&mut self, slot: Slot) -> Ticket {
        match slot {
            Slot::Services => self.services = Loadable::Loading,
            Slot::Orders => self.orders = Loadable::Loading,
            Slot::Stats => self.stats = Loadable::Loading,
            Slot::Auth => {}
        }
        self.generations.issue(slot)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generations.is_current(ticket)
    }

    /// Drops whatever the other role had in flight or on screen.
    pub fn forget(&mut self, slot: Slot) {
        self.generations.invalidate(slot);
        match slot {
            Slot::Services => self.services = Loadable::Idle,
            Slot::Orders => self.orders = Loadable::Idle,
            Slot::Stats => self.stats = Loadable::Idle,
            Slot::Auth => {}
        }
    }

    /// Logout transition. Pending logins and session-bound fetches become
    /// stale so they cannot write after this point.
    pub fn sign_out(&mut self, alert: &str) {
        self.session.clear();
        self.forget(Slot::Auth);
        self.forget(Slot::Orders);
        self.forget(Slot::Stats);
        self.alert = Some(alert.to_string());
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }
}
