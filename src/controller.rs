//! UI events mapped onto remote calls.
//!
//! Every operation follows the same shape: take a ticket under the page
//! lock, release the lock for the network call, then re-lock and commit only
//! if the ticket is still current. A login issues the ticket for its
//! dependent fetch in the same lock scope that commits the session, so a
//! logout can never slip in between.

use crate::generation::{Slot, Ticket};
use crate::navigator::{Navigator, SERVICES_SECTION};
use crate::state::{AppState, Loadable};
use tracing::{debug, error, info, warn};

pub const USER_LOGIN_FAILED: &str = "Login failed: invalid Telegram ID";
pub const ADMIN_LOGIN_FAILED: &str = "Login failed: invalid administrator ID";
pub const USER_SIGNED_OUT: &str = "You have signed out.";
pub const ADMIN_SIGNED_OUT: &str = "You have left the admin panel.";

/// Runs once at start-up: the price list loads straight away when it is the
/// section the page opens on.
pub async fn boot(state: &AppState) {
    let opens_on_services = state.page.lock().await.navigator.is_active(SERVICES_SECTION);
    if opens_on_services {
        fetch_services(state).await;
    }
}

pub async fn navigate(state: &AppState, section: &str) {
    state.page.lock().await.navigator.activate(section);
    if Navigator::is_known(section) {
        info!(section, "section activated");
    } else {
        warn!(section, "unknown section, nothing is active now");
    }
    if section == SERVICES_SECTION {
        fetch_services(state).await;
    }
}

pub async fn fetch_services(state: &AppState) {
    let ticket = state.page.lock().await.begin(Slot::Services);
    let result = state.api.services().await;

    let mut page = state.page.lock().await;
    if !page.is_current(ticket) {
        debug!(generation = ticket.generation(), "discarding stale services response");
        return;
    }
    if let Err(err) = &result {
        error!("failed to load services: {err}");
    }
    page.services = Loadable::from(result);
}

pub async fn login_user(state: &AppState, tg_id: &str) {
    let ticket = state.page.lock().await.begin(Slot::Auth);
    let result = state.api.login(tg_id).await;

    let orders = {
        let mut page = state.page.lock().await;
        if !page.is_current(ticket) {
            debug!("discarding stale user login response");
            return;
        }
        match result {
            Ok(mut identity) => {
                if identity.id.is_empty() {
                    identity.id = tg_id.to_string();
                }
                info!(user = %identity.id, "user signed in");
                page.session.sign_in_user(identity);
                page.forget(Slot::Stats);
                page.begin(Slot::Orders)
            }
            Err(err) => {
                warn!("user login rejected: {err}");
                page.alert = Some(USER_LOGIN_FAILED.to_string());
                return;
            }
        }
    };

    load_user_orders(state, orders, tg_id).await;
}

pub async fn login_admin(state: &AppState, admin_id: &str) {
    let ticket = state.page.lock().await.begin(Slot::Auth);
    let result = state.api.admin_login(admin_id).await;

    let stats = {
        let mut page = state.page.lock().await;
        if !page.is_current(ticket) {
            debug!("discarding stale admin login response");
            return;
        }
        if let Err(err) = result {
            warn!("admin login rejected: {err}");
            page.alert = Some(ADMIN_LOGIN_FAILED.to_string());
            return;
        }
        info!(admin = admin_id, "admin signed in");
        page.session.sign_in_admin(admin_id);
        page.forget(Slot::Orders);
        page.begin(Slot::Stats)
    };

    load_admin_stats(state, stats).await;
}

pub async fn fetch_user_orders(state: &AppState, user_id: &str) {
    let ticket = state.page.lock().await.begin(Slot::Orders);
    load_user_orders(state, ticket, user_id).await;
}

async fn load_user_orders(state: &AppState, ticket: Ticket, user_id: &str) {
    let result = state.api.user_orders(user_id).await;

    let mut page = state.page.lock().await;
    if !page.is_current(ticket) {
        debug!(generation = ticket.generation(), "discarding stale orders response");
        return;
    }
    if let Err(err) = &result {
        error!("failed to load orders for {user_id}: {err}");
    }
    page.orders = Loadable::from(result);
}

pub async fn fetch_admin_stats(state: &AppState) {
    let ticket = state.page.lock().await.begin(Slot::Stats);
    load_admin_stats(state, ticket).await;
}

async fn load_admin_stats(state: &AppState, ticket: Ticket) {
    let result = state.api.admin_stats().await;

    let mut page = state.page.lock().await;
    if !page.is_current(ticket) {
        debug!(generation = ticket.generation(), "discarding stale stats response");
        return;
    }
    if let Err(err) = &result {
        error!("failed to load stats: {err}");
    }
    page.stats = Loadable::from(result);
}

pub async fn logout_user(state: &AppState) {
    state.page.lock().await.sign_out(USER_SIGNED_OUT);
    info!("user signed out");
}

pub async fn logout_admin(state: &AppState) {
    state.page.lock().await.sign_out(ADMIN_SIGNED_OUT);
    info!("admin signed out");
}
