//! Pure projection of [`PageState`] into a view description.
//!
//! Nothing here touches the network or the lock; the same state always
//! yields the same view.

use crate::models::{Order, Service, Stats};
use crate::navigator::SECTIONS;
use crate::state::{Loadable, PageState};
use serde::Serialize;

pub const SERVICES_LOADING: &str = "Loading services...";
pub const SERVICES_EMPTY: &str = "The price list is empty for now.";
pub const SERVICES_ERROR: &str = "Something went wrong while loading the price list.";
pub const ORDERS_LOADING: &str = "Loading orders...";
pub const ORDERS_EMPTY: &str = "You have no orders yet.";
pub const ORDERS_ERROR: &str = "Something went wrong while loading your orders.";
pub const STAT_IDLE: &str = "-";
pub const STAT_LOADING: &str = "...";
pub const STAT_ERROR: &str = "Error";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub nav: Vec<NavLinkView>,
    pub sections: Vec<SectionView>,
    pub services: ContainerView<ServiceCard>,
    pub user: UserPanelView,
    pub admin: AdminPanelView,
    pub alert: Option<String>,
}

impl PageView {
    pub fn section_active(&self, id: &str) -> bool {
        self.sections.iter().any(|section| section.id == id && section.active)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLinkView {
    pub section: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub id: String,
    pub active: bool,
}

/// What a container shows. Placeholders carry their fixed message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ContainerView<T> {
    Idle,
    Loading { message: String },
    Empty { message: String },
    Error { message: String },
    Items { items: Vec<T> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCard {
    pub name: String,
    pub description: String,
    pub price_usd: String,
    pub price_btc: String,
    pub price_stars: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCard {
    pub order_id: String,
    pub service_name: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPanelView {
    pub login_form_visible: bool,
    pub dashboard_visible: bool,
    pub user_name: Option<String>,
    pub orders: ContainerView<OrderCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminPanelView {
    pub login_form_visible: bool,
    pub dashboard_visible: bool,
    pub stats_users: String,
    pub stats_orders: String,
}

pub fn build_view(page: &PageState) -> PageView {
    let nav = SECTIONS
        .iter()
        .map(|(id, label)| NavLinkView {
            section: id.to_string(),
            label: label.to_string(),
            active: page.navigator.is_active(id),
        })
        .collect();
    let sections = SECTIONS
        .iter()
        .map(|(id, _)| SectionView {
            id: id.to_string(),
            active: page.navigator.is_active(id),
        })
        .collect();

    let session = &page.session;
    let user_dashboard = session.user_dashboard_visible();
    let admin_dashboard = session.admin_dashboard_visible();

    let (stats_users, stats_orders) = stat_values(&page.stats);

    PageView {
        nav,
        sections,
        services: container(
            &page.services,
            [SERVICES_LOADING, SERVICES_EMPTY, SERVICES_ERROR],
            service_card,
        ),
        user: UserPanelView {
            login_form_visible: !user_dashboard,
            dashboard_visible: user_dashboard,
            user_name: user_dashboard
                .then(|| session.current_user().map(|user| user.display_name().to_string()))
                .flatten(),
            orders: container(
                &page.orders,
                [ORDERS_LOADING, ORDERS_EMPTY, ORDERS_ERROR],
                order_card,
            ),
        },
        admin: AdminPanelView {
            login_form_visible: !admin_dashboard,
            dashboard_visible: admin_dashboard,
            stats_users,
            stats_orders,
        },
        alert: page.alert.clone(),
    }
}

/// `messages` is `[loading, empty, error]`. Every failure kind collapses
/// into the one error message.
fn container<T, C>(
    state: &Loadable<Vec<T>>,
    messages: [&str; 3],
    card: impl Fn(&T) -> C,
) -> ContainerView<C> {
    let [loading, empty, error] = messages;
    match state {
        Loadable::Idle => ContainerView::Idle,
        Loadable::Loading => ContainerView::Loading {
            message: loading.to_string(),
        },
        Loadable::Ready(items) if items.is_empty() => ContainerView::Empty {
            message: empty.to_string(),
        },
        Loadable::Ready(items) => ContainerView::Items {
            items: items.iter().map(card).collect(),
        },
        Loadable::Failed(_) => ContainerView::Error {
            message: error.to_string(),
        },
    }
}

fn stat_values(stats: &Loadable<Stats>) -> (String, String) {
    match stats {
        Loadable::Idle => (STAT_IDLE.to_string(), STAT_IDLE.to_string()),
        Loadable::Loading => (STAT_LOADING.to_string(), STAT_LOADING.to_string()),
        Loadable::Ready(stats) => (stats.user_count.to_string(), stats.order_count.to_string()),
        Loadable::Failed(_) => (STAT_ERROR.to_string(), STAT_ERROR.to_string()),
    }
}

fn service_card(service: &Service) -> ServiceCard {
    ServiceCard {
        name: service.name.clone(),
        description: service.description.clone(),
        price_usd: service.price_usd.to_string(),
        price_btc: service.price_btc.to_string(),
        price_stars: service.price_stars.to_string(),
    }
}

fn order_card(order: &Order) -> OrderCard {
    OrderCard {
        order_id: order.order_id.clone(),
        service_name: order.service_name.clone(),
        status: order.status.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FetchError;
    use crate::models::Identity;

    fn one_service() -> Vec<Service> {
        vec![Service {
            name: "A".to_string(),
            description: "d".to_string(),
            price_usd: 1.0,
            price_btc: 0.01,
            price_stars: 5.0,
        }]
    }

    #[test]
    fn exactly_the_active_section_and_link_are_marked() {
        let page = PageState::new("account");
        let view = build_view(&page);
        let active_links: Vec<_> = view.nav.iter().filter(|l| l.active).collect();
        assert_eq!(active_links.len(), 1);
        assert_eq!(active_links[0].section, "account");
        assert!(view.section_active("account"));
        assert_eq!(view.sections.iter().filter(|s| s.active).count(), 1);
    }

    #[test]
    fn unknown_section_marks_nothing() {
        let page = PageState::new("nowhere");
        let view = build_view(&page);
        assert!(view.nav.iter().all(|link| !link.active));
        assert!(view.sections.iter().all(|section| !section.active));
    }

    #[test]
    fn empty_list_shows_empty_message_not_error() {
        let mut page = PageState::new("services");
        page.services = Loadable::Ready(Vec::new());
        assert_eq!(
            build_view(&page).services,
            ContainerView::Empty {
                message: SERVICES_EMPTY.to_string()
            }
        );
    }

    #[test]
    fn one_service_becomes_one_card_with_all_values() {
        let mut page = PageState::new("services");
        page.services = Loadable::Ready(one_service());
        let ContainerView::Items { items } = build_view(&page).services else {
            panic!("expected items");
        };
        assert_eq!(
            items,
            vec![ServiceCard {
                name: "A".to_string(),
                description: "d".to_string(),
                price_usd: "1".to_string(),
                price_btc: "0.01".to_string(),
                price_stars: "5".to_string(),
            }]
        );
    }

    #[test]
    fn http_and_transport_failures_look_the_same() {
        let mut page = PageState::new("services");
        page.services = Loadable::Failed(FetchError::Http { status: 502 });
        let http = build_view(&page).services;
        page.services = Loadable::Failed(FetchError::Transport("refused".into()));
        let transport = build_view(&page).services;
        assert_eq!(http, transport);
        assert_eq!(
            http,
            ContainerView::Error {
                message: SERVICES_ERROR.to_string()
            }
        );
    }

    #[test]
    fn anonymous_page_shows_both_login_forms() {
        let view = build_view(&PageState::new("home"));
        assert!(view.user.login_form_visible);
        assert!(!view.user.dashboard_visible);
        assert!(view.user.user_name.is_none());
        assert!(view.admin.login_form_visible);
        assert!(!view.admin.dashboard_visible);
        assert_eq!(view.admin.stats_users, STAT_IDLE);
    }

    #[test]
    fn signed_in_user_sees_name_or_id() {
        let mut page = PageState::new("account");
        page.session.sign_in_user(Identity {
            id: "77".to_string(),
            name: None,
        });
        page.orders = Loadable::Loading;
        let view = build_view(&page);
        assert!(view.user.dashboard_visible);
        assert!(!view.user.login_form_visible);
        assert_eq!(view.user.user_name.as_deref(), Some("77"));
        assert_eq!(
            view.user.orders,
            ContainerView::Loading {
                message: ORDERS_LOADING.to_string()
            }
        );
    }

    #[test]
    fn admin_stats_follow_fetch_state() {
        let mut page = PageState::new("admin");
        page.session.sign_in_admin("root");
        page.stats = Loadable::Loading;
        assert_eq!(build_view(&page).admin.stats_orders, STAT_LOADING);
        page.stats = Loadable::Failed(FetchError::Malformed("eof".into()));
        let view = build_view(&page);
        assert_eq!(view.admin.stats_users, STAT_ERROR);
        assert_eq!(view.admin.stats_orders, STAT_ERROR);
        assert!(view.admin.dashboard_visible);
        assert!(view.user.login_form_visible);
    }

    #[test]
    fn container_view_serializes_with_state_tag() {
        let value = serde_json::to_value(ContainerView::<OrderCard>::Empty {
            message: ORDERS_EMPTY.to_string(),
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "state": "empty", "message": ORDERS_EMPTY })
        );
    }
}
