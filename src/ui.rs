use crate::view::{ContainerView, OrderCard, PageView, ServiceCard};
use askama_escape::Html;

pub fn render_page(view: &PageView) -> String {
    PAGE_HTML
        .replace("{{NAV}}", &render_nav(view))
        .replace("{{HOME_CLASS}}", section_class(view, "home"))
        .replace("{{SERVICES_CLASS}}", section_class(view, "services"))
        .replace("{{ACCOUNT_CLASS}}", section_class(view, "account"))
        .replace("{{ADMIN_CLASS}}", section_class(view, "admin"))
        .replace("{{LOGIN_DISPLAY}}", display(view.user.login_form_visible))
        .replace("{{USER_DASHBOARD_DISPLAY}}", display(view.user.dashboard_visible))
        .replace("{{ADMIN_LOGIN_DISPLAY}}", display(view.admin.login_form_visible))
        .replace("{{ADMIN_DASHBOARD_DISPLAY}}", display(view.admin.dashboard_visible))
        .replace("{{STATS_USERS}}", &escape(&view.admin.stats_users))
        .replace("{{STATS_ORDERS}}", &escape(&view.admin.stats_orders))
        .replace(
            "{{USER_NAME}}",
            &escape(view.user.user_name.as_deref().unwrap_or_default()),
        )
        .replace(
            "{{SERVICES_GRID}}",
            &render_container(&view.services, "error-message", render_service),
        )
        .replace(
            "{{USER_ORDERS}}",
            &render_container(&view.user.orders, "error", render_order),
        )
        .replace("{{ALERT}}", &render_alert(view.alert.as_deref()))
}

/// Escapes text for element content and quoted attributes. Braces are
/// escaped too so remote data can never form a template placeholder.
pub fn escape(text: &str) -> String {
    askama_escape::escape(text, Html)
        .to_string()
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

fn render_nav(view: &PageView) -> String {
    view.nav
        .iter()
        .map(|link| {
            format!(
                r#"<a class="nav-link{active}" data-section="{section}" href="/section/{section}">{label}</a>"#,
                active = if link.active { " active" } else { "" },
                section = escape(&link.section),
                label = escape(&link.label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}

fn section_class(view: &PageView, id: &str) -> &'static str {
    if view.section_active(id) {
        "section active"
    } else {
        "section"
    }
}

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

fn render_container<T>(
    container: &ContainerView<T>,
    error_class: &str,
    item: fn(&T) -> String,
) -> String {
    match container {
        ContainerView::Idle => String::new(),
        ContainerView::Loading { message } => {
            format!(r#"<p class="loading-message">{}</p>"#, escape(message))
        }
        ContainerView::Empty { message } => {
            format!(r#"<p class="empty-list-message">{}</p>"#, escape(message))
        }
        ContainerView::Error { message } => {
            format!(r#"<p class="{error_class}">{}</p>"#, escape(message))
        }
        ContainerView::Items { items } => items.iter().map(item).collect(),
    }
}

fn render_service(card: &ServiceCard) -> String {
    format!(
        r#"<div class="service-item">
          <h3>{name}</h3>
          <p>{description}</p>
          <div class="prices">
            <span>&#x1F4B2; {usd} USD</span>
            <span>&#x20BF; {btc} BTC</span>
            <span>&#x2B50; {stars} STARS</span>
          </div>
        </div>
        "#,
        name = escape(&card.name),
        description = escape(&card.description),
        usd = escape(&card.price_usd),
        btc = escape(&card.price_btc),
        stars = escape(&card.price_stars),
    )
}

fn render_order(card: &OrderCard) -> String {
    format!(
        r#"<div class="order-item">
            <p><strong>Order #{id}</strong></p>
            <p>Service: {service}</p>
            <p>Status: <span>{status}</span></p>
          </div>
          "#,
        id = escape(&card.order_id),
        service = escape(&card.service_name),
        status = escape(&card.status),
    )
}

fn render_alert(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(
            r#"<dialog id="alert" class="alert" open>
      <p>{}</p>
      <form method="dialog"><button type="submit">OK</button></form>
    </dialog>"#,
            escape(message)
        ),
        None => String::new(),
    }
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Services Catalog</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    nav {
      display: flex;
      gap: 6px;
      padding: 6px;
      width: fit-content;
      margin: 0 auto 24px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .nav-link {
      border-radius: 999px;
      padding: 8px 14px;
      font-weight: 600;
      color: #6b645d;
      text-decoration: none;
    }

    .nav-link.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    main.section {
      display: none;
      width: min(860px, 100%);
      margin: 0 auto;
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
    }

    main.section.active {
      display: grid;
      gap: 24px;
    }

    h1, h2 {
      font-family: "Fraunces", "Georgia", serif;
      margin: 0;
    }

    .services-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .service-item, .order-item {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .prices {
      display: grid;
      gap: 4px;
      color: var(--accent-2);
      font-weight: 600;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    input {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 12px 14px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    .error-message, .error {
      color: #c63b2b;
    }

    .loading-message, .empty-list-message {
      color: #6f6a65;
    }

    .alert {
      border: none;
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 24px;
    }
  </style>
</head>
<body>
  <nav>
      {{NAV}}
  </nav>

  <main id="home" class="{{HOME_CLASS}}">
    <h1>Services Catalog</h1>
    <p>Browse the price list, follow your orders, or sign in to the admin panel.</p>
  </main>

  <main id="services" class="{{SERVICES_CLASS}}">
    <h2>Price list</h2>
    <div class="services-grid">
      {{SERVICES_GRID}}
    </div>
  </main>

  <main id="account" class="{{ACCOUNT_CLASS}}">
    <div id="login-form-container" style="display: {{LOGIN_DISPLAY}}">
      <h2>Sign in</h2>
      <form id="login-form" method="post" action="/login">
        <input id="tg-id" name="tg_id" placeholder="Telegram ID" required />
        <button type="submit">Sign in</button>
      </form>
    </div>
    <div id="user-dashboard" style="display: {{USER_DASHBOARD_DISPLAY}}">
      <h2>Hello, <span id="user-name">{{USER_NAME}}</span></h2>
      <div id="user-orders-container">
        {{USER_ORDERS}}
      </div>
      <form method="post" action="/logout">
        <button id="logout-button" type="submit">Sign out</button>
      </form>
    </div>
  </main>

  <main id="admin" class="{{ADMIN_CLASS}}">
    <div id="admin-login-container" style="display: {{ADMIN_LOGIN_DISPLAY}}">
      <h2>Admin panel</h2>
      <form id="admin-login-form" method="post" action="/admin/login">
        <input id="admin-id" name="admin_id" placeholder="Administrator ID" required />
        <button type="submit">Sign in</button>
      </form>
    </div>
    <div id="admin-dashboard" style="display: {{ADMIN_DASHBOARD_DISPLAY}}">
      <h2>Statistics</h2>
      <div class="stat">
        <span class="label">Users</span>
        <span id="stats-users" class="value">{{STATS_USERS}}</span>
      </div>
      <div class="stat">
        <span class="label">Orders</span>
        <span id="stats-orders" class="value">{{STATS_ORDERS}}</span>
      </div>
      <form method="post" action="/admin/logout">
        <button id="admin-logout-button" type="submit">Leave admin panel</button>
      </form>
    </div>
  </main>

  {{ALERT}}
</body>
</html>
"#;
