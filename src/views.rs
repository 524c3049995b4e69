//! HTML rendering for site views
//!
//! Links are generated by route name through the route table, so page
//! bodies never repeat path literals.

use crate::config::Config;
use crate::router::RouteTable;
use crate::site::{self, Handshake, View};
use std::fmt::Write;

/// Render a full HTML document for a view
pub fn render(view: View, table: &RouteTable<View>, config: &Config) -> String {
    let (title, body) = match view {
        View::LandingPage => ("Home".to_string(), landing_page(table)),
        View::GetStarted => ("Get started".to_string(), get_started(table)),
        View::ProtocolOverview => ("Protocol".to_string(), protocol_overview(table)),
        View::Handshake(handshake) => (handshake.route_name().to_string(), handshake_page(handshake)),
        View::LibraryOverview => ("Library".to_string(), library_overview(table)),
    };

    layout(&title, &body, table, config)
}

/// Render the page shown for paths with no matching route
pub fn render_not_found(path: &str, table: &RouteTable<View>, config: &Config) -> String {
    let mut body = format!(
        "<h1>Page not found</h1>\n<p>Nothing lives at <code>{}</code>.</p>\n",
        escape_html(path)
    );
    if let Some(home) = link(table, site::LANDING_PAGE, "Back to the home page") {
        let _ = writeln!(body, "<p>{}</p>", home);
    }

    layout("Not found", &body, table, config)
}

fn layout(title: &str, body: &str, table: &RouteTable<View>, config: &Config) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{site} - {title}</title>\n</head>\n<body>\n{nav}<main>\n{body}</main>\n</body>\n</html>\n",
        site = escape_html(&config.site_title),
        title = escape_html(title),
        nav = navigation(table),
        body = body,
    )
}

fn navigation(table: &RouteTable<View>) -> String {
    let mut nav = String::from("<nav>\n<ul>\n");
    for (name, label) in [
        (site::LANDING_PAGE, "Home"),
        (site::GET_STARTED, "Get started"),
        (site::PROTOCOL_OVERVIEW, "Protocol"),
        (site::LIBRARY_OVERVIEW, "Library"),
    ] {
        if let Some(a) = link(table, name, label) {
            let _ = writeln!(nav, "<li>{}</li>", a);
        }
    }
    nav.push_str("</ul>\n</nav>\n");
    nav
}

/// Anchor to a named route, or `None` when the table lacks it
fn link(table: &RouteTable<View>, name: &str, label: &str) -> Option<String> {
    match table.resolve_by_name(name) {
        Ok(path) => Some(format!(
            "<a href=\"{}\">{}</a>",
            escape_html(path),
            escape_html(label)
        )),
        Err(e) => {
            tracing::warn!("Skipping link: {}", e);
            None
        }
    }
}

fn handshake_list(table: &RouteTable<View>) -> String {
    let mut list = String::from("<ul>\n");
    for route in table.iter() {
        if let View::Handshake(handshake) = route.view {
            if let Some(a) = link(table, &route.name, handshake.route_name()) {
                let _ = writeln!(list, "<li>{}</li>", a);
            }
        }
    }
    list.push_str("</ul>\n");
    list
}

fn landing_page(table: &RouteTable<View>) -> String {
    let mut body = String::from(
        "<h1>Disco</h1>\n<p>A protocol framework for building secure channels and \
         cryptographic handshakes, based on the Noise protocol framework and Strobe.</p>\n",
    );
    if let Some(a) = link(table, site::GET_STARTED, "Get started") {
        let _ = writeln!(body, "<p>{}</p>", a);
    }
    body
}

fn get_started(table: &RouteTable<View>) -> String {
    let mut body = String::from(
        "<h1>Get started</h1>\n<p>Pick a handshake pattern that matches what each peer \
         knows about the other, generate static key pairs where the pattern needs them, \
         then wrap your connection in the handshake.</p>\n",
    );
    if let Some(a) = link(table, site::PROTOCOL_OVERVIEW, "Choosing a handshake") {
        let _ = writeln!(body, "<p>{}</p>", a);
    }
    body
}

fn protocol_overview(table: &RouteTable<View>) -> String {
    format!(
        "<h1>Protocol</h1>\n<p>A handshake pattern describes which keys are exchanged and \
         which Diffie-Hellman operations are performed. The first letter describes the \
         initiator's static key, the second the responder's: N for none, K for known in \
         advance, X for transmitted during the handshake.</p>\n<h2>Handshakes</h2>\n{}",
        handshake_list(table)
    )
}

fn handshake_page(handshake: Handshake) -> String {
    let name = escape_html(handshake.route_name());
    match handshake.pattern() {
        Some(pattern) => {
            let kind = if pattern.is_one_way() { "One-way" } else { "Interactive" };
            format!(
                "<h1>{}</h1>\n<p><em>{} pattern.</em> {}</p>\n<pre>{}</pre>\n",
                name,
                kind,
                escape_html(pattern.description),
                escape_html(&pattern.notation())
            )
        }
        None => format!(
            "<h1>{}</h1>\n<p>An unauthenticated handshake whose transcript is verified \
             out-of-band once the handshake completes.</p>\n",
            name
        ),
    }
}

fn library_overview(table: &RouteTable<View>) -> String {
    let mut body = String::from(
        "<h1>Library</h1>\n<p>libdisco implements the handshakes below on top of plain \
         network connections, with a symmetric API for hashing, key derivation and \
         authenticated encryption.</p>\n",
    );
    body.push_str(&handshake_list(table));
    body
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
