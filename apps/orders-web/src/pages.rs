//! Server-rendered HTML pages
//!
//! Plain `format!`-built HTML; this app has no templating layer.

use axum::response::Html;

use crate::{ORDERS_PATH, ORDER_NEW_PATH};

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
{body}
</body>
</html>"#
    ))
}

/// Landing page with the link into the order flow.
pub fn home() -> Html<String> {
    let body = format!(
        r#"  <h1>Orders</h1>
  <a href="{ORDER_NEW_PATH}">New Order</a>"#
    );
    layout("Orders", &body)
}

/// Order form. When `error` is set the page re-renders with the
/// validation message above the form.
pub fn new_order(error: Option<&str>) -> Html<String> {
    let error_html = match error {
        Some(msg) => format!("  <p class=\"error\">{msg}</p>\n"),
        None => String::new(),
    };
    let body = format!(
        r#"  <h1>New Order</h1>
{error_html}  <form action="{ORDERS_PATH}" method="post">
    <label for="product">Product</label>
    <input type="text" id="product" name="product">
    <button type="submit">Purchase Now</button>
  </form>"#
    );
    layout("New Order", &body)
}

/// Confirmation page shown after a successful submission.
pub fn order_confirm() -> Html<String> {
    layout("Order Confirmed", "  <h1>Order Confirmed</h1>")
}

pub fn error_page(message: &str) -> Html<String> {
    layout("Error", &format!("  <h1>Error</h1>\n  <p>{message}</p>"))
}
