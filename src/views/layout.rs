//! 공통 레이아웃

use crate::session::FlashKind;
use crate::utils::string_utils::escape_html;
use crate::views::PageContext;

/// 페이지 본문을 공통 레이아웃으로 감쌉니다.
pub fn render(title: &str, page: &PageContext, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Wanderlust</title>
</head>
<body>
{navbar}
<main class="container">
{flashes}
{body}
</main>
<footer class="footer">&copy; Wanderlust</footer>
</body>
</html>"#,
        title = escape_html(title),
        navbar = navbar(page),
        flashes = flashes(page),
        body = body,
    )
}

fn navbar(page: &PageContext) -> String {
    let account = match &page.user {
        Some(user) => format!(
            r#"<span class="nav-user">{}</span> <a href="/logout">Log out</a>"#,
            escape_html(&user.username)
        ),
        None => r#"<a href="/signup">Sign up</a> <a href="/login">Log in</a>"#.to_string(),
    };

    format!(
        r#"<nav class="navbar">
<a class="brand" href="/listings">Wanderlust</a>
<a href="/listings">All Listings</a>
<a href="/listings/new">Airbnb your home</a>
<div class="nav-account">{account}</div>
</nav>"#
    )
}

fn flashes(page: &PageContext) -> String {
    page.flashes
        .iter()
        .map(|flash| {
            let class = match flash.kind {
                FlashKind::Success => "alert alert-success",
                FlashKind::Error => "alert alert-danger",
            };
            format!(
                r#"<div class="{}" role="alert">{}</div>"#,
                class,
                escape_html(&flash.message)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FlashMessage;

    #[test]
    fn test_flash_messages_are_escaped() {
        let page = PageContext {
            user: None,
            flashes: vec![FlashMessage {
                kind: FlashKind::Error,
                message: "<b>bad</b>".to_string(),
            }],
        };

        let html = render("Test", &page, "<p>body</p>");

        assert!(html.contains("alert-danger"));
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"href="/login""#));
    }
}
