//! 회원가입/로그인 페이지

use crate::views::{layout, PageContext};

pub fn signup_form(page: &PageContext) -> String {
    let body = r#"<h3>Sign up on Wanderlust</h3>
<form method="POST" action="/signup" class="auth-form">
<label for="username">Username</label>
<input id="username" name="username" required>
<label for="email">Email</label>
<input id="email" name="email" type="email" required>
<label for="password">Password</label>
<input id="password" name="password" type="password" required>
<button class="btn">Sign up</button>
</form>"#;

    layout::render("Sign up", page, body)
}

pub fn login_form(page: &PageContext) -> String {
    let body = r#"<h3>Login</h3>
<form method="POST" action="/login" class="auth-form">
<label for="username">Username</label>
<input id="username" name="username" required>
<label for="password">Password</label>
<input id="password" name="password" type="password" required>
<button class="btn">Login</button>
</form>"#;

    layout::render("Log in", page, body)
}
