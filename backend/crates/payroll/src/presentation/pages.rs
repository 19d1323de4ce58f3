//! HTML pages served by the portal

use axum::Extension;
use axum::response::Html;

use crate::domain::entity::SessionUser;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Payroll Portal</title>
</head>
<body>
  <h1>Payroll Portal</h1>
  <p><a href="/login">Sign in</a> to view employees and payslips.</p>
</body>
</html>
"#;

const LOGIN_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Sign in - Payroll Portal</title>
</head>
<body>
  <h1>Sign in</h1>
  <form id="login">
    <input name="email" type="email" placeholder="Email" required>
    <input name="password" type="password" placeholder="Password" required>
    <button type="submit">Sign in</button>
  </form>
  <p id="message"></p>
  <script>
    document.getElementById("login").addEventListener("submit", async (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      const res = await fetch("/login", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ email: form.get("email"), password: form.get("password") }),
      });
      const body = await res.json();
      if (res.ok) {
        window.location.href = "/work";
      } else {
        document.getElementById("message").textContent = body.error;
      }
    });
  </script>
</body>
</html>
"#;

const WORK_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Workspace - Payroll Portal</title>
</head>
<body>
  <h1>Workspace</h1>
  <p>Signed in as <strong id="email">{email}</strong> ({role}). <a href="/logout">Sign out</a></p>
  <h2>Employees</h2>
  <ul id="employees"></ul>
  <h2>Payslips</h2>
  <ul id="payslips"></ul>
  <script>
    async function load(path, target, label) {
      const res = await fetch(path);
      if (!res.ok) return;
      const rows = await res.json();
      const list = document.getElementById(target);
      for (const row of rows) {
        const item = document.createElement("li");
        item.textContent = label(row);
        list.appendChild(item);
      }
    }
    load("/api/employees", "employees", (e) => `${e.name} ${e.position ?? ""}`);
    load("/api/payslips", "payslips", (p) => `${p.employee_id}: ${p.amount}`);
  </script>
</body>
</html>
"#;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /login
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_HTML)
}

/// GET /work
pub async fn work_page(Extension(user): Extension<SessionUser>) -> Html<String> {
    Html(
        WORK_HTML
            .replace("{email}", &escape_html(&user.email))
            .replace("{role}", user.role.code()),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
