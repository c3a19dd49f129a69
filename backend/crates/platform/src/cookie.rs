//! Cookie Management Infrastructure
//!
//! Cookies without `Max-Age`/`Expires` are session cookies: the browser
//! drops them when the browsing session ends. That is the lifetime the
//! session-scoped keys need.

use axum::http::{HeaderMap, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie attributes
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    /// `None` makes a session cookie
    pub max_age_secs: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Session cookie named `name`
    pub fn session(name: impl Into<String>, secure: bool, same_site: SameSite) -> Self {
        Self {
            name: name.into(),
            secure,
            same_site,
            ..Self::default()
        }
    }

    /// Build Set-Cookie header value
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut cookie = format!("{}={}", self.name, value);
        self.push_attributes(&mut cookie);

        if let Some(max_age) = self.max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }

        cookie
    }

    /// Build Set-Cookie header that deletes the cookie
    pub fn build_delete_cookie(&self) -> String {
        let mut cookie = format!("{}=", self.name);
        self.push_attributes(&mut cookie);
        cookie.push_str("; Max-Age=0");
        cookie
    }

    fn push_attributes(&self, cookie: &mut String) {
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        cookie.push_str(&format!("; Path={}", self.path));
    }
}

/// Extract a cookie value from headers
///
/// Looks through every `Cookie` header; the first match wins.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}
