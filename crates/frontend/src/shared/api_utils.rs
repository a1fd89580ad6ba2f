//! Backend location for API requests
//!
//! The console is served separately from the API; the API listens on port
//! 3000 of the same host the page was loaded from.

const API_PORT: u16 = 3000;

/// Base URL like "http://localhost:3000", or an empty string outside a browser window
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    join_base(&protocol, &hostname, API_PORT)
}

/// Full API URL for a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn join_base(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_base() {
        assert_eq!(join_base("http:", "localhost", 3000), "http://localhost:3000");
        assert_eq!(join_base("https:", "admin.example.com", API_PORT), "https://admin.example.com:3000");
    }
}
