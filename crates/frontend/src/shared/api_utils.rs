//! Адрес backend'а для запросов из браузера

/// Порт, на котором по умолчанию слушает backend
const BACKEND_PORT: u16 = 3000;

/// Базовый URL API: тот же хост, что у страницы, порт backend'а.
///
/// Пустая строка, если `window` недоступен (тогда запросы идут
/// относительным путём).
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
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Полный URL для пути вида "/api/..."
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
