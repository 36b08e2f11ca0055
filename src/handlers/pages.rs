//! Static HTML pages

use axum::response::Html;

pub async fn landing() -> Html<&'static str> {
    Html(include_str!("../../templates/landing.html"))
}

pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../templates/home.html"))
}

pub async fn manual() -> Html<&'static str> {
    Html(include_str!("../../templates/manual.html"))
}

pub async fn csv() -> Html<&'static str> {
    Html(include_str!("../../templates/csv.html"))
}
