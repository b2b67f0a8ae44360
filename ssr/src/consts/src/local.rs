use once_cell::sync::Lazy;
use reqwest::Url;

pub static API_BASE_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("http://localhost:8000/api/v1/").unwrap());
