use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, BasicCredentials},
        session::AuthSession,
    },
    service::auth::CredentialStore,
};
use axum::http::{header, HeaderMap, HeaderValue};
use base64::{engine::general_purpose::STANDARD, Engine};
use test_utils::builder::TestBuilder;


fn credentials() -> CredentialStore {
    CredentialStore::parse("user.alice = secret,admin\nuser.bob = hunter2").unwrap()
}

fn basic_header(user: &str, password: &str) -> HeaderValue {
    let encoded = STANDARD.encode(format!("{}:{}", user, password));
    HeaderValue::from_str(&format!("Basic {}", encoded)).unwrap()
}

fn headers_with(value: HeaderValue) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, value);
    headers
}
