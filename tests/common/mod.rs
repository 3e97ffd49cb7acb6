//! HTTP 통합 테스트 공용 도우미
//!
//! 브라우저처럼 세션 쿠키를 들고 다니는 [`Browser`]와 요청 전송 매크로,
//! 리포지토리 호출 횟수를 세는 [`CountingListings`]를 제공합니다.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::test::{self, TestRequest};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use wanderlust::core::errors::AppError;
use wanderlust::domain::entities::{Listing, ListingFields};
use wanderlust::repositories::{InMemoryListingRepository, ListingRepository};

pub const SESSION_COOKIE: &str = "wanderlust.sid";
pub const PASSWORD: &str = "secret123";

/// 세션 쿠키를 기억하는 테스트 클라이언트
#[derive(Debug, Default)]
pub struct Browser {
    cookie: Option<Cookie<'static>>,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> TestRequest {
        self.attach(TestRequest::get().uri(path))
    }

    pub fn post_form(&self, path: &str, form: &[(&str, &str)]) -> TestRequest {
        self.attach(TestRequest::post().uri(path).set_form(form))
    }

    /// 응답이 새 세션 쿠키를 발급했으면 이후 요청에 사용하고,
    /// 쿠키를 지우라고 하면 잊어버립니다.
    pub fn remember<B>(&mut self, res: &ServiceResponse<B>) {
        if let Some(cookie) = session_cookie(res) {
            self.cookie = (!cookie.value().is_empty()).then_some(cookie);
        }
    }

    pub fn cookie_value(&self) -> Option<String> {
        self.cookie.as_ref().map(|cookie| cookie.value().to_string())
    }

    fn attach(&self, req: TestRequest) -> TestRequest {
        match &self.cookie {
            Some(cookie) => req.cookie(cookie.clone()),
            None => req,
        }
    }
}

/// 요청을 보내고 응답의 세션 쿠키를 브라우저에 기록합니다.
#[macro_export]
macro_rules! send {
    ($app:expr, $browser:expr, $req:expr) => {{
        let res = actix_web::test::call_service(&$app, $req.to_request()).await;
        $browser.remember(&res);
        res
    }};
}

/// 새 사용자로 가입합니다. 가입하면 바로 로그인 상태가 됩니다.
#[macro_export]
macro_rules! signup {
    ($app:expr, $browser:expr, $username:expr) => {{
        let email = format!("{}@example.com", $username);
        let form = [
            ("username", $username),
            ("email", email.as_str()),
            ("password", $crate::common::PASSWORD),
        ];
        let res = $crate::send!($app, $browser, $browser.post_form("/signup", &form));
        assert_eq!(res.status(), actix_web::http::StatusCode::FOUND);
        assert_eq!($crate::common::location(&res), "/listings");
    }};
}

/// 숙소를 등록하고 새 숙소의 ID를 반환합니다.
#[macro_export]
macro_rules! create_listing {
    ($app:expr, $browser:expr, $title:expr) => {{
        let form = $crate::common::listing_form($title, "1200");
        let res = $crate::send!($app, $browser, $browser.post_form("/listings", &form));
        assert_eq!(res.status(), actix_web::http::StatusCode::FOUND);

        let res = $crate::send!($app, $browser, $browser.get("/listings"));
        let html = $crate::common::body_text(res).await;
        $crate::common::listing_ids(&html)
            .pop()
            .expect("created listing should appear on the index page")
    }};
}

pub fn listing_form<'a>(title: &'a str, price: &'a str) -> [(&'static str, &'a str); 6] {
    [
        ("listing[title]", title),
        ("listing[description]", "A quiet place to stay"),
        ("listing[image]", ""),
        ("listing[price]", price),
        ("listing[location]", "Lisbon"),
        ("listing[country]", "Portugal"),
    ]
}

pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.into_owned())
}

pub fn location<B>(res: &ServiceResponse<B>) -> String {
    res.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub async fn body_text<B: MessageBody>(res: ServiceResponse<B>) -> String {
    let bytes = test::read_body(res).await;
    String::from_utf8_lossy(&bytes).into_owned()
}

/// 페이지에서 `/listings/<id>` 링크의 ID를 순서대로 찾습니다.
pub fn listing_ids(html: &str) -> Vec<String> {
    ids_after(html, "href=\"/listings/")
}

/// 페이지에서 리뷰 삭제 폼의 리뷰 ID를 찾습니다.
pub fn review_ids(html: &str) -> Vec<String> {
    ids_after(html, "/reviews/")
}

fn ids_after(html: &str, marker: &str) -> Vec<String> {
    html.match_indices(marker)
        .filter_map(|(index, _)| {
            let candidate = html.get(index + marker.len()..index + marker.len() + 24)?;
            candidate
                .chars()
                .all(|c| c.is_ascii_hexdigit())
                .then(|| candidate.to_string())
        })
        .fold(Vec::new(), |mut ids, id| {
            if !ids.contains(&id) {
                ids.push(id);
            }
            ids
        })
}

/// `find_by_id` 호출 횟수를 세는 숙소 리포지토리
#[derive(Debug, Default)]
pub struct CountingListings {
    inner: InMemoryListingRepository,
    lookups: AtomicUsize,
}

impl CountingListings {
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListingRepository for CountingListings {
    async fn find_all(&self) -> Result<Vec<Listing>, AppError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Listing>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, listing: Listing) -> Result<Listing, AppError> {
        self.inner.insert(listing).await
    }

    async fn update_fields(&self, id: &ObjectId, fields: ListingFields) -> Result<Option<Listing>, AppError> {
        self.inner.update_fields(id, fields).await
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        self.inner.delete(id).await
    }

    async fn push_review(&self, listing_id: &ObjectId, review_id: &ObjectId) -> Result<bool, AppError> {
        self.inner.push_review(listing_id, review_id).await
    }

    async fn pull_review(&self, listing_id: &ObjectId, review_id: &ObjectId) -> Result<bool, AppError> {
        self.inner.pull_review(listing_id, review_id).await
    }
}
