//! 숙소 페이지
//!
//! 수정/삭제 폼은 `POST ...?_method=PUT|DELETE`로 제출되며
//! [`MethodOverride`](crate::middlewares::MethodOverride)가 메서드를 바꿉니다.

use crate::domain::entities::Listing;
use crate::domain::models::{ListingDetails, ReviewDetails};
use crate::utils::string_utils::{escape_html, escape_optional, format_price};
use crate::views::{layout, PageContext};

/// 숙소 목록
///
/// 각 숙소의 제목은 카드마다 정확히 한 번 나타납니다.
pub fn index(page: &PageContext, listings: &[Listing]) -> String {
    let cards = if listings.is_empty() {
        r#"<p class="empty">No listings yet.</p>"#.to_string()
    } else {
        listings.iter().map(card).collect::<Vec<_>>().join("\n")
    };

    let body = format!(
        r#"<h3>All Listings</h3>
<div class="listings">
{cards}
</div>"#
    );

    layout::render("All Listings", page, &body)
}

fn card(listing: &Listing) -> String {
    let id = listing.id_string().unwrap_or_default();
    format!(
        r#"<a class="listing-card" href="/listings/{id}">
<img src="{image}" alt="listing image">
<div class="card-body"><b class="card-title">{title}</b><br>{price}</div>
</a>"#,
        id = id,
        image = escape_html(&listing.image.url),
        title = escape_html(&listing.title),
        price = price_label(listing.price),
    )
}

fn price_label(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("&#8377; {} / night", format_price(price)),
        None => "Price on request".to_string(),
    }
}

/// 숙소 상세
///
/// 소유자에게만 수정/삭제 버튼을, 로그인 사용자에게만 리뷰 작성 폼을,
/// 작성자에게만 리뷰 삭제 버튼을 보여줍니다.
pub fn show(page: &PageContext, details: &ListingDetails) -> String {
    let listing = &details.listing;
    let id = listing.id_string().unwrap_or_default();
    let current_user = page.user.as_ref();

    let owner = details.owner
        .as_ref()
        .map(|owner| format!("<p class=\"owner\">Owned by <i>{}</i></p>", escape_html(&owner.username)))
        .unwrap_or_default();

    let owner_controls = match current_user {
        Some(user) if listing.is_owned_by(&user.user_id) => format!(
            r#"<div class="owner-controls">
<a class="btn" href="/listings/{id}/edit">Edit</a>
<form method="POST" action="/listings/{id}?_method=DELETE"><button class="btn btn-dark">Delete</button></form>
</div>"#
        ),
        _ => String::new(),
    };

    let review_form = if current_user.is_some() {
        format!(
            r#"<hr>
<h4>Leave a Review</h4>
<form method="POST" action="/listings/{id}/reviews" class="review-form">
<label for="rating">Rating</label>
<input type="range" min="1" max="5" id="rating" name="review[rating]" value="3">
<label for="comment">Comments</label>
<textarea id="comment" name="review[comment]" rows="5" required></textarea>
<button class="btn">Submit</button>
</form>"#
        )
    } else {
        String::new()
    };

    let reviews = if details.reviews.is_empty() {
        r#"<p class="empty">No reviews yet.</p>"#.to_string()
    } else {
        details.reviews
            .iter()
            .map(|review| review_card(page, &id, review))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        r#"<div class="listing-show">
<h3>{title}</h3>
<img class="show-img" src="{image}" alt="listing image">
{owner}
<p class="description">{description}</p>
<p class="price">{price}</p>
<p class="location">{location}, {country}</p>
{owner_controls}
{review_form}
<hr>
<h4>All Reviews</h4>
<div class="reviews">
{reviews}
</div>
</div>"#,
        title = escape_html(&listing.title),
        image = escape_html(&listing.image.url),
        owner = owner,
        description = escape_optional(listing.description.as_deref()),
        price = price_label(listing.price),
        location = escape_optional(listing.location.as_deref()),
        country = escape_optional(listing.country.as_deref()),
        owner_controls = owner_controls,
        review_form = review_form,
        reviews = reviews,
    );

    layout::render(&listing.title, page, &body)
}

fn review_card(page: &PageContext, listing_id: &str, details: &ReviewDetails) -> String {
    let review = &details.review;
    let review_id = review.id_string().unwrap_or_default();
    let author = details.author
        .as_ref()
        .map(|author| format!("@{}", escape_html(&author.username)))
        .unwrap_or_else(|| "Anonymous".to_string());
    let stars = "&#9733;".repeat(review.rating as usize);
    let created = review.created_at
        .try_to_rfc3339_string()
        .map(|timestamp| timestamp.chars().take(10).collect::<String>())
        .unwrap_or_default();

    let delete = match page.user.as_ref() {
        Some(user) if review.is_written_by(&user.user_id) => format!(
            r#"<form method="POST" action="/listings/{listing_id}/reviews/{review_id}?_method=DELETE"><button class="btn btn-sm btn-dark">Delete</button></form>"#
        ),
        _ => String::new(),
    };

    format!(
        r#"<div class="review-card">
<h5 class="review-author">{author}</h5>
<p class="review-rating" data-rating="{rating}">{stars}</p>
<p class="review-comment">{comment}</p>
<p class="review-date">{created}</p>
{delete}
</div>"#,
        author = author,
        rating = review.rating,
        stars = stars,
        comment = escape_html(&review.comment),
        created = created,
        delete = delete,
    )
}

/// 새 숙소 등록 폼
pub fn new_form(page: &PageContext) -> String {
    let body = format!(
        r#"<h3>Create a New Listing</h3>
<form method="POST" action="/listings" class="listing-form">
{fields}
<button class="btn">Add</button>
</form>"#,
        fields = form_fields(None),
    );

    layout::render("New Listing", page, &body)
}

/// 숙소 수정 폼
pub fn edit_form(page: &PageContext, listing: &Listing) -> String {
    let id = listing.id_string().unwrap_or_default();
    let body = format!(
        r#"<h3>Edit Your Listing</h3>
<form method="POST" action="/listings/{id}?_method=PUT" class="listing-form">
{fields}
<button class="btn">Edit</button>
</form>"#,
        id = id,
        fields = form_fields(Some(listing)),
    );

    layout::render("Edit Listing", page, &body)
}

fn form_fields(listing: Option<&Listing>) -> String {
    let title = listing.map(|l| escape_html(&l.title)).unwrap_or_default();
    let description = listing.map(|l| escape_optional(l.description.as_deref())).unwrap_or_default();
    let image = listing.map(|l| escape_html(&l.image.url)).unwrap_or_default();
    let price = listing.and_then(|l| l.price).map(|p| p.to_string()).unwrap_or_default();
    let location = listing.map(|l| escape_optional(l.location.as_deref())).unwrap_or_default();
    let country = listing.map(|l| escape_optional(l.country.as_deref())).unwrap_or_default();

    format!(
        r#"<label for="title">Title</label>
<input id="title" name="listing[title]" value="{title}" required>
<label for="description">Description</label>
<textarea id="description" name="listing[description]" required>{description}</textarea>
<label for="image">Image Link</label>
<input id="image" name="listing[image]" value="{image}" placeholder="Enter image URL">
<label for="price">Price</label>
<input id="price" name="listing[price]" type="number" min="0" value="{price}" required>
<label for="location">Location</label>
<input id="location" name="listing[location]" value="{location}" required>
<label for="country">Country</label>
<input id="country" name="listing[country]" value="{country}" required>"#
    )
}
