//! Category grid card.

use super::escape_html;
use turbo_commerce::catalog::ProductCard;

/// Render one card of the category grid.
///
/// The discount badge and the old price only appear when positive.
pub fn render_product_card(card: &ProductCard, symbol: &str) -> String {
    let badge = card
        .discount_badge()
        .map(|badge| format!(r#"<span class="badge-discount">{}</span>"#, badge))
        .unwrap_or_default();
    let old_price = if card.has_old_price() {
        format!(
            r#"<span class="old-price">{}</span>"#,
            escape_html(&card.old_price.display_with(symbol))
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="product-card position-relative">
    {badge}
    <img src="{image}" alt="{name}" class="product-img">
    <div class="p-3">
        <small class="text-muted">{category}</small>
        <h6 class="mt-1 mb-1">{name}</h6>
        <p class="mb-1 text-muted">In Stock : {stock}</p>
        <div class="d-flex align-items-center justify-content-between">
            <span class="price">{price}</span>
            {old_price}
        </div>
    </div>
    <a href="{url}" class="btn btn-primary btn-sm text-white text-decoration-none">View product</a>
</div>"#,
        badge = badge,
        image = escape_html(&card.image_url),
        name = escape_html(&card.name),
        category = escape_html(&card.category),
        stock = card.stock,
        price = escape_html(&card.price.display_with(symbol)),
        old_price = old_price,
        url = escape_html(&card.product_url)
    )
}
