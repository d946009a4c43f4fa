//! Storefront configuration.
//!
//! Every field has a default matching the stock storefront templates, so an
//! empty file (or `StorefrontConfig::default()`) is a working configuration.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use turbo_commerce::quantity::DEFAULT_MIN_QUANTITY;
use turbo_commerce::DEFAULT_CURRENCY_SYMBOL;
use turbo_data::{CSRF_COOKIE, CSRF_HEADER};

/// Page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// CSRF cookie and header names.
    pub csrf: CsrfConfig,

    /// Symbol prefixed to displayed prices.
    pub currency_symbol: String,

    /// Lowest quantity the steppers go down to.
    pub min_quantity: u32,

    /// Share of simulated payments that succeed.
    pub payment_success_rate: f64,

    /// Path of the checkout page, relative to the origin.
    pub checkout_path: String,

    /// Path of the product listing, relative to the origin.
    pub products_path: String,

    /// Element ids and classes.
    pub selectors: Selectors,

    /// User-facing texts.
    pub messages: Messages,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            csrf: CsrfConfig::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            min_quantity: DEFAULT_MIN_QUANTITY,
            payment_success_rate: turbo_commerce::checkout::DEFAULT_SUCCESS_RATE,
            checkout_path: "/checkout".to_string(),
            products_path: "/products".to_string(),
            selectors: Selectors::default(),
            messages: Messages::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load config from a file (`.json`, anything else is read as TOML).
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config = if path.ends_with(".json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        config.with_context(|| format!("Invalid config file: {}", path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content).context("Failed to parse JSON config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no page could work with.
    pub fn validate(&self) -> Result<()> {
        if self.min_quantity == 0 {
            bail!("min_quantity must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.payment_success_rate) {
            bail!(
                "payment_success_rate must be within [0, 1], got {}",
                self.payment_success_rate
            );
        }
        if self.csrf.header.trim().is_empty() {
            bail!("csrf.header must not be empty");
        }
        Ok(())
    }
}

/// CSRF names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsrfConfig {
    pub cookie: String,
    pub header: String,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            cookie: CSRF_COOKIE.to_string(),
            header: CSRF_HEADER.to_string(),
        }
    }
}

/// Element ids (and a few classes) the handlers address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    // Cart summary
    pub cart_badge: String,
    pub items_count: String,
    pub subtotal_items: String,
    pub subtotal_price: String,
    pub taxes: String,
    pub shipping: String,
    pub total: String,
    /// Cart row quantity input id is this prefix plus the row's SKU.
    pub row_quantity_prefix: String,
    /// Cart row title id is this prefix plus the row's SKU.
    pub row_title_prefix: String,
    pub checkout_button: String,

    // Product page
    pub product_quantity: String,
    pub product_title: String,
    pub active_image: String,
    pub current_sku: String,
    pub variant_select: String,
    pub price: String,
    pub old_price: String,
    pub stock: String,
    pub primary_thumbnail: String,
    pub thumbnail_class: String,
    pub attribute_list: String,
    pub attribute_row_class: String,

    // Category grid
    pub category_select: String,
    pub product_container: String,
    pub category_status: String,

    // Promo
    pub promo_input: String,
    pub promo_button: String,
    pub promo_message: String,

    // Checkout
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub payment_method_class: String,
    pub place_order: String,
    pub modal: String,
    pub modal_icon: String,
    pub modal_title: String,
    pub modal_message: String,
    pub order_number: String,

    // Profile
    pub file_upload: String,
    pub file_name: String,
    pub profile_picture: String,
}

impl Default for Selectors {
    fn default() -> Self {
        fn s(v: &str) -> String {
            v.to_string()
        }
        Self {
            cart_badge: s("cart-items"),
            items_count: s("items-count"),
            subtotal_items: s("subtotal-items"),
            subtotal_price: s("subtotal-price"),
            taxes: s("vat"),
            shipping: s("shipping"),
            total: s("final-total"),
            row_quantity_prefix: s("quantity-"),
            row_title_prefix: s("title-"),
            checkout_button: s("checkout-btn"),

            product_quantity: s("product-quantity"),
            product_title: s("product-title"),
            active_image: s("image-active"),
            current_sku: s("product-sku"),
            variant_select: s("variantSelect"),
            price: s("product-price"),
            old_price: s("old-price"),
            stock: s("stock"),
            primary_thumbnail: s("thumbnail-primary"),
            thumbnail_class: s("thumbnail"),
            attribute_list: s("variant-list"),
            attribute_row_class: s("list-group-item d-flex justify-content-between align-items-center"),

            category_select: s("categorySelect"),
            product_container: s("productContainer"),
            category_status: s("category-status"),

            promo_input: s("promoCode"),
            promo_button: s("applyBtn"),
            promo_message: s("message"),

            card_number: s("cardNumber"),
            expiry: s("expiry"),
            cvv: s("cvv"),
            payment_method_class: s("payment-method"),
            place_order: s("place-order"),
            modal: s("resultModal"),
            modal_icon: s("modalIcon"),
            modal_title: s("modalTitle"),
            modal_message: s("modalMessage"),
            order_number: s("orderNumber"),

            file_upload: s("file-upload"),
            file_name: s("filename"),
            profile_picture: s("profile-pic"),
        }
    }
}

impl Selectors {
    pub fn row_quantity(&self, sku: &str) -> String {
        format!("{}{}", self.row_quantity_prefix, sku)
    }

    pub fn row_title(&self, sku: &str) -> String {
        format!("{}{}", self.row_title_prefix, sku)
    }
}

/// User-facing texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub confirm_remove: String,
    pub promo_empty: String,
    pub promo_success_prefix: String,
    pub promo_error_prefix: String,
    pub promo_applying: String,
    pub promo_apply: String,
    pub promo_rejected: String,
    pub category_failed: String,
    pub processing_payment: String,
    pub payment_success_title: String,
    pub payment_success_message: String,
    pub payment_failure_title: String,
    pub payment_failure_message: String,
    pub checkout_processing: String,
    pub image_uploaded: String,
}

impl Default for Messages {
    fn default() -> Self {
        fn s(v: &str) -> String {
            v.to_string()
        }
        Self {
            confirm_remove: s("Are you sure you want to remove this item?"),
            promo_empty: s("\u{26a0}\u{fe0f} Please enter a promo code"),
            promo_success_prefix: s("\u{2713} "),
            promo_error_prefix: s("\u{2717} "),
            promo_applying: s("Applying..."),
            promo_apply: s("Apply"),
            promo_rejected: s("Invalid promo code. Please try again."),
            category_failed: s("Could not load products for this category."),
            processing_payment: s("Processing Payment..."),
            payment_success_title: s("Payment Successful!"),
            payment_success_message: s(
                "Your order has been placed successfully. We'll send you a confirmation email shortly.",
            ),
            payment_failure_title: s("Payment Failed"),
            payment_failure_message: s(
                "There was an issue processing your payment. Please check your payment details and try again.",
            ),
            checkout_processing: s("Processing..."),
            image_uploaded: s("Image uploaded : "),
        }
    }
}
