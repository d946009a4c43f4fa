//! Catalog records the storefront receives from the backend.

mod card;
mod variant;

pub use card::{FilterPayload, FilterReply, ProductCard};
pub use variant::{
    stock_text, PartialVariant, ProductVariant, VariantPayload, VariantReply, VariantUpdate,
    FULL_VARIANT_MESSAGE,
};
