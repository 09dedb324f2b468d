//! Product image reference resolution.
//!
//! Turns whatever a backend or provider hands us -- an absolute URL, a
//! root-relative path, a bare filename, or nothing -- into a reference the
//! frontend can render. Total, pure, deterministic; there is no failure mode.

use url::Url;

/// Directory the bundled product images are served from.
const PRODUCT_ASSET_DIR: &str = "/products";

/// Resolve an image reference into a renderable source.
///
/// Rules, in order:
/// 1. Empty or whitespace-only input yields no image.
/// 2. An absolute `http(s)` URL or a root-relative path (leading `/`) is
///    returned unchanged.
/// 3. Anything else is treated as a bare filename and prefixed with the
///    product asset directory.
///
/// Idempotent: resolving an already-resolved reference returns it unchanged.
pub fn resolve_image_ref(reference: &str) -> Option<String> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }
    if is_absolute_http(reference) || reference.starts_with('/') {
        return Some(reference.to_string());
    }
    Some(format!("{}/{}", PRODUCT_ASSET_DIR, reference))
}

/// Look up the bundled image filename for a known product name, resolved to
/// a renderable source. Returns `None` for products we ship no image for.
pub fn lookup_product_image(product_name: &str) -> Option<String> {
    let filename = match product_name.trim() {
        "AfriPure Shea Butter + Marula Moisturising Hair Oil" => "shea-butter.jpg",
        "Native Child Castor Oil – Hairgrowth Oil" => "castor-oil.jpg",
        "AfriPure Vegetable Glycerine (100% Pure)" => "glycerin.jpg",
        "Pure Hydrolyzed Collagen (Peptide Powder)" => "hydrolyzed-protein.jpg",
        "AfriPure Marula Oil" => "marula-oil.jpg",
        "AfriPure Argan Oil" => "argan-oil.jpg",
        "AfriPure Jojoba Oil" => "jojoba-oil.jpg",
        _ => return None,
    };
    resolve_image_ref(filename)
}

/// True when the reference parses as a URL with an `http` or `https` scheme.
fn is_absolute_http(reference: &str) -> bool {
    match Url::parse(reference) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
