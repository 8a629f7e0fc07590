//! Push URL composition

use crate::delivery::encoding::encode;

/// Query parameter carrying the encoded document
pub const DOCUMENT_PARAM: &str = "doc";

/// Compose the outbound push URL.
///
/// Identifiers are form-encoded, which leaves well-formed ids untouched.
/// `encoded_document` is inserted verbatim; encoding it again would corrupt
/// delivery.
pub fn build_push_url(
    push_base_url: &str,
    service_id: &str,
    user_id: &str,
    protocol: &str,
    encoded_document: &str,
) -> String {
    let separator = if push_base_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}service={}&user={}&protocol={}&{}={}",
        push_base_url,
        separator,
        encode(service_id),
        encode(user_id),
        encode(protocol),
        DOCUMENT_PARAM,
        encoded_document
    )
}
