//! WhatsApp share links.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const WHATSAPP_SHARE: &str = "https://wa.me/?text=";

/// Characters `encodeURIComponent` leaves as-is, besides ASCII alphanumerics.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Human-readable share message for one district.
pub fn share_message(province: &str, canton: &str, district: &str, postal_code: &str) -> String {
    format!("Código postal de {district}, {canton}, {province}: {postal_code}")
}

/// `https://wa.me/?text=<encoded message>`
pub fn whatsapp_share_url(
    province: &str,
    canton: &str,
    district: &str,
    postal_code: &str,
) -> String {
    let message = share_message(province, canton, district, postal_code);
    format!("{WHATSAPP_SHARE}{}", encode_component(&message))
}

/// Percent-encode a URI component.
fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}
