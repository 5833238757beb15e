const UPLOAD_SEGMENT: &str = "/upload/";
const ATTACHMENT_SEGMENT: &str = "/upload/fl_attachment/";

/// Rewrites a displayable image URL into one the hosting CDN serves with
/// attachment disposition.
///
/// Only the first `/upload/` path segment is rewritten; a URL without the
/// segment is returned unchanged.
pub fn derive_download_url(image_url: &str) -> String {
    image_url.replacen(UPLOAD_SEGMENT, ATTACHMENT_SEGMENT, 1)
}
