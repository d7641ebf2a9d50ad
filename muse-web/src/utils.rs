/// English plural forms helper
///
/// # Examples
/// ```
/// use muse_web::utils::pluralize;
/// assert_eq!(pluralize(1, "topic", "topics"), "topic");
/// assert_eq!(pluralize(5, "topic", "topics"), "topics");
/// assert_eq!(pluralize(0, "topic", "topics"), "topics");
/// ```
#[must_use]
pub fn pluralize<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
