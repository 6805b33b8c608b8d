//! Lookup-key derivation for descriptors without an explicit key.

/// Derives the catalog key for a source message.
///
/// Spaces and hyphens become underscores, commas and periods are dropped, and
/// the result is lower-cased. Distinct messages may collide on the same key;
/// callers that need to tell them apart supply an explicit key instead.
///
/// # Example
///
/// ```
/// use lexicon_core::derive_key;
///
/// assert_eq!(derive_key("Hello, World."), "hello_world");
/// assert_eq!(derive_key("Re-roll the dice"), "re_roll_the_dice");
/// ```
#[must_use]
pub fn derive_key(message: &str) -> String {
    message
        .chars()
        .filter(|c| !matches!(c, ',' | '.'))
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}
