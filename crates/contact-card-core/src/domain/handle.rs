use crate::domain::contact::DiscordHandle;

/// Removes a single leading `@`, so `@jane` and `jane` normalize alike.
pub fn strip_at(value: &str) -> &str {
    value.strip_prefix('@').unwrap_or(value)
}

/// Decodes a Discord entry of the form `["<"] handle ["|" channel-id] [">"]`.
///
/// A channel id that does not read as a finite base-10 number is dropped;
/// the handle is kept. An accepted id keeps its original text.
pub fn decode_discord(raw: &str) -> DiscordHandle {
    let cleaned = raw
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(raw);

    match cleaned.split_once('|') {
        Some((handle, candidate)) if is_channel_id(candidate) => {
            DiscordHandle::with_channel(handle, candidate)
        }
        Some((handle, _)) => DiscordHandle::new(handle),
        None => DiscordHandle::new(cleaned),
    }
}

fn is_channel_id(candidate: &str) -> bool {
    candidate
        .trim()
        .parse::<f64>()
        .is_ok_and(|value| value.is_finite())
}
