// Lead capture: client-side e-mail validation and the payload shape sent
// to the early-access endpoint.

use serde::Serialize;

/// The one persistent browser storage key: the address a visitor already
/// submitted, remembered across visits.
pub const STORAGE_KEY_EMAIL: &str = "early_access_email";

pub const EARLY_ACCESS_ENDPOINT: &str = "/api/early-access";

#[derive(Clone, Debug, Serialize)]
pub struct LeadPayload {
    pub email: String,
    pub ts: f64,
    pub ua: String,
}

/// Permissive `local@domain.tld` check: one '@', no whitespace, and a dot
/// with non-empty sides somewhere in the domain. Real validation belongs to
/// the server; this only catches obvious typos before the POST.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if !part_ok(local) || !part_ok(domain) {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    chars
        .iter()
        .enumerate()
        .any(|(i, &c)| c == '.' && i > 0 && i + 1 < chars.len())
}

fn part_ok(part: &str) -> bool {
    !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@')
}
