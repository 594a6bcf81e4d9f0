//! Default `services` selection from a comma-separated link parameter.

use super::service::Service;

/// Parse a comma-separated `service` parameter into known services.
///
/// Pieces are trimmed; anything that is not an exact service label is
/// dropped. Order and duplicates are preserved, since the result only
/// seeds the form and is validated later with everything else.
pub fn parse_prefill_services(param: Option<&str>) -> Vec<Service> {
    let Some(param) = param else {
        return Vec::new();
    };

    param
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .filter_map(Service::from_wire)
        .collect()
}
