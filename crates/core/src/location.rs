//! Reading and writing the `page` query parameter.
//!
//! The parameter is 1-based on the wire and 0-based everywhere else.

use url::Url;

pub const PAGE_PARAM: &str = "page";

/// Parses a raw `page` value into a 0-based index.
///
/// Returns `None` for anything that is not a plain integer in `[1, total]`.
#[must_use]
pub fn parse_page_param(raw: &str, total: usize) -> Option<usize> {
    let page = raw.trim().parse::<usize>().ok()?;
    (1..=total).contains(&page).then(|| page - 1)
}

/// Returns the 0-based page index requested by `url`, if any and in range.
#[must_use]
pub fn page_from_url(url: &Url, total: usize) -> Option<usize> {
    url.query_pairs()
        .find(|(key, _)| key == PAGE_PARAM)
        .and_then(|(_, value)| parse_page_param(&value, total))
}

/// Writes `index` (0-based) into `url` as a 1-based `page` parameter.
///
/// Other query parameters keep their order; an existing `page` value is
/// replaced in place.
pub fn set_page(url: &mut Url, index: usize) {
    let value = (index + 1).to_string();
    let mut replaced = false;
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter_map(|(key, existing)| {
            if key == PAGE_PARAM {
                if replaced {
                    return None;
                }
                replaced = true;
                return Some((key.into_owned(), value.clone()));
            }
            Some((key.into_owned(), existing.into_owned()))
        })
        .collect();

    let mut query = url.query_pairs_mut();
    query.clear();
    for (key, existing) in &pairs {
        query.append_pair(key, existing);
    }
    if !replaced {
        query.append_pair(PAGE_PARAM, &value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn reads_one_based_page() {
        assert_eq!(page_from_url(&url("slides://deck/?page=3"), 5), Some(2));
        assert_eq!(page_from_url(&url("slides://deck/?page=1"), 1), Some(0));
    }

    #[test]
    fn rejects_missing_malformed_and_out_of_range_values() {
        assert_eq!(page_from_url(&url("slides://deck/"), 5), None);
        assert_eq!(page_from_url(&url("slides://deck/?page="), 5), None);
        assert_eq!(page_from_url(&url("slides://deck/?page=abc"), 5), None);
        assert_eq!(page_from_url(&url("slides://deck/?page=0"), 5), None);
        assert_eq!(page_from_url(&url("slides://deck/?page=-1"), 5), None);
        assert_eq!(page_from_url(&url("slides://deck/?page=6"), 5), None);
    }

    #[test]
    fn set_page_appends_when_missing() {
        let mut target = url("slides://deck/?theme=dark");
        set_page(&mut target, 0);
        assert_eq!(target.query(), Some("theme=dark&page=1"));
    }

    #[test]
    fn set_page_replaces_in_place() {
        let mut target = url("slides://deck/?page=9&theme=dark");
        set_page(&mut target, 3);
        assert_eq!(target.query(), Some("page=4&theme=dark"));
        assert_eq!(page_from_url(&target, 5), Some(3));
    }
}
