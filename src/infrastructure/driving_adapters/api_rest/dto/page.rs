//! Pagination query parameters.

use crate::domain::models::Page;

/// `?start=&count=` as sent by the client. Values are kept raw so that
/// garbage falls back to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct PageQueryDto {
    pub start: Option<String>,
    pub count: Option<String>,
}

impl FromIterator<(String, String)> for PageQueryDto {
    /// Collect raw query pairs. Only the first value of a repeated key is kept.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "start" => &mut query.start,
                "count" => &mut query.count,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

fn parse(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.parse().ok())
}

impl From<PageQueryDto> for Page {
    fn from(query: PageQueryDto) -> Self {
        Page::clamped(parse(query.start.as_deref()), parse(query.count.as_deref()))
    }
}
