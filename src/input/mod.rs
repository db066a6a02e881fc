//! Input list parsing
//!
//! The input is a header-bearing tabular text file with at minimum a
//! `URL` column; every non-empty data row becomes one [`WorkItem`] in
//! file order. Rows with a blank URL field are kept here and dropped
//! later by the normalizer, so skip accounting lives in one place.

use crate::PagegrepError;

/// One input row before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// Raw value of the row's URL column
    pub url: String,
}

/// Parses the input list content into work items
///
/// The first non-empty line is the header; the `URL` column is located by
/// a case-insensitive match. A missing header or missing `URL` column is a
/// fatal startup error.
///
/// # Arguments
///
/// * `content` - Full text of the input list
///
/// # Returns
///
/// * `Ok(Vec<WorkItem>)` - One item per non-empty data row, in file order
/// * `Err(PagegrepError)` - The list is empty or has no URL column
pub fn parse_work_items(content: &str) -> Result<Vec<WorkItem>, PagegrepError> {
    let mut lines = content.lines();

    let header = lines
        .by_ref()
        .find(|line| !line.trim().is_empty())
        .ok_or_else(|| PagegrepError::InputFormat("input list is empty".to_string()))?;

    let url_column = header
        .split(',')
        .position(|field| field.trim().eq_ignore_ascii_case("url"))
        .ok_or_else(|| {
            PagegrepError::InputFormat(format!(
                "input list header has no URL column: '{}'",
                header.trim()
            ))
        })?;

    let items = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let url = line
                .split(',')
                .nth(url_column)
                .unwrap_or("")
                .to_string();
            WorkItem { url }
        })
        .collect();

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_column() {
        let items = parse_work_items("URL\nfacebook.com\ngoogle.com\n").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].url, "facebook.com");
        assert_eq!(items[1].url, "google.com");
    }

    #[test]
    fn test_parse_multi_column() {
        let content = "ID,URL\n0,facebook.com\n1,google.com\n2,twitter.com\n";
        let items = parse_work_items(content).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].url, "facebook.com");
        assert_eq!(items[2].url, "twitter.com");
    }

    #[test]
    fn test_header_match_is_case_insensitive() {
        let items = parse_work_items("id,url\n0,example.com\n").unwrap();
        assert_eq!(items[0].url, "example.com");
    }

    #[test]
    fn test_row_order_preserved() {
        let content = "URL\nc.com\na.com\nb.com\n";
        let items = parse_work_items(content).unwrap();
        let urls: Vec<_> = items.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, vec!["c.com", "a.com", "b.com"]);
    }

    #[test]
    fn test_empty_lines_skipped() {
        let items = parse_work_items("URL\n\nfacebook.com\n\n\ngoogle.com\n").unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_missing_url_field_yields_blank() {
        let content = "ID,URL\n0,example.com\n1\n";
        let items = parse_work_items(content).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].url, "");
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(parse_work_items("").is_err());
        assert!(parse_work_items("\n\n  \n").is_err());
    }

    #[test]
    fn test_missing_url_column_rejected() {
        let result = parse_work_items("ID,NAME\n0,foo\n");
        assert!(result.is_err());
    }
}
