/// Default number of rows per page
pub const PAGE_SIZE: usize = 10;

/// Срез одной страницы
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Always at least 1, even for an empty set
    pub total_pages: usize,
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Clamp a 1-based page number into `[1, total_pages]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Нарезать страницу (нумерация с 1)
///
/// Out-of-range pages (`0` or past the end) give an empty page.
pub fn paginate<T: Clone>(filtered: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(filtered.len(), page_size);
    if page == 0 || page > total_pages {
        return Page {
            items: Vec::new(),
            total_pages,
        };
    }
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(filtered.len());
    Page {
        items: filtered.get(start..end).unwrap_or(&[]).to_vec(),
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_five_rows_make_three_pages() {
        let rows: Vec<u32> = (1..=25).collect();
        let third = paginate(&rows, 3, PAGE_SIZE);
        assert_eq!(third.total_pages, 3);
        assert_eq!(third.items, vec![21, 22, 23, 24, 25]);

        let fourth = paginate(&rows, 4, PAGE_SIZE);
        assert!(fourth.items.is_empty());
        assert_eq!(fourth.total_pages, 3);
    }

    #[test]
    fn page_zero_is_empty_not_a_panic() {
        let rows = vec!["a", "b"];
        assert!(paginate(&rows, 0, PAGE_SIZE).items.is_empty());
    }

    #[test]
    fn empty_set_has_one_page() {
        let rows: Vec<u8> = Vec::new();
        let page = paginate(&rows, 1, PAGE_SIZE);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn pages_cover_everything_once() {
        let rows: Vec<usize> = (0..37).collect();
        for size in 1..=12 {
            let pages = total_pages(rows.len(), size);
            let joined: Vec<usize> = (1..=pages)
                .flat_map(|p| paginate(&rows, p, size).items)
                .collect();
            assert_eq!(joined, rows, "page size {size}");
        }
    }

    #[test]
    fn clamp_keeps_page_in_range() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(5, 0), 1);
    }
}
