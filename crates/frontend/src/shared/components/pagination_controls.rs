use crate::shared::icons::icon;
use leptos::prelude::*;

/// "Page 2 of 3 (25)"
pub fn page_summary(current_page: usize, total_pages: usize, total_count: usize) -> String {
    format!(
        "Page {} of {} ({})",
        current_page.max(1),
        total_pages.max(1),
        total_count
    )
}

/// Prev/next navigation for a 1-based page index
///
/// Hidden while the filtered set is empty.
#[component]
pub fn PaginationControls(
    /// Current page, starting at 1
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    /// Rows after filtering
    #[prop(into)]
    total_count: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get();

    view! {
        <Show when=move || { total_count.get() > 0 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    title="Previous page"
                    disabled=at_first
                    on:click=move |_| {
                        let page = current_page.get_untracked();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                >
                    {icon("chevron-left")}
                </button>
                <span class="pagination-info">
                    {move || page_summary(current_page.get(), total_pages.get(), total_count.get())}
                </span>
                <button
                    class="pagination-btn"
                    title="Next page"
                    disabled=at_last
                    on:click=move |_| {
                        let page = current_page.get_untracked();
                        if page < total_pages.get_untracked() {
                            on_page_change.run(page + 1);
                        }
                    }
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_is_one_based() {
        assert_eq!(page_summary(2, 3, 25), "Page 2 of 3 (25)");
        assert_eq!(page_summary(0, 0, 0), "Page 1 of 1 (0)");
    }
}
