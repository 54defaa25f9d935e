/// Утилиты списочных экранов: подсветка совпадений и строка поиска
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Разбить текст на куски (фрагмент, совпал ли он с запросом)
///
/// Case-insensitive. The term is used as typed, like in the list filter.
/// Texts whose lowercase form changes byte length are returned whole.
pub fn match_segments<'a>(text: &'a str, term: &str) -> Vec<(&'a str, bool)> {
    let needle = term.to_lowercase();
    let haystack = text.to_lowercase();
    if needle.is_empty() || haystack.len() != text.len() || !haystack.contains(&needle) {
        return vec![(text, false)];
    }

    let mut segments = Vec::new();
    let mut last = 0;
    while let Some(pos) = haystack[last..].find(&needle) {
        let start = last + pos;
        let end = start + needle.len();
        if start > last {
            segments.push((&text[last..start], false));
        }
        segments.push((&text[start..end], true));
        last = end;
    }
    if last < text.len() {
        segments.push((&text[last..], false));
    }
    segments
}

/// Подсветка совпадений в тексте
pub fn highlight_matches(text: &str, term: &str) -> AnyView {
    let parts = match_segments(text, term)
        .into_iter()
        .map(|(chunk, hit)| {
            let chunk = chunk.to_string();
            if hit {
                view! { <mark class="search-hit">{chunk}</mark> }.into_any()
            } else {
                view! { <span>{chunk}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();
    view! { <>{parts}</> }.into_any()
}

/// Строка поиска с кнопкой очистки
///
/// Every keystroke goes straight to `on_change`; filtering is local.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search by name...".to_string()
    } else {
        placeholder
    };
    let is_active = move || !value.get().is_empty();

    view! {
        <div class="search-input" class:search-input--active=is_active>
            {icon("search")}
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_around_every_hit() {
        assert_eq!(
            match_segments("Colombo Central", "co"),
            vec![("Co", true), ("lombo Central", false)]
        );
        assert_eq!(
            match_segments("Galle road, Galle", "galle"),
            vec![("Galle", true), (" road, ", false), ("Galle", true)]
        );
    }

    #[test]
    fn blank_term_or_miss_returns_whole_text() {
        assert_eq!(match_segments("Kandy", ""), vec![("Kandy", false)]);
        assert_eq!(match_segments("Kandy", "  "), vec![("Kandy", false)]);
        assert_eq!(match_segments("Kandy", "galle"), vec![("Kandy", false)]);
    }

    #[test]
    fn matching_ignores_case_but_keeps_spaces() {
        assert_eq!(
            match_segments("Western Province", "WEST"),
            vec![("West", true), ("ern Province", false)]
        );
        assert_eq!(match_segments("Colombo", "co "), vec![("Colombo", false)]);
        assert_eq!(
            match_segments("Nuwara Eliya", "a e"),
            vec![("Nuwar", false), ("a E", true), ("liya", false)]
        );
        assert_eq!(
            match_segments("Anuradhapura", "a"),
            vec![
                ("A", true),
                ("nur", false),
                ("a", true),
                ("dh", false),
                ("a", true),
                ("pur", false),
                ("a", true),
            ]
        );
    }
}
