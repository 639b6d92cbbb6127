//! Page navigation controls for the stand table and the carousel.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use forest::pagination::{PageItem, page_count, shows_controls, visible_pages};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

/// Pages shown on each side of the current one before a gap.
const PAGE_RADIUS: u32 = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaginationVariant {
    /// Previous / numbered pages / next.
    #[default]
    Numbered,
    /// One dot per page, as used under a carousel.
    Circles,
}

fn item_class(variant: PaginationVariant, active: bool) -> &'static str {
    match (variant, active) {
        (PaginationVariant::Numbered, true) => "pagination__page pagination__page--active",
        (PaginationVariant::Numbered, false) => "pagination__page",
        (PaginationVariant::Circles, true) => "pagination__circle pagination__circle--active",
        (PaginationVariant::Circles, false) => "pagination__circle",
    }
}

/// Items rendered for `variant`; circles never collapse into gaps.
fn items_for(variant: PaginationVariant, current: u32, pages: u32) -> Vec<PageItem> {
    match variant {
        PaginationVariant::Numbered => visible_pages(current, pages, PAGE_RADIUS),
        PaginationVariant::Circles => (1..=pages).map(PageItem::Page).collect(),
    }
}

/// Controls for a 1-indexed page over `count` items. Renders nothing when
/// everything fits on one page.
#[component]
pub fn Pagination(
    #[prop(into)] count: Signal<u32>,
    #[prop(into)] limit: Signal<u32>,
    #[prop(into)] page: Signal<u32>,
    on_change: Callback<u32>,
    #[prop(optional)] variant: PaginationVariant,
    #[prop(optional)] hide_numbers: bool,
    #[prop(optional, into)] previous_text: Option<String>,
    #[prop(optional, into)] next_text: Option<String>,
) -> impl IntoView {
    let pages = move || page_count(count.get(), limit.get());
    let visible = move || shows_controls(count.get(), limit.get());
    let previous_text = previous_text.unwrap_or_else(|| "‹".to_owned());
    let next_text = next_text.unwrap_or_else(|| "›".to_owned());

    let go = move |target: u32| {
        if target >= 1 && target <= pages() && target != page.get_untracked() {
            on_change.run(target);
        }
    };

    view! {
        <Show when=visible>
            <nav class="pagination">
                <button
                    class="pagination__prev"
                    disabled=move || page.get() <= 1
                    on:click=move |_| go(page.get_untracked().saturating_sub(1))
                >
                    {previous_text.clone()}
                </button>
                {move || {
                    let current = page.get();
                    items_for(variant, current, pages())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(n) => {
                                let label = if hide_numbers { String::new() } else { n.to_string() };
                                view! {
                                    <button class=item_class(variant, n == current) on:click=move |_| go(n)>
                                        {label}
                                    </button>
                                }
                                    .into_any()
                            }
                            PageItem::Gap => view! { <span class="pagination__gap">"…"</span> }.into_any(),
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="pagination__next"
                    disabled=move || page.get() >= pages()
                    on:click=move |_| go(page.get_untracked() + 1)
                >
                    {next_text.clone()}
                </button>
            </nav>
        </Show>
    }
}
