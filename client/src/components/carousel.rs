//! Slide carousel with dot navigation.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use leptos::prelude::*;

use crate::components::pagination::{Pagination, PaginationVariant};

/// Class for the slide at 0-based `index` when slide `current` (1-based) is shown.
fn slide_class(index: usize, current: u32) -> &'static str {
    if index + 1 == current as usize {
        "carousel__slide carousel__slide--active"
    } else {
        "carousel__slide"
    }
}

/// Shows one of `slides` at a time; the dots underneath switch slides.
#[component]
pub fn Carousel(slides: Vec<ViewFn>, #[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let current = RwSignal::new(1_u32);
    let count = u32::try_from(slides.len()).unwrap_or(u32::MAX);
    let class = class.map_or_else(|| "carousel".to_owned(), |extra| format!("carousel {extra}"));

    let rendered = slides
        .into_iter()
        .enumerate()
        .map(|(index, slide)| {
            view! { <div class=move || slide_class(index, current.get())>{slide.run()}</div> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=class>
            <div class="carousel__track">{rendered}</div>
            <Pagination
                count=count
                limit=1_u32
                page=current
                on_change=Callback::new(move |page| current.set(page))
                variant=PaginationVariant::Circles
                hide_numbers=true
            />
        </div>
    }
}
