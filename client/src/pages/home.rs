//! Landing page with an introductory carousel.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::carousel::Carousel;
use crate::util::i18n::t;

fn slide(title_key: &'static str, body_key: &'static str) -> ViewFn {
    ViewFn::from(move || {
        view! {
            <h2>{t(title_key)}</h2>
            <p>{t(body_key)}</p>
        }
    })
}

#[component]
pub fn HomePage() -> impl IntoView {
    let slides = vec![
        slide("home.slide.search.title", "home.slide.search.body"),
        slide("home.slide.details.title", "home.slide.details.body"),
        slide("home.slide.export.title", "home.slide.export.body"),
    ];

    view! {
        <section class="home-page">
            <Carousel slides=slides class="home-page__carousel"/>
            <A href="/scout/search" attr:class="btn btn--primary">{t("nav.search")}</A>
        </section>
    }
}
