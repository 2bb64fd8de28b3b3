//! Product Media Component
//!
//! Main slide plus a thumbnail strip for images, videos and YouTube clips.

use booking_core::product::{MediaCarousel, MediaItem, MediaKind};
use leptos::prelude::*;

#[component]
pub fn ProductMedia(media: Vec<MediaItem>) -> impl IntoView {
    let carousel = RwSignal::new(MediaCarousel::new(media));
    let slides = carousel.with_untracked(|c| c.media().iter().cloned().enumerate().collect::<Vec<_>>());

    view! {
        <div class="product-media">
            <div class="media-slide">
                {move || match carousel.with(|c| c.current_item().cloned()) {
                    Some(item) => view! { <MediaSlide item=item /> }.into_any(),
                    None => view! {
                        <div class="media-empty">
                            <span class="sub-heading-xs">"No image added"</span>
                        </div>
                    }.into_any(),
                }}
            </div>

            <Show when=move || carousel.with(|c| c.shows_thumbnails())>
                <div class="media-thumbnails">
                    {slides.iter().cloned().map(|(index, item)| {
                        let is_active = move || carousel.with(|c| c.current() == index);
                        view! {
                            <button
                                type="button"
                                class=move || if is_active() { "media-thumb active" } else { "media-thumb" }
                                aria-label=format!("Go to slide {}", index + 1)
                                on:click=move |_| carousel.update(|c| c.go_to_slide(index))
                            >
                                {match item.thumbnail() {
                                    Some(src) => view! { <img src=src alt=format!("Thumbnail {}", index) /> }.into_any(),
                                    None => view! {
                                        <video preload="metadata" muted=true>
                                            <source src=item.url.clone() type=item.video_type().unwrap_or_default() />
                                        </video>
                                    }.into_any(),
                                }}
                                {(item.kind != MediaKind::Image).then(|| view! { <span class="play-icon">"▶"</span> })}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn MediaSlide(item: MediaItem) -> impl IntoView {
    match item.kind {
        MediaKind::YouTube => view! {
            <iframe
                class="media-frame"
                src=item.source().unwrap_or_default()
                title="YouTube video player"
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                allowfullscreen=true
            ></iframe>
        }.into_any(),
        MediaKind::Video => view! {
            <video class="media-frame" controls=true>
                <source src=item.url.clone() type=item.video_type().unwrap_or_default() />
                "Your browser does not support the video tag."
            </video>
        }.into_any(),
        MediaKind::Image => view! {
            <img class="media-frame" src=item.url.clone() alt="Product illustration" />
        }.into_any(),
    }
}
