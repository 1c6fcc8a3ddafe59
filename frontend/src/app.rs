use std::time::Duration;

use infinite_scroll_components::{provide_default_loader, InfiniteScroll};
use leptos::prelude::*;

const PAGE_SIZE: usize = 20;
const FEED_LENGTH: usize = 200;
const HISTORY_LENGTH: usize = 100;
const LOAD_DELAY: Duration = Duration::from_millis(400);

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="w-full flex items-center justify-center my-5">
            <span class="loading loading-spinner"></span>
        </div>
    }
}

#[component]
pub fn DemoApp() -> impl IntoView {
    provide_default_loader(|| view! { <LoadingIndicator/> });

    view! {
        <main class="flex w-full gap-4 p-4">
            <PostFeed/>
            <MessageHistory/>
        </main>
    }
}

/// Feed scrolling with the window and loading posts at the bottom
#[component]
pub fn PostFeed() -> impl IntoView {
    let post_vec = RwSignal::new(Vec::<usize>::new());
    let is_loading = RwSignal::new(false);
    let has_more = Signal::derive(move || post_vec.read().len() < FEED_LENGTH);

    let load_more = move |page: i32| {
        log::debug!("Load post page {page}");
        is_loading.set(true);
        set_timeout(
            move || {
                post_vec.update(|post_vec| {
                    let start = post_vec.len();
                    post_vec.extend(start..(start + PAGE_SIZE).min(FEED_LENGTH));
                });
                is_loading.set(false);
            },
            LOAD_DELAY,
        );
    };

    view! {
        <InfiniteScroll
            load_more
            has_more
            is_loading
            page_start=0
            threshold=300.0
            element="ul"
            class="flex flex-col w-1/2 divide-y divide-base-content/20"
        >
            <For
                each=move || post_vec.get().into_iter()
                key=|post| *post
                let:post
            >
                <li class="p-2">{format!("Post {post}")}</li>
            </For>
        </InfiniteScroll>
    }
}

/// Message history scrolling inside its container and loading older messages at the top
#[component]
pub fn MessageHistory() -> impl IntoView {
    let message_vec = RwSignal::new(Vec::<usize>::new());
    let is_loading = RwSignal::new(false);
    let has_more = Signal::derive(move || message_vec.read().len() < HISTORY_LENGTH);

    let load_more = move |page: i32| {
        log::debug!("Load message page {page}");
        is_loading.set(true);
        set_timeout(
            move || {
                message_vec.update(|message_vec| {
                    let loaded = message_vec.len();
                    let mut older: Vec<usize> = (loaded..(loaded + PAGE_SIZE).min(HISTORY_LENGTH)).rev().collect();
                    older.append(message_vec);
                    *message_vec = older;
                });
                is_loading.set(false);
            },
            LOAD_DELAY,
        );
    };

    view! {
        <div class="w-1/2 h-[80vh] overflow-y-auto">
            <InfiniteScroll
                load_more
                has_more
                is_loading
                is_reverse=true
                use_window=false
                threshold=100.0
                loader=|| view! { <div class="text-center text-sm">"Loading older messages..."</div> }
            >
                <For
                    each=move || message_vec.get().into_iter()
                    key=|message| *message
                    let:message
                >
                    <div class="p-2">{format!("Message -{message}")}</div>
                </For>
            </InfiniteScroll>
        </div>
    }
}
