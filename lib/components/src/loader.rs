use leptos::prelude::*;

/// Loading indicator shown by every `InfiniteScroll` below the providing component that doesn't
/// have a loader of its own.
#[derive(Clone)]
pub struct DefaultLoader(pub ViewFn);

pub fn provide_default_loader(loader: impl Into<ViewFn>) {
    provide_context(DefaultLoader(loader.into()));
}

pub fn use_default_loader() -> Option<ViewFn> {
    use_context::<DefaultLoader>().map(|default_loader| default_loader.0)
}

pub fn resolve_loader(loader: Option<ViewFn>, default_loader: Option<ViewFn>) -> Option<ViewFn> {
    loader.or(default_loader)
}
