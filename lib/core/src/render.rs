/// Where the loading indicator goes relative to the children
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPlacement {
    None,
    BeforeChildren,
    AfterChildren,
}

/// The loader is only shown while more content can be loaded, on the side where content is added.
pub fn loader_placement(has_more: bool, is_reverse: bool, has_loader: bool) -> LoaderPlacement {
    match (has_more && has_loader, is_reverse) {
        (false, _) => LoaderPlacement::None,
        (true, true) => LoaderPlacement::BeforeChildren,
        (true, false) => LoaderPlacement::AfterChildren,
    }
}
