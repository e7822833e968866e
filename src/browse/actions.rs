//! UI event dispatch
//!
//! Each UI event maps to exactly one [`StateUpdate`] without touching any
//! state. The session applies the update and the next projection picks it up.

use super::models::SortKey;
use crate::filters::{Category, ChangeKind, FilterChange};

/// Events raised by the browse and search pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEvent {
    /// A facet checkbox was ticked or unticked
    FilterBoxChanged {
        category: Category,
        value: String,
        checked: bool,
    },
    /// A filter chip was clicked away
    FilterTagClicked { category: Category, value: String },
    /// A sort option was picked; `None` for an unrecognized key
    SortChanged(Option<SortKey>),
    PageChanged(usize),
    PageSizeChanged(usize),
}

/// Partial update of pagination/sort state; `None` fields are left unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamsUpdate {
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sort: Option<Option<SortKey>>,
}

/// Intent produced by dispatching a UI event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateUpdate {
    Filters(FilterChange),
    Params(ParamsUpdate),
}

/// Translate a UI event into a state update
#[must_use]
pub fn dispatch(event: BrowseEvent) -> StateUpdate {
    match event {
        BrowseEvent::FilterBoxChanged {
            category,
            value,
            checked,
        } => on_filter_box_change(category, value, checked),
        BrowseEvent::FilterTagClicked { category, value } => on_filter_tag_click(category, value),
        BrowseEvent::SortChanged(sort) => on_sort_change(sort),
        BrowseEvent::PageChanged(page) => update_page(page),
        BrowseEvent::PageSizeChanged(size) => on_page_size_change(size),
    }
}

#[must_use]
pub fn on_filter_box_change(category: Category, value: String, checked: bool) -> StateUpdate {
    let kind = if checked {
        ChangeKind::Add
    } else {
        ChangeKind::Remove
    };
    StateUpdate::Filters(FilterChange {
        category,
        value,
        kind,
    })
}

#[must_use]
pub fn on_filter_tag_click(category: Category, value: String) -> StateUpdate {
    StateUpdate::Filters(FilterChange::remove(category, value))
}

/// Changing sort always returns to the first page
#[must_use]
pub const fn on_sort_change(sort: Option<SortKey>) -> StateUpdate {
    StateUpdate::Params(ParamsUpdate {
        page: Some(1),
        size: None,
        sort: Some(sort),
    })
}

#[must_use]
pub const fn update_page(page: usize) -> StateUpdate {
    StateUpdate::Params(ParamsUpdate {
        page: Some(page),
        size: None,
        sort: None,
    })
}

/// Changing page size always returns to the first page
#[must_use]
pub const fn on_page_size_change(size: usize) -> StateUpdate {
    StateUpdate::Params(ParamsUpdate {
        page: Some(1),
        size: Some(size),
        sort: None,
    })
}
