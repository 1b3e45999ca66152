use dioxus::prelude::*;
use store::{SearchCriteria, StatusFilter};

use crate::components::{Button, ButtonVariant};

/// Status dropdown for the list views.
#[component]
pub fn StatusFilterSelect(value: StatusFilter, on_change: EventHandler<StatusFilter>) -> Element {
    rsx! {
        label {
            class: "inline-field",
            "Status"
            select {
                value: value.key(),
                onchange: move |evt| {
                    if let Some(filter) = StatusFilter::from_key(&evt.value()) {
                        on_change.call(filter);
                    }
                },
                for choice in StatusFilter::CHOICES {
                    option {
                        key: "{choice:?}",
                        value: choice.key(),
                        selected: choice == value,
                        {choice.label()}
                    }
                }
            }
        }
    }
}

/// Title, content and date range inputs. Every keystroke is reported; the
/// owner decides when to filter.
#[component]
pub fn SearchForm(criteria: SearchCriteria, on_change: EventHandler<SearchCriteria>) -> Element {
    let update = |apply: fn(&mut SearchCriteria, String)| {
        let criteria = criteria.clone();
        move |evt: FormEvent| {
            let mut next = criteria.clone();
            apply(&mut next, evt.value());
            on_change.call(next);
        }
    };

    rsx! {
        fieldset {
            class: "search-form",
            legend { "Search" }
            div {
                class: "search-grid",
                label {
                    "Title"
                    input {
                        r#type: "search",
                        value: "{criteria.title}",
                        oninput: update(|c, v| c.title = v),
                    }
                }
                label {
                    "Content"
                    input {
                        r#type: "search",
                        value: "{criteria.content}",
                        oninput: update(|c, v| c.content = v),
                    }
                }
                label {
                    "From"
                    input {
                        r#type: "date",
                        value: "{criteria.start_date}",
                        oninput: update(|c, v| c.start_date = v),
                    }
                }
                label {
                    "To"
                    input {
                        r#type: "date",
                        value: "{criteria.end_date}",
                        oninput: update(|c, v| c.end_date = v),
                    }
                }
            }
            if !criteria.is_empty() {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_change.call(SearchCriteria::default()),
                    "Clear search"
                }
            }
        }
    }
}
