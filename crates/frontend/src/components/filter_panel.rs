use dioxus::prelude::*;
use trip_map_shared::filter::FilterState;
use trip_map_shared::models::{Category, Status};

/// One toggle button's worth of display data.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Toggle<T> {
    value: T,
    label: &'static str,
    glyph: &'static str,
    selected: bool,
}

fn category_toggles(filters: &FilterState) -> Vec<Toggle<Category>> {
    Category::ALL
        .into_iter()
        .map(|c| Toggle {
            value: c,
            label: c.label(),
            glyph: c.glyph(),
            selected: filters.is_category_selected(c),
        })
        .collect()
}

fn status_toggles(filters: &FilterState) -> Vec<Toggle<Status>> {
    Status::ALL
        .into_iter()
        .map(|s| Toggle {
            value: s,
            label: s.label(),
            glyph: s.glyph(),
            selected: filters.is_status_selected(s),
        })
        .collect()
}

#[component]
pub fn FilterPanel(mut filters: Signal<FilterState>) -> Element {
    let categories = category_toggles(&filters.read());
    let statuses = status_toggles(&filters.read());

    rsx! {
        div { class: "filter-panel",
            div { class: "filter-group", "role": "group", "aria-label": "Filter by category",
                for t in categories {
                    button {
                        key: "{t.label}",
                        r#type: "button",
                        class: if t.selected { "filter-toggle active-category" } else { "filter-toggle" },
                        "aria-pressed": if t.selected { "true" } else { "false" },
                        onclick: move |_| filters.write().toggle_category(t.value),
                        span { class: "filter-glyph", "aria-hidden": "true", "{t.glyph}" }
                        "{t.label}"
                    }
                }
            }
            div { class: "filter-group", "role": "group", "aria-label": "Filter by visited status",
                for t in statuses {
                    button {
                        key: "{t.label}",
                        r#type: "button",
                        class: if t.selected { "filter-toggle active-status" } else { "filter-toggle" },
                        "aria-pressed": if t.selected { "true" } else { "false" },
                        onclick: move |_| filters.write().toggle_status(t.value),
                        span { class: "filter-glyph", "aria-hidden": "true", "{t.glyph}" }
                        "{t.label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toggles_all_selected() {
        let filters = FilterState::default();
        let cats = category_toggles(&filters);
        assert_eq!(cats.len(), 4);
        assert!(cats.iter().all(|t| t.selected));
        let statuses = status_toggles(&filters);
        assert_eq!(statuses.len(), 2);
        assert!(statuses.iter().all(|t| t.selected));
    }

    #[test]
    fn test_toggles_follow_display_order() {
        let labels: Vec<&str> = category_toggles(&FilterState::default())
            .iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(labels, ["Jyotirlinga", "Jyotipeeth", "Shaktipeeth", "Krishna"]);
        let labels: Vec<&str> = status_toggles(&FilterState::default())
            .iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(labels, ["Visited", "Not Visited"]);
    }

    #[test]
    fn test_deselected_toggle_reflects_state() {
        let mut filters = FilterState::default();
        filters.toggle_category(Category::Shaktipeeth);
        filters.toggle_status(Status::Visited);

        let cats = category_toggles(&filters);
        let shakti = cats.iter().find(|t| t.value == Category::Shaktipeeth).unwrap();
        assert!(!shakti.selected);
        assert_eq!(cats.iter().filter(|t| t.selected).count(), 3);

        let statuses = status_toggles(&filters);
        assert!(!statuses[0].selected);
        assert!(statuses[1].selected);
    }
}
