use contracts::domain::m001_entity_type::aggregate::EntityType;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::m001_entity_type::api;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

#[derive(Clone, Debug)]
pub struct EntityTypeRow {
    pub id: String,
    pub name: String,
    pub display_title: String,
    pub category: &'static str,
    pub property_count: usize,
    pub updated_at: String,
}

impl From<EntityType> for EntityTypeRow {
    fn from(t: EntityType) -> Self {
        use contracts::domain::common::AggregateId;

        Self {
            id: t.id.as_string(),
            display_title: t.display_title(),
            name: t.name,
            category: t.category.as_str(),
            property_count: t.custom_properties.len(),
            updated_at: format_timestamp(t.metadata.updated_at),
        }
    }
}

impl EntityTypeRow {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.display_title.to_lowercase().contains(needle)
    }
}

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Catalog overview: every type known to the catalog, one row per type.
/// Clicking a row opens its details screen.
#[component]
#[allow(non_snake_case)]
pub fn EntityTypeList(on_open: Callback<String>) -> impl IntoView {
    let items = RwSignal::new(Vec::<EntityTypeRow>::new());
    let error = RwSignal::new(Option::<String>::None);
    let search = RwSignal::new(String::new());

    let visible_items = Signal::derive(move || {
        let needle = search.get().trim().to_lowercase();
        let mut rows = items.get();
        if !needle.is_empty() {
            rows.retain(|row| row.matches(&needle));
        }
        rows
    });

    let fetch = move || {
        spawn_local(async move {
            match api::list_entity_types(None).await {
                Ok(v) => {
                    let rows: Vec<EntityTypeRow> = v.into_iter().map(Into::into).collect();
                    items.set(rows);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };
    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Entity types"</h1>
                </div>
                <div class="header__actions">
                    <div class="search-box">
                        {icon("search")}
                        <input
                            type="text"
                            class="search-box__input"
                            placeholder="Filter by name"
                            prop:value=search
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                    </div>
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| fetch())
                    >
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Custom properties"</th>
                            <th class="table__header-cell">"Updated"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_items.get().into_iter().map(|row| {
                            let id = row.id.clone();
                            view! {
                                <tr
                                    class="table__row table__row--clickable"
                                    on:click=move |_| on_open.run(id.clone())
                                >
                                    <td class="table__cell">
                                        <span class="table__cell-primary">{row.display_title}</span>
                                        <span class="table__cell-secondary">{row.name}</span>
                                    </td>
                                    <td class="table__cell">
                                        <span class=format!("badge badge--{}", row.category)>
                                            {row.category}
                                        </span>
                                    </td>
                                    <td class="table__cell">{row.property_count}</td>
                                    <td class="table__cell">{row.updated_at}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
