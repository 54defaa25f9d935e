use super::store::{controller, Resource, SignalStore, UiInteraction};
use crate::layout::global_context::use_tabs;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_LIST};
use contracts::shared::listing::{clamp_page, ListState, RowAction};
use contracts::shared::navigation::{build_context, descend, NavigationContext, Route};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Колонка таблицы (кроме колонки имени, она всегда первая)
pub struct Column<T> {
    pub title: &'static str,
    pub min_width: f32,
    pub cell: fn(&T) -> String,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> Column<T> {
    pub const fn new(title: &'static str, min_width: f32, cell: fn(&T) -> String) -> Self {
        Self {
            title,
            min_width,
            cell,
        }
    }
}

/// Дополнительная кнопка строки (например, "Approve" у владельцев)
pub struct RowExtra<T> {
    pub label: &'static str,
    pub icon: &'static str,
    pub action: RowAction,
    /// Rows the button is shown for
    pub visible: fn(&T) -> bool,
}

impl<T> Clone for RowExtra<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RowExtra<T> {}

/// Initial status for a list: explicit value, else what the parent screen
/// remembered for its embedded list, else active
pub fn initial_status(explicit: Option<bool>, parent: Option<&NavigationContext>) -> bool {
    explicit
        .or_else(|| parent.and_then(|ctx| ctx.child_status_filter))
        .unwrap_or(true)
}

/// Fresh list state, scoped to the entity `parent` describes
pub fn new_list_state<T>(status: bool, parent: Option<&NavigationContext>) -> ListState<T> {
    let scope = parent.map(|ctx| ctx.parent.id.clone());
    ListState::scoped(scope, config().list.page_size).with_status(status)
}

const STATUS_ACTIVE: &str = "active";
const STATUS_INACTIVE: &str = "inactive";

/// Snapshot of what the table shows, taken in one read of the state
struct ListView<T> {
    rows: Vec<(T, bool)>,
    search: String,
    current_page: usize,
    total_pages: usize,
    total_count: usize,
}

fn snapshot<T: Resource>(state: &ListState<T>) -> ListView<T> {
    let page = state.visible();
    ListView {
        rows: page
            .items
            .into_iter()
            .map(|row| {
                let enabled = state.row_actions_enabled(row.id());
                (row, enabled)
            })
            .collect(),
        search: state.filter.search_term.clone(),
        current_page: clamp_page(state.filter.current_page, page.total_pages),
        total_pages: page.total_pages,
        total_count: state.total_filtered(),
    }
}

/// Общий список ресурса: поиск, фильтр статуса, страницы, действия строк
///
/// With `parent` the list is embedded in that entity's detail screen and
/// shows only its children.
#[component]
pub fn ResourceList<T>(
    columns: Vec<Column<T>>,
    #[prop(optional_no_strip)] parent: Option<NavigationContext>,
    /// Initial status filter (top-level lists get it from the route)
    #[prop(optional_no_strip)]
    status_filter: Option<bool>,
    /// Shared with the form wrapper; created here when absent
    #[prop(optional_no_strip)]
    store: Option<SignalStore<T>>,
    #[prop(optional_no_strip)] name_title: Option<&'static str>,
    #[prop(optional_no_strip)] on_edit: Option<Callback<T>>,
    #[prop(optional_no_strip)] on_create: Option<Callback<()>>,
    #[prop(optional_no_strip)] extra: Option<RowExtra<T>>,
) -> impl IntoView
where
    T: Resource,
{
    let kind = T::kind();
    let embedded = parent.is_some();
    let store = store.unwrap_or_else(|| {
        let status = initial_status(status_filter, parent.as_ref());
        SignalStore::new(new_list_state(status, parent.as_ref()))
    });
    let ui = UiInteraction::from_context();
    let tabs = use_tabs();
    let parent = StoredValue::new(parent);
    let columns = StoredValue::new(columns);
    let name_title = name_title.unwrap_or("Name");

    let load = move || {
        spawn_local(async move {
            controller(store, ui).load().await;
        });
    };

    Effect::new(move |_| load());

    let run_action = move |id: String, action: RowAction| {
        spawn_local(async move {
            controller(store, ui).run(&id, action).await;
        });
    };

    let open_details = move |row: &T| {
        let status = store.0.with_untracked(|s| s.filter.status_filter);
        let nav = parent.with_value(|p| match p {
            Some(ctx) => descend(ctx, row, status),
            None => build_context(row, vec![], status),
        });
        tabs.open_route(Route::detail(T::kind(), row.id()), Some(nav));
    };

    let is_loading = Signal::derive(move || store.0.with(|s| s.is_loading()));
    let error = move || store.0.with(|s| s.last_error.clone());
    let view_state = Memo::new(move |_| store.0.with(|s| snapshot(s).summary()));

    let status_value = move || {
        if store.0.with(|s| s.filter.status_filter) {
            STATUS_ACTIVE
        } else {
            STATUS_INACTIVE
        }
    };

    let header = move || {
        let title = kind.list_name();
        let count = move || store.0.with(|s| s.total_filtered()).to_string();
        let actions = view! {
            {on_create.map(|create| view! {
                <Button appearance=ButtonAppearance::Primary on_click=move |_| create.run(())>
                    {icon("plus")}
                    " New"
                </Button>
            })}
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| load()
                disabled=is_loading
            >
                {icon("refresh")}
                {move || if is_loading.get() { " Loading..." } else { " Refresh" }}
            </Button>
        };
        if embedded {
            view! {
                <div class="embedded-list__header">
                    <h2 class="embedded-list__title">{title}</h2>
                    <Badge>{count}</Badge>
                    <div class="embedded-list__actions">{actions}</div>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="page__header">
                    <div class="page__header-left">
                        <h1 class="page__title">{title}</h1>
                        <Badge>{count}</Badge>
                    </div>
                    <div class="page__header-right">{actions}</div>
                </div>
            }
            .into_any()
        }
    };

    let rows = move || {
        let ListView { rows, search, .. } = store.0.with(|s| snapshot(s));
        let column_count = columns.with_value(|c| c.len()) + 3;
        if rows.is_empty() {
            let message = if is_loading.get_untracked() {
                "Loading...".to_string()
            } else {
                format!("No {} match the current filters", kind.list_name().to_lowercase())
            };
            return view! {
                <TableRow>
                    <TableCell attr:colspan=column_count.to_string()>
                        <div class="table__empty">{message}</div>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        rows.into_iter()
            .map(|(row, enabled)| {
                let disabled = Signal::derive(move || !enabled);
                let id = row.id().to_string();
                let active = row.is_active();
                let cells = columns.with_value(|cols| {
                    cols.iter()
                        .map(|col| {
                            let text = (col.cell)(&row);
                            view! {
                                <TableCell>
                                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view()
                });
                let name = highlight_matches(row.label(), &search);

                let row_for_view = row.clone();
                let view_button = view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| open_details(&row_for_view)
                    >
                        {icon("eye")}
                        " View"
                    </Button>
                };

                let edit_button = on_edit.map(|edit| {
                    let row_for_edit = row.clone();
                    view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            disabled=disabled
                            on_click=move |_| edit.run(row_for_edit.clone())
                        >
                            {icon("edit")}
                            " Edit"
                        </Button>
                    }
                });

                let extra_button = extra.filter(|x| (x.visible)(&row)).map(|x| {
                    let id = id.clone();
                    view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Primary
                            disabled=disabled
                            on_click=move |_| run_action(id.clone(), x.action)
                        >
                            {icon(x.icon)}
                            {format!(" {}", x.label)}
                        </Button>
                    }
                });

                let id_toggle = id.clone();
                let id_delete = id.clone();
                view! {
                    <TableRow>
                        <TableCell>
                            <TableCellLayout truncate=true>
                                <span class="table__name">{name}</span>
                            </TableCellLayout>
                        </TableCell>
                        {cells}
                        <TableCell>
                            {if active {
                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge> }.into_any()
                            } else {
                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"Inactive"</Badge> }.into_any()
                            }}
                        </TableCell>
                        <TableCell>
                            <div class="table__actions">
                                {view_button}
                                {edit_button}
                                {extra_button}
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    disabled=disabled
                                    on_click=move |_| run_action(id_toggle.clone(), RowAction::ToggleActive)
                                >
                                    {icon("power")}
                                    {if active { " Deactivate" } else { " Activate" }}
                                </Button>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    disabled=disabled
                                    on_click=move |_| run_action(id_delete.clone(), RowAction::Delete)
                                >
                                    {icon("delete")}
                                    " Delete"
                                </Button>
                            </div>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    let body = view! {
        {move || error().map(|e| view! { <div class="alert alert--error">{e}</div> })}

        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <SearchInput
                        value=Signal::derive(move || store.0.with(|s| s.filter.search_term.clone()))
                        on_change=Callback::new(move |term: String| store.0.update(|s| s.set_search(term)))
                    />
                    <select
                        class="status-select"
                        prop:value=status_value
                        on:change=move |ev| {
                            let active = event_target_value(&ev) == STATUS_ACTIVE;
                            spawn_local(async move {
                                controller(store, ui).set_status(active).await;
                            });
                        }
                    >
                        <option value=STATUS_ACTIVE>"Active"</option>
                        <option value=STATUS_INACTIVE>"Inactive"</option>
                    </select>
                </div>
                <div class="filter-panel-header__center">
                    <PaginationControls
                        current_page=Signal::derive(move || view_state.get().0)
                        total_pages=Signal::derive(move || view_state.get().1)
                        total_count=Signal::derive(move || view_state.get().2)
                        on_page_change=Callback::new(move |page: usize| store.0.update(|s| s.go_to_page(page)))
                    />
                </div>
            </div>
        </div>

        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=160.0>{name_title}</TableHeaderCell>
                        {columns.with_value(|cols| cols.iter().copied().map(|col| view! {
                            <TableHeaderCell min_width=col.min_width>{col.title}</TableHeaderCell>
                        }).collect_view())}
                        <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=240.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        </div>
    };

    if embedded {
        view! {
            <div class="embedded-list">
                {header()}
                {body}
            </div>
        }
        .into_any()
    } else {
        view! {
            <PageFrame page_id=page_id(kind.key(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
                {header()}
                <div class="page__content">{body}</div>
            </PageFrame>
        }
        .into_any()
    }
}

impl<T> ListView<T> {
    /// (current page, total pages, filtered count)
    fn summary(&self) -> (usize, usize, usize) {
        (self.current_page, self.total_pages, self.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_province::Province;
    use contracts::shared::navigation::build_context;

    fn province(id: &str, name: &str) -> Province {
        Province {
            id: id.into(),
            name: name.into(),
            is_active: true,
            ..Province::default()
        }
    }

    #[test]
    fn explicit_status_wins() {
        assert!(!initial_status(Some(false), None));
        assert!(initial_status(None, None));
    }

    #[test]
    fn embedded_list_restores_remembered_status() {
        let mut ctx = build_context(&province("p1", "Western"), vec![], true);
        assert!(initial_status(None, Some(&ctx)));
        ctx.child_status_filter = Some(false);
        assert!(!initial_status(None, Some(&ctx)));
    }

    #[test]
    fn embedded_list_is_scoped_to_parent() {
        let ctx = build_context(&province("p1", "Western"), vec![], true);
        let state: ListState<Province> = new_list_state(false, Some(&ctx));
        assert_eq!(state.scope_parent_id.as_deref(), Some("p1"));
        assert!(!state.filter.status_filter);

        let top: ListState<Province> = new_list_state(true, None);
        assert_eq!(top.scope_parent_id, None);
    }

    #[test]
    fn snapshot_clamps_page_and_marks_pending_rows() {
        let mut state: ListState<Province> = ListState::new(2);
        let ticket = state.begin_load();
        state.finish_load(
            ticket,
            Ok(vec![province("1", "A"), province("2", "B"), province("3", "C")]),
        );
        state.filter.current_page = 9;
        assert!(state.begin_mutation("3"));

        let view = snapshot(&state);
        assert_eq!(view.summary(), (2, 2, 3));
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].0.id, "3");
        assert!(!view.rows[0].1);
    }
}
