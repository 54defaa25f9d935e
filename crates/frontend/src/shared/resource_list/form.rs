use super::list::{initial_status, new_list_state, Column, ResourceList, RowExtra};
use super::store::{controller, Resource, SignalStore, UiInteraction};
use crate::shared::icons::icon;
use contracts::domain::common::Editable;
use contracts::shared::navigation::NavigationContext;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// "New District" / "Edit District: Colombo"
pub fn form_title<T: Editable>(item: &T) -> String {
    let element = T::kind().element_name();
    if item.id().is_empty() {
        format!("New {element}")
    } else {
        format!("Edit {element}: {}", item.label())
    }
}

/// Модальная форма создания/редактирования
///
/// Edits the display name and the active flag. New records are POSTed,
/// existing ones are replaced with PUT; the list refetches on success.
#[component]
pub fn ResourceForm<T>(
    item: T,
    store: SignalStore<T>,
    on_close: Callback<()>,
    #[prop(optional)] name_title: Option<&'static str>,
) -> impl IntoView
where
    T: Resource + Editable,
{
    let ui = UiInteraction::from_context();
    let title = form_title(&item);
    let name = RwSignal::new(item.label().to_string());
    let is_active = RwSignal::new(item.is_active() || item.id().is_empty());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let draft = StoredValue::new(item);

    let on_save = move |_| {
        let mut item = draft.get_value();
        item.set_label(name.get_untracked().trim().to_string());
        item.set_active(is_active.get_untracked());
        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match controller(store, ui).save(&item).await {
                Ok(()) => on_close.run(()),
                Err(e) => {
                    let _ = set_error.try_set(Some(e.user_message()));
                    let _ = set_saving.try_set(false);
                }
            }
        });
    };

    let busy = Signal::derive(move || saving.get());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>{name_title.unwrap_or("Name")}</Label>
                        <Input value=name disabled=busy />
                    </div>

                    <div class="form__group">
                        <Checkbox checked=is_active label="Active" />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=busy
                    >
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=busy>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

/// Nested kinds can only be created from inside their parent's screen
pub fn can_create<T: Editable>(scoped: bool) -> bool {
    T::kind().parent().is_none() || scoped
}

/// Список с формой создания/редактирования
#[component]
pub fn EditableList<T>(
    columns: Vec<Column<T>>,
    #[prop(optional_no_strip)] parent: Option<NavigationContext>,
    #[prop(optional_no_strip)] status_filter: Option<bool>,
    #[prop(optional_no_strip)] name_title: Option<&'static str>,
    #[prop(optional_no_strip)] extra: Option<RowExtra<T>>,
) -> impl IntoView
where
    T: Resource + Editable,
{
    let status = initial_status(status_filter, parent.as_ref());
    let store = SignalStore::new(new_list_state::<T>(status, parent.as_ref()));
    let editing: RwSignal<Option<T>> = RwSignal::new(None);
    let scope = parent.as_ref().map(|ctx| ctx.parent.id.clone());

    let on_edit = Callback::new(move |row: T| editing.set(Some(row)));
    let on_create = can_create::<T>(scope.is_some()).then(|| {
        Callback::new(move |_: ()| editing.set(Some(T::blank(scope.as_deref()))))
    });
    let close = Callback::new(move |_: ()| editing.set(None));

    view! {
        <ResourceList
            columns=columns
            parent=parent
            status_filter=Some(status)
            store=Some(store)
            name_title=name_title
            on_edit=Some(on_edit)
            on_create=on_create
            extra=extra
        />
        {move || editing.get().map(|item| view! {
            <ResourceForm item=item store=store on_close=close name_title=name_title.unwrap_or("Name") />
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_province::Province;
    use contracts::domain::a002_district::District;

    #[test]
    fn titles_for_new_and_existing() {
        assert_eq!(form_title(&Province::default()), "New Province");
        let existing = Province {
            id: "p1".into(),
            name: "Western".into(),
            ..Province::default()
        };
        assert_eq!(form_title(&existing), "Edit Province: Western");
    }

    #[test]
    fn nested_kinds_need_a_parent_to_create() {
        assert!(can_create::<Province>(false));
        assert!(!can_create::<District>(false));
        assert!(can_create::<District>(true));
    }
}
