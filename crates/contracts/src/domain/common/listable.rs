use super::ResourceKind;

/// Запись, которую можно показать в списочном экране
///
/// Минимальный контракт: стабильный id, отображаемое имя (по нему идёт поиск),
/// флаг активности и, для вложенных ресурсов, ссылка на владельца.
pub trait Listable: Clone {
    /// Kind of the collection this record belongs to
    fn kind() -> ResourceKind;

    /// Opaque identifier, unique and immutable within the collection
    fn id(&self) -> &str;

    /// Display string used for search matching
    fn label(&self) -> &str;

    fn is_active(&self) -> bool;

    /// Id of the owning record (e.g. `provinceId` of a district)
    fn parent_id(&self) -> Option<&str> {
        None
    }
}

/// Запись, которую можно создать/изменить через общую форму
pub trait Editable: Listable + Default {
    /// Empty record, pre-scoped to `parent_id` when the resource is nested
    fn blank(parent_id: Option<&str>) -> Self;

    fn set_label(&mut self, label: String);

    fn set_active(&mut self, active: bool);

    /// Blank labels are never saved
    fn check_label(&self) -> Result<(), String> {
        if self.label().trim().is_empty() {
            return Err(format!("{} name must not be empty", Self::kind().element_name()));
        }
        Ok(())
    }

    /// Checked before any create/replace request
    fn validate(&self) -> Result<(), String> {
        self.check_label()
    }
}
