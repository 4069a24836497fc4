use crate::models::models::{InsightRequest, InsightResponse};
use uuid::Uuid;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    Title,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// The insight form as the user types it: tags are one comma-separated
/// string until submission.
#[derive(Clone, Debug, Default)]
pub struct InsightForm {
    pub title: String,
    pub source: String,
    pub takeaway: String,
    pub tags: String,
    pub visibility: String,
}

/// View state over a fetched insight list. Filtering and sorting are
/// re-derived on every read; nothing here is persisted.
#[derive(Default)]
pub struct InsightBoard {
    insights: Vec<InsightResponse>,
    pub search_term: String,
    pub tag_filter: String,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub form: InsightForm,
    edit_id: Option<Uuid>,
}

impl InsightBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_insights(&mut self, insights: Vec<InsightResponse>) {
        self.insights = insights;
    }

    pub fn insights(&self) -> &[InsightResponse] {
        &self.insights
    }

    pub fn edit_id(&self) -> Option<Uuid> {
        self.edit_id
    }

    pub fn is_editing(&self) -> bool {
        self.edit_id.is_some()
    }

    /// The list as displayed: both filters applied conjunctively, then a
    /// stable sort so ties keep their fetched order.
    pub fn visible(&self) -> Vec<&InsightResponse> {
        let search = self.search_term.to_lowercase();
        let tag = self.tag_filter.to_lowercase();

        let mut rows: Vec<&InsightResponse> = self
            .insights
            .iter()
            .filter(|insight| {
                let matches_search = search.is_empty()
                    || insight.title.to_lowercase().contains(&search)
                    || insight.takeaway.to_lowercase().contains(&search);
                let matches_tag = tag.is_empty()
                    || insight
                        .tags
                        .iter()
                        .any(|candidate| candidate.to_lowercase().contains(&tag));
                matches_search && matches_tag
            })
            .collect();

        rows.sort_by(|a, b| {
            let ordering = match self.sort_field {
                SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
                SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            };
            match self.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        rows
    }

    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.tag_filter.clear();
    }

    /// Copies a record's fields into the form and binds the form to that
    /// record's id, so the next save issues an update instead of a create.
    pub fn begin_edit(&mut self, insight: &InsightResponse) {
        self.form = InsightForm {
            title: insight.title.clone(),
            source: insight.source.clone().unwrap_or_default(),
            takeaway: insight.takeaway.clone(),
            tags: insight.tags.join(", "),
            visibility: insight.visibility.clone(),
        };
        self.edit_id = Some(insight.id);
    }

    /// Leaves edit mode without persisting anything.
    pub fn cancel_edit(&mut self) {
        self.form = InsightForm::default();
        self.edit_id = None;
    }

    /// The request body for the current form; tags are split on commas,
    /// trimmed, and empties dropped.
    pub fn payload(&self) -> InsightRequest {
        let tags = self
            .form
            .tags
            .split(',')
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();

        InsightRequest {
            title: self.form.title.clone(),
            source: {
                let source = self.form.source.trim();
                if source.is_empty() {
                    None
                } else {
                    Some(source.to_string())
                }
            },
            takeaway: self.form.takeaway.clone(),
            tags,
            visibility: if self.form.visibility.is_empty() {
                None
            } else {
                Some(self.form.visibility.clone())
            },
        }
    }

    /// Folds a saved record back into local state: replaces the edited
    /// entry or appends a newly created one, then resets the form.
    pub fn apply_saved(&mut self, insight: InsightResponse) {
        match self.insights.iter_mut().find(|row| row.id == insight.id) {
            Some(row) => *row = insight,
            None => self.insights.push(insight),
        }
        self.cancel_edit();
    }

    pub fn remove(&mut self, id: Uuid) {
        self.insights.retain(|insight| insight.id != id);
        if self.edit_id == Some(id) {
            self.cancel_edit();
        }
    }
}
