//! Shared form record accumulated across the wizard steps.
//!
//! The wizard owns a single [`FormData`]. Steps never replace it; they send
//! batches of [`FieldUpdate`]s through [`FormData::apply`], which applies a
//! whole batch under one mutable borrow. A reader therefore never sees a
//! batch half-applied (e.g., `model` updated while `model_data` is stale).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::VehicleModel;

/// Selections collected by the booking wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    /// Name of the chosen model
    pub model: Option<String>,
    /// Full record of the chosen model (`model == model_data.name` when set)
    pub model_data: Option<VehicleModel>,
    /// First rental day
    pub pickup_date: Option<NaiveDate>,
    /// Last rental day
    pub return_date: Option<NaiveDate>,
}

/// A single field write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Set or clear `model`
    Model(Option<String>),
    /// Set or clear `model_data`
    ModelData(Option<VehicleModel>),
    /// Set or clear `pickup_date`
    PickupDate(Option<NaiveDate>),
    /// Set or clear `return_date`
    ReturnDate(Option<NaiveDate>),
}

impl FieldUpdate {
    /// The two writes that select `model`, in the order they are applied.
    #[must_use]
    pub fn select_model(model: &VehicleModel) -> [Self; 2] {
        [
            Self::Model(Some(model.name.clone())),
            Self::ModelData(Some(model.clone())),
        ]
    }

    /// Field name as exposed in the serialized form.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Model(_) => "model",
            Self::ModelData(_) => "modelData",
            Self::PickupDate(_) => "pickupDate",
            Self::ReturnDate(_) => "returnDate",
        }
    }
}

impl FormData {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a batch of updates as one logical write.
    ///
    /// Returns `true` if any field changed.
    pub fn apply(&mut self, updates: impl IntoIterator<Item = FieldUpdate>) -> bool {
        let mut changed = false;

        for update in updates {
            let field = update.field();
            let field_changed = match update {
                FieldUpdate::Model(value) => replace_if_different(&mut self.model, value),
                FieldUpdate::ModelData(value) => {
                    replace_if_different(&mut self.model_data, value)
                }
                FieldUpdate::PickupDate(value) => {
                    replace_if_different(&mut self.pickup_date, value)
                }
                FieldUpdate::ReturnDate(value) => {
                    replace_if_different(&mut self.return_date, value)
                }
            };

            if field_changed {
                tracing::debug!(field, "form field updated");
            }
            changed |= field_changed;
        }

        changed
    }

    /// Returns true if a model has been chosen.
    ///
    /// An empty model name counts as "not chosen".
    #[must_use]
    pub fn has_model(&self) -> bool {
        self.model.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// The currently chosen model record, if any.
    #[must_use]
    pub fn current_selection(&self) -> Option<&VehicleModel> {
        self.model_data.as_ref()
    }

    /// Clears the model choice (both fields together).
    pub fn clear_model(&mut self) -> bool {
        self.apply([FieldUpdate::Model(None), FieldUpdate::ModelData(None)])
    }

    /// Number of rental nights, when both dates are set.
    #[must_use]
    pub fn nights(&self) -> Option<i64> {
        match (self.pickup_date, self.return_date) {
            (Some(pickup), Some(ret)) => Some((ret - pickup).num_days()),
            _ => None,
        }
    }
}

fn replace_if_different<T: PartialEq>(slot: &mut Option<T>, value: Option<T>) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(id: i64, name: &str) -> VehicleModel {
        VehicleModel {
            id,
            category_id: 1,
            name: name.to_string(),
            sleep_person: 4,
            description: "Spacious".to_string(),
            inner_image: None,
        }
    }

    #[test]
    fn test_apply_selection_sets_both_fields() {
        let mut form = FormData::new();
        let aria = model(10, "Aria");

        assert!(form.apply(FieldUpdate::select_model(&aria)));
        assert_eq!(form.model.as_deref(), Some("Aria"));
        assert_eq!(form.model_data.as_ref(), Some(&aria));
    }

    #[test]
    fn test_apply_same_selection_is_noop() {
        let mut form = FormData::new();
        let aria = model(10, "Aria");

        form.apply(FieldUpdate::select_model(&aria));
        let before = form.clone();

        assert!(!form.apply(FieldUpdate::select_model(&aria)));
        assert_eq!(form, before);
    }

    #[test]
    fn test_has_model_treats_empty_name_as_unselected() {
        let mut form = FormData::new();
        assert!(!form.has_model());

        form.apply([FieldUpdate::Model(Some(String::new()))]);
        assert!(!form.has_model());

        form.apply([FieldUpdate::Model(Some("Aria".to_string()))]);
        assert!(form.has_model());
    }

    #[test]
    fn test_clear_model() {
        let mut form = FormData::new();
        form.apply(FieldUpdate::select_model(&model(10, "Aria")));

        assert!(form.clear_model());
        assert_eq!(form.model, None);
        assert_eq!(form.current_selection(), None);
        assert!(!form.clear_model());
    }

    #[test]
    fn test_nights() {
        let mut form = FormData::new();
        assert_eq!(form.nights(), None);

        form.apply([
            FieldUpdate::PickupDate(NaiveDate::from_ymd_opt(2026, 6, 1)),
            FieldUpdate::ReturnDate(NaiveDate::from_ymd_opt(2026, 6, 8)),
        ]);
        assert_eq!(form.nights(), Some(7));
    }

    #[test]
    fn test_serialized_field_names() {
        let mut form = FormData::new();
        form.apply(FieldUpdate::select_model(&model(10, "Aria")));
        form.apply([FieldUpdate::PickupDate(NaiveDate::from_ymd_opt(2026, 6, 1))]);

        let json: serde_json::Value = serde_json::to_value(&form).unwrap();
        assert_eq!(json["model"], "Aria");
        assert_eq!(json["modelData"]["id"], 10);
        assert_eq!(json["pickupDate"], "2026-06-01");
        assert!(json["returnDate"].is_null());
    }
}
