use serde::Serialize;

use crate::chemistry::{data, Step};

/// One row of the property table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelRow {
    /// Property name.
    pub label: &'static str,
    /// Formatted value.
    pub value: String,
}

/// Everything the info panel shows for one step.
///
/// Built by [`PanelView::project`], which depends only on the step. The
/// enabled flags are cosmetic: programmatic navigation is still accepted
/// and the step engine's busy guard is the real boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    /// The projected step.
    pub step: usize,
    /// Property table rows.
    pub rows: Vec<PanelRow>,
    /// Step heading.
    pub title: &'static str,
    /// Explanatory paragraph.
    pub body: &'static str,
    /// Reaction equation.
    pub equation: &'static str,
    /// Whether "Previous" is clickable.
    pub prev_enabled: bool,
    /// Whether "Next" is clickable.
    pub next_enabled: bool,
    /// Indicator text, `"Step n of 4"`.
    pub indicator: String,
    /// Whether a transition is in flight. Buttons render disabled while set.
    pub busy: bool,
}

impl PanelView {
    /// Project `step` onto the panel.
    #[must_use]
    pub fn project(step: Step) -> Self {
        let record = data::record(step.species());
        let text = data::text(step);

        let rows = vec![
            PanelRow {
                label: "Name",
                value: record.name.into(),
            },
            PanelRow {
                label: "Formula",
                value: record.formula.into(),
            },
            PanelRow {
                label: "Molar mass",
                value: format!("{:.2} g/mol", record.molar_mass),
            },
            PanelRow {
                label: "Charge",
                value: format_charge(record.charge),
            },
            PanelRow {
                label: "Role",
                value: record.role.into(),
            },
            PanelRow {
                label: "State",
                value: record.state.into(),
            },
        ];

        Self {
            step: step.index(),
            rows,
            title: text.title,
            body: text.body,
            equation: text.equation,
            prev_enabled: !step.is_first(),
            next_enabled: !step.is_last(),
            indicator: format!("Step {step}"),
            busy: false,
        }
    }

    /// Mark the view as showing an in-flight transition.
    #[must_use]
    pub fn with_busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    /// JSON payload for a web panel.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the view cannot be encoded.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn format_charge(charge: i8) -> String {
    match charge {
        0 => "0".into(),
        c if c > 0 => format!("+{c}"),
        c => format!("{c}"),
    }
}
