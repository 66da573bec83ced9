//! Headless calculator form.
//!
//! Models the shape picker, the five labelled input fields, the two action
//! buttons and the result box without binding to any toolkit. A front end
//! renders [`FormLayout`] and forwards button presses to
//! [`ShapeForm::calculate_area_perimeter`] or [`ShapeForm::calculate_volume`].

use crate::calculator::{calculate, render_outcome, Action, Calculation};
use crate::error::ShapeError;
use crate::format::NumberFormat;
use crate::parameters::{ParameterSet, MAX_FIELDS};
use crate::registry::{select_canonical, select_shape};
use crate::shape::ShapeKind;
use serde::Serialize;
use tracing::debug;

/// One labelled input field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldSlot {
    pub label: &'static str,
    pub visible: bool,
}

/// What the form currently shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormLayout {
    pub fields: [FieldSlot; MAX_FIELDS],
    /// The only enabled action button
    pub action: Action,
}

impl FormLayout {
    /// Layout for `kind`: one visible field per parameter, the rest hidden
    pub fn for_shape(kind: ShapeKind) -> Self {
        let names = kind.parameter_names();
        let fields = std::array::from_fn(|i| match names.get(i) {
            Some(&label) => FieldSlot {
                label,
                visible: true,
            },
            None => FieldSlot::default(),
        });
        Self {
            fields,
            action: Action::for_dimension(kind.dimension()),
        }
    }

    pub fn visible_fields(&self) -> usize {
        self.fields.iter().filter(|f| f.visible).count()
    }
}

/// Calculator form state
#[derive(Debug, Clone)]
pub struct ShapeForm {
    selected: String,
    layout: FormLayout,
    fields: [String; MAX_FIELDS],
    format: NumberFormat,
    accept_legacy_names: bool,
    result: String,
}

impl ShapeForm {
    pub fn new(initial: ShapeKind, format: NumberFormat) -> Self {
        Self {
            selected: initial.name().to_string(),
            layout: FormLayout::for_shape(initial),
            fields: Default::default(),
            format,
            accept_legacy_names: true,
            result: String::new(),
        }
    }

    /// Restrict selection to canonical names when `accept` is false
    pub fn with_legacy_names(mut self, accept: bool) -> Self {
        self.accept_legacy_names = accept;
        self
    }

    fn lookup(&self, name: &str) -> Option<ShapeKind> {
        if self.accept_legacy_names {
            select_shape(name)
        } else {
            select_canonical(name)
        }
    }

    /// Change the selected shape name.
    ///
    /// The layout only follows names that resolve; an unknown name is kept
    /// as the selection (calculations will then report it) but the visible
    /// fields stay as they were.
    pub fn select(&mut self, name: &str) -> Option<ShapeKind> {
        self.selected = name.to_string();
        let kind = self.lookup(name);
        if let Some(kind) = kind {
            self.layout = FormLayout::for_shape(kind);
        }
        debug!(name, ?kind, "form selection changed");
        kind
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn layout(&self) -> &FormLayout {
        &self.layout
    }

    /// Set the text of field `index`; out-of-range indices are ignored
    pub fn set_field(&mut self, index: usize, text: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            *field = text.into();
        }
    }

    /// Fill fields from the start, clearing the remainder
    pub fn set_fields<S: AsRef<str>>(&mut self, values: &[S]) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.clear();
            if let Some(value) = values.get(i) {
                field.push_str(value.as_ref());
            }
        }
    }

    pub fn clear_fields(&mut self) {
        self.fields.iter_mut().for_each(String::clear);
    }

    pub fn fields(&self) -> &[String; MAX_FIELDS] {
        &self.fields
    }

    /// Text last written to the result box
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Area and perimeter button
    pub fn calculate_area_perimeter(&mut self) -> &str {
        self.run(Action::AreaPerimeter)
    }

    /// Volume button
    pub fn calculate_volume(&mut self) -> &str {
        self.run(Action::Volume)
    }

    /// Whichever button the current layout enables
    pub fn calculate(&mut self) -> &str {
        self.run(self.layout.action)
    }

    /// Compute `action` for the current selection and fields without
    /// touching the result box
    pub fn evaluate(&self, action: Action) -> Result<Calculation, ShapeError> {
        let kind = self
            .lookup(&self.selected)
            .ok_or_else(|| ShapeError::UnknownShape {
                name: self.selected.clone(),
            })?;
        let parameters = ParameterSet::from_fields(&self.fields);
        calculate(kind, &parameters, action)
    }

    fn run(&mut self, action: Action) -> &str {
        let outcome = self.evaluate(action);
        self.result = render_outcome(&outcome, &self.format);
        &self.result
    }
}

impl Default for ShapeForm {
    fn default() -> Self {
        Self::new(ShapeKind::Square, NumberFormat::default())
    }
}
