//! Whole-form validation gating a submit.

use sawaed_config::schema::ValidationMessages;
use sawaed_dom::{Bindings, Dom, Role};
use tracing::debug;

use crate::field::Field;
use crate::presenter::ErrorPresenter;
use crate::validator::{FieldValidator, Verdict};

/// One required field and its latest verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState<N> {
    pub node: N,
    pub field: Field,
    pub verdict: Verdict,
}

/// Result of one submit attempt, rebuilt from scratch every time.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<N> {
    pub fields: Vec<FieldState<N>>,
}

impl<N> FormState<N> {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.verdict.valid)
    }

    pub fn invalid(&self) -> impl Iterator<Item = &FieldState<N>> {
        self.fields.iter().filter(|f| !f.verdict.valid)
    }

    pub fn first_invalid(&self) -> Option<&FieldState<N>> {
        self.invalid().next()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    validator: FieldValidator,
    presenter: ErrorPresenter,
}

impl FormValidator {
    pub fn new(messages: ValidationMessages) -> Self {
        Self {
            validator: FieldValidator::new(messages),
            presenter: ErrorPresenter::new(),
        }
    }

    pub fn field_validator(&self) -> &FieldValidator {
        &self.validator
    }

    pub fn presenter(&self) -> &ErrorPresenter {
        &self.presenter
    }

    /// Validates and presents every required field of `form`.
    ///
    /// Every field is visited even after a failure so all errors show at once.
    pub fn validate_form<D: Dom>(
        &self,
        dom: &mut D,
        bindings: &Bindings,
        form: &D::Node,
    ) -> FormState<D::Node> {
        let nodes = bindings.resolve_within(dom, form, Role::RequiredField);
        let fields: Vec<_> = nodes
            .into_iter()
            .map(|node| {
                let field = Field::read(dom, &node);
                let verdict = self.validator.validate(&field);
                self.presenter.present(dom, &node, &verdict);
                FieldState {
                    node,
                    field,
                    verdict,
                }
            })
            .collect();

        let state = FormState { fields };
        debug!(
            fields = state.fields.len(),
            invalid = state.invalid().count(),
            "form validated"
        );
        state
    }

    /// Blur: validate and present just this field.
    pub fn validate_field<D: Dom>(&self, dom: &mut D, node: &D::Node) -> Verdict {
        let field = Field::read(dom, node);
        let verdict = self.validator.validate(&field);
        if !verdict.valid {
            debug!(field = field.label(), "{}", verdict.message);
        }
        self.presenter.present(dom, node, &verdict);
        verdict
    }

    /// Any edit clears the field's own error; nothing else is re-validated.
    pub fn on_edit<D: Dom>(&self, dom: &mut D, node: &D::Node) {
        self.presenter.clear(dom, node);
    }
}
