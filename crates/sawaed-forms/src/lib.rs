//! Form interaction pipeline.
//!
//! Field values are checked by [`FieldValidator`], shown by
//! [`ErrorPresenter`] and gated per form by [`FormValidator`]. Valid
//! dispatch forms are handed to the messaging deep-link by [`Dispatcher`];
//! [`Overlay`] provides the busy indicator and success banner around it.

pub mod dispatcher;
pub mod field;
pub mod form_validator;
pub mod overlay;
pub mod presenter;
pub mod validator;

pub use dispatcher::{Dispatcher, PayloadLine, SubmissionPayload};
pub use field::{Bound, Constraints, Field, FieldKind};
pub use form_validator::{FieldState, FormState, FormValidator};
pub use overlay::{Overlay, OverlayTask};
pub use presenter::ErrorPresenter;
pub use validator::{is_valid_email, is_valid_phone, FieldValidator, Verdict};
