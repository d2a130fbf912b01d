//! Survey form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `SurveyFormProps`, `SurveyFormComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - The rendered field set follows the `schema` prop: identification under
//!   v1/v2, the five sub-metric sliders under v2 only.
//!
//! All user-facing messages are in Portuguese.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SurveyFormProps;
pub use state::SurveyFormComponent;

impl Component for SurveyFormComponent {
    type Message = Msg;
    type Properties = SurveyFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SurveyFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
